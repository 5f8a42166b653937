//! Empty directory cleanup
//!
//! After the moves, directories that held a moved file may be empty. Each one
//! is removed and the walk continues with its parent, stopping at the first
//! directory that still has entries, no longer exists, or is the output root.

use super::error::RelocateError;
use super::fs_utils::{is_empty_dir, remove_empty_dir};
use std::path::{Path, PathBuf};

/// Remove empty directories upward from each of `dirs`, bounded by `root`.
///
/// Returns the removed directories in removal order. `root` itself is never
/// removed, nor is anything outside it.
pub fn clear_empty_dirs(dirs: &[PathBuf], root: &Path) -> Result<Vec<PathBuf>, RelocateError> {
    let mut removed = Vec::new();

    for dir in dirs {
        let mut current = dir.as_path();
        while current != root && current.starts_with(root) && current.is_dir() {
            if !is_empty_dir(current)? {
                break;
            }
            remove_empty_dir(current)?;
            removed.push(current.to_path_buf());

            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }
    }

    Ok(removed)
}
