//! Filesystem operations used by the relocation pass.

use super::error::RelocateError;
use std::path::Path;

/// Ensure a file's parent directory exists.
///
/// Creates the parent directory (and all ancestors) if it doesn't exist.
pub fn ensure_parent_dir(path: &Path) -> Result<(), RelocateError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|source| RelocateError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Rename a file, creating the destination's parent directories as needed.
///
/// Source and destination are expected on the same filesystem.
pub fn move_file(src: &Path, dest: &Path) -> Result<(), RelocateError> {
    ensure_parent_dir(dest)?;
    std::fs::rename(src, dest).map_err(|source| RelocateError::Rename {
        from: src.to_path_buf(),
        to: dest.to_path_buf(),
        source,
    })
}

/// True when `dir` has no entries.
pub fn is_empty_dir(dir: &Path) -> Result<bool, RelocateError> {
    let mut entries = std::fs::read_dir(dir).map_err(|source| RelocateError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;
    Ok(entries.next().is_none())
}

pub fn remove_empty_dir(dir: &Path) -> Result<(), RelocateError> {
    std::fs::remove_dir(dir).map_err(|source| RelocateError::RemoveDir {
        path: dir.to_path_buf(),
        source,
    })
}
