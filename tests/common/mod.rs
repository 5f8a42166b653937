//! Common test utilities for relocation tests.

#![allow(dead_code)]

use html_location::{Manifest, ManifestEntry};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a test environment with an empty `dist` output root
pub fn create_test_env() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let out_dir = dir.path().join("dist");
    std::fs::create_dir_all(&out_dir).unwrap();
    (dir, out_dir)
}

/// Write an output file, creating its parent directories
pub fn write_output(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

/// Write every path to disk and return the matching manifest
pub fn emit(root: &Path, names: &[&str]) -> Manifest {
    names
        .iter()
        .map(|name| {
            write_output(root, name, name);
            if name.ends_with(".js") {
                ManifestEntry::chunk(*name)
            } else {
                ManifestEntry::asset(*name)
            }
        })
        .collect()
}

/// Read an output file back
pub fn read_output(root: &Path, rel: &str) -> String {
    std::fs::read_to_string(root.join(rel)).unwrap()
}
