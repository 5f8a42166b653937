//! Relocator error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a relocation pass.
///
/// Filesystem variants carry the path that failed. Moves applied before the
/// failure stay applied.
#[derive(Error, Debug)]
pub enum RelocateError {
    #[error("cannot create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("move failed: {} -> {}: {source}", .from.display(), .to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot list directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot remove directory {}: {source}", .path.display())]
    RemoveDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid options: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("cannot scan output directory: {0}")]
    Scan(#[from] walkdir::Error),
}
