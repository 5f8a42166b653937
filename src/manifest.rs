//! Bundle manifest - the host's record of every file it wrote.
//!
//! Entries keep emission order. Paths are relative to the output root and
//! always use `/` as separator, whatever the platform.

use crate::relocator::RelocateError;
use serde::Deserialize;
use std::path::Path;
use walkdir::WalkDir;

/// What kind of output a manifest entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    /// Emitted file that is not a code chunk (HTML, CSS, images, ...).
    #[default]
    Asset,
    /// Code chunk.
    Chunk,
}

/// One emitted output file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ManifestEntry {
    #[serde(rename = "fileName")]
    pub file_name: String,
    #[serde(rename = "type", default)]
    pub kind: OutputKind,
}

impl ManifestEntry {
    pub fn asset(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            kind: OutputKind::Asset,
        }
    }

    pub fn chunk(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            kind: OutputKind::Chunk,
        }
    }
}

/// Ordered list of emitted files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn new(entries: Vec<ManifestEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, entry: ManifestEntry) {
        self.entries.push(entry);
    }

    /// Emitted paths in order.
    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.file_name.as_str())
    }

    /// Parse a JSON array of `{ "fileName": ..., "type": "asset" | "chunk" }`.
    pub fn from_json_str(content: &str) -> Result<Self, RelocateError> {
        let entries: Vec<ManifestEntry> = serde_json::from_str(content)?;
        Ok(Self::new(entries))
    }

    pub fn from_json_file(path: &Path) -> Result<Self, RelocateError> {
        let content = std::fs::read_to_string(path).map_err(|source| RelocateError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Build a manifest from what is on disk under `root`.
    ///
    /// Used when no host manifest is available. Files ending in `.js` or `.mjs`
    /// are recorded as chunks, everything else as assets. Entries are sorted by
    /// path.
    pub fn scan(root: impl AsRef<Path>) -> Result<Self, RelocateError> {
        let root = root.as_ref();
        let mut entries = Vec::new();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(rel) = entry.path().strip_prefix(root) else {
                continue;
            };
            let file_name = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            let kind = if file_name.ends_with(".js") || file_name.ends_with(".mjs") {
                OutputKind::Chunk
            } else {
                OutputKind::Asset
            };
            entries.push(ManifestEntry { file_name, kind });
        }

        entries.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(Self::new(entries))
    }
}

impl FromIterator<ManifestEntry> for Manifest {
    fn from_iter<T: IntoIterator<Item = ManifestEntry>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
