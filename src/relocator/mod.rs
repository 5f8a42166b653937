//! The relocation pass.
//!
//! One synchronous call per build: plan the moves, apply them, clear the
//! directories they emptied. Nothing is kept between calls.

mod cleanup;
mod error;
mod fs_utils;
pub mod paths;
mod plan;

pub use cleanup::clear_empty_dirs;
pub use error::RelocateError;
pub use plan::{plan_moves, MoveInstruction};

use crate::manifest::Manifest;
use crate::options::LocationOptions;
use crate::output;
use std::path::{Path, PathBuf};

/// What a relocation pass actually did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelocationReport {
    /// Moves performed, in order.
    pub moved: Vec<MoveInstruction>,
    /// Directories removed by cleanup, in removal order.
    pub removed_dirs: Vec<PathBuf>,
}

impl RelocationReport {
    pub fn is_noop(&self) -> bool {
        self.moved.is_empty() && self.removed_dirs.is_empty()
    }
}

/// Applies a set of [`LocationOptions`] to written bundles.
#[derive(Debug, Clone, Copy)]
pub struct Relocator<'a> {
    options: &'a LocationOptions,
}

impl<'a> Relocator<'a> {
    pub fn new(options: &'a LocationOptions) -> Self {
        Self { options }
    }

    /// Destination root prefix, `""` when none is configured.
    pub fn dest_root(&self) -> String {
        paths::resolve_dest_root(self.options.dir.as_deref())
    }

    /// Moves that `relocate` would attempt for `manifest`.
    ///
    /// Does not look at the filesystem, so entries whose destination already
    /// exists are still listed here.
    pub fn plan(&self, manifest: &Manifest) -> Vec<MoveInstruction> {
        plan_moves(manifest, self.options.filename.as_ref(), &self.dest_root())
    }

    /// Relocate the HTML entries of `manifest` under `root`.
    ///
    /// A move happens only when its source exists and its destination does
    /// not, so existing files are never overwritten and a second run is a
    /// no-op. When two entries map to the same destination the first one wins.
    ///
    /// Any filesystem failure stops the pass; moves already made stay in place.
    pub fn relocate(&self, root: &Path, manifest: &Manifest) -> Result<RelocationReport, RelocateError> {
        let mut report = RelocationReport::default();
        let mut source_dirs: Vec<PathBuf> = Vec::new();

        for instruction in self.plan(manifest) {
            let src = root.join(&instruction.source);
            let dest = root.join(&instruction.dest);
            if !src.exists() || dest.exists() {
                continue;
            }

            fs_utils::move_file(&src, &dest)?;

            if let Some(parent) = src.parent()
                && !source_dirs.iter().any(|d| d == parent)
            {
                source_dirs.push(parent.to_path_buf());
            }
            if self.options.logging {
                output::moved(&instruction.source, &instruction.dest);
            }
            report.moved.push(instruction);
        }

        if !self.options.disable_clear_empty_folder {
            report.removed_dirs = clear_empty_dirs(&source_dirs, root)?;
            if !report.removed_dirs.is_empty() && self.options.logging {
                output::cleared();
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::ManifestEntry;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    fn manifest(names: &[&str]) -> Manifest {
        names.iter().map(|n| ManifestEntry::asset(*n)).collect()
    }

    #[test]
    fn test_dest_root_resolution() {
        let opts = LocationOptions::default().with_dir(" ../../etc ");
        assert_eq!(Relocator::new(&opts).dest_root(), "etc/");
    }

    #[test]
    fn test_moves_and_reports() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write(root, "index.html", "home");
        write(root, "main.js", "js");

        let opts = LocationOptions::default().with_filename_map([("index.html", "home/index.html")]);
        let report = Relocator::new(&opts)
            .relocate(root, &manifest(&["index.html", "main.js"]))
            .unwrap();

        assert_eq!(report.moved.len(), 1);
        assert!(report.removed_dirs.is_empty());
        assert_eq!(std::fs::read_to_string(root.join("home/index.html")).unwrap(), "home");
        assert!(!root.join("index.html").exists());
        assert!(root.join("main.js").exists());
    }

    #[test]
    fn test_never_overwrites() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write(root, "index.html", "new");
        write(root, "home/index.html", "old");

        let opts = LocationOptions::default().with_filename_map([("index.html", "home/index.html")]);
        let report = Relocator::new(&opts).relocate(root, &manifest(&["index.html"])).unwrap();

        assert!(report.is_noop());
        assert_eq!(std::fs::read_to_string(root.join("home/index.html")).unwrap(), "old");
        assert!(root.join("index.html").exists());
    }

    #[test]
    fn test_missing_source_is_skipped() {
        let temp = TempDir::new().unwrap();
        let opts = LocationOptions::default().with_filename_map([("index.html", "home/index.html")]);
        let report = Relocator::new(&opts)
            .relocate(temp.path(), &manifest(&["index.html"]))
            .unwrap();
        assert!(report.is_noop());
        assert!(!temp.path().join("home").exists());
    }

    #[test]
    fn test_same_destination_first_wins() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write(root, "a.html", "a");
        write(root, "b.html", "b");

        let opts = LocationOptions::default().with_filename_fn(|_| "page.html".to_string());
        let report = Relocator::new(&opts)
            .relocate(root, &manifest(&["a.html", "b.html"]))
            .unwrap();

        assert_eq!(report.moved.len(), 1);
        assert_eq!(std::fs::read_to_string(root.join("page.html")).unwrap(), "a");
        assert!(root.join("b.html").exists());
    }

    #[test]
    fn test_shared_source_dir_cleared_once() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write(root, "src/pages/a.html", "a");
        write(root, "src/pages/b.html", "b");

        let opts = LocationOptions::default().with_filename_fn(|p| {
            p.rsplit('/').next().unwrap_or(p).to_string()
        });
        let report = Relocator::new(&opts)
            .relocate(root, &manifest(&["src/pages/a.html", "src/pages/b.html"]))
            .unwrap();

        assert_eq!(report.moved.len(), 2);
        assert_eq!(report.removed_dirs, [root.join("src/pages"), root.join("src")]);
        assert!(root.join("a.html").exists());
        assert!(root.join("b.html").exists());
    }
}
