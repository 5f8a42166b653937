//! Relocation rules and their TOML form.
//!
//! [`LocationOptions`] is built once, when the plugin is registered, and never
//! changes afterwards. The rename rule is picked at construction time as either a
//! static map or a function, so the relocation pass never inspects its shape again.
//!
//! Only the static map has a file representation:
//!
//! ```toml
//! dir = "pages"
//! disable_clear_empty_folder = false
//! logging = true
//!
//! [filename]
//! "index.html" = "home/index.html"
//! ```

use crate::relocator::RelocateError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Function form of a rename rule: emitted path in, new path out.
///
/// An empty string means "leave this file where it is".
pub type RenameFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// How an emitted HTML path is mapped to its new location.
#[derive(Clone)]
pub enum RenameRule {
    /// Exact emitted path -> new path.
    Static(BTreeMap<String, String>),
    /// Computed for every emitted HTML file.
    Dynamic(RenameFn),
}

impl RenameRule {
    /// Raw mapped value for `path`, before any validity checks.
    pub fn rename(&self, path: &str) -> Option<String> {
        match self {
            RenameRule::Static(map) => map.get(path).cloned(),
            RenameRule::Dynamic(f) => Some(f(path)),
        }
    }
}

impl fmt::Debug for RenameRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenameRule::Static(map) => f.debug_tuple("Static").field(map).finish(),
            RenameRule::Dynamic(_) => f.write_str("Dynamic(<fn>)"),
        }
    }
}

/// Caller-supplied relocation rules.
#[derive(Debug, Clone, Default)]
pub struct LocationOptions {
    /// Destination root, relative to the output directory.
    pub dir: Option<String>,
    /// Rename rule; `None` moves nothing.
    pub filename: Option<RenameRule>,
    /// Keep directories left empty by a move.
    pub disable_clear_empty_folder: bool,
    /// Print every move and the cleanup notice.
    pub logging: bool,
}

impl LocationOptions {
    pub fn with_dir(mut self, dir: impl Into<String>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    pub fn with_filename_map<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.filename = Some(RenameRule::Static(map));
        self
    }

    pub fn with_filename_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.filename = Some(RenameRule::Dynamic(Arc::new(f)));
        self
    }

    pub fn keep_empty_dirs(mut self, keep: bool) -> Self {
        self.disable_clear_empty_folder = keep;
        self
    }

    pub fn with_logging(mut self, logging: bool) -> Self {
        self.logging = logging;
        self
    }

    /// Parse options from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, RelocateError> {
        Ok(LocationToml::parse(content)?.into_options())
    }

    /// Read and parse an options file.
    pub fn from_toml_file(path: &Path) -> Result<Self, RelocateError> {
        Ok(LocationToml::load(path)?.into_options())
    }
}

/// On-disk form of [`LocationOptions`].
///
/// Every field is optional so files and command-line flags can be layered with
/// [`LocationToml::merge`] before the final options are built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationToml {
    pub dir: Option<String>,
    pub filename: Option<BTreeMap<String, String>>,
    #[serde(alias = "disableClearEmptyFolder")]
    pub disable_clear_empty_folder: Option<bool>,
    pub logging: Option<bool>,
}

impl LocationToml {
    pub fn parse(content: &str) -> Result<Self, RelocateError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, RelocateError> {
        let content = std::fs::read_to_string(path).map_err(|source| RelocateError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Overlay `other` on top of `self`. Rename entries are merged key by key.
    pub fn merge(&mut self, other: LocationToml) {
        if other.dir.is_some() {
            self.dir = other.dir;
        }
        if other.disable_clear_empty_folder.is_some() {
            self.disable_clear_empty_folder = other.disable_clear_empty_folder;
        }
        if other.logging.is_some() {
            self.logging = other.logging;
        }
        match (self.filename.as_mut(), other.filename) {
            (Some(dst), Some(src)) => dst.extend(src),
            (None, Some(src)) => self.filename = Some(src),
            _ => {}
        }
    }

    pub fn into_options(self) -> LocationOptions {
        LocationOptions {
            dir: self.dir,
            filename: self.filename.map(RenameRule::Static),
            disable_clear_empty_folder: self.disable_clear_empty_folder.unwrap_or(false),
            logging: self.logging.unwrap_or(false),
        }
    }
}
