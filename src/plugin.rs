//! Host-side plugin contract.
//!
//! A bundler calls every registered plugin's `write_bundle` hook once all
//! output files are on disk. Plugins may ask to run early ([`HookOrder::Pre`])
//! or late ([`HookOrder::Post`]); [`PluginDriver`] honours that, keeping
//! registration order inside each group.

use crate::manifest::Manifest;
use crate::options::LocationOptions;
use crate::output::PLUGIN_NAME;
use crate::relocator::{RelocateError, Relocator};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Resolved output options handed to write hooks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputOptions {
    /// Output directory.
    pub dir: Option<PathBuf>,
    /// Single output file, used when no directory is configured.
    pub file: Option<PathBuf>,
}

impl OutputOptions {
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
            file: None,
        }
    }

    /// Directory the bundle was written to: `dir`, else the parent of `file`,
    /// else the current directory.
    pub fn output_root(&self) -> PathBuf {
        if let Some(dir) = &self.dir {
            return dir.clone();
        }
        match self.file.as_deref().and_then(Path::parent) {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

/// When a hook wants to run relative to the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum HookOrder {
    Pre,
    #[default]
    Normal,
    Post,
}

/// A plugin with a "bundle written" hook.
pub trait OutputPlugin {
    fn name(&self) -> &str;

    fn write_bundle_order(&self) -> HookOrder {
        HookOrder::Normal
    }

    fn write_bundle(&self, options: &OutputOptions, bundle: &Manifest) -> Result<(), RelocateError>;
}

#[derive(Error, Debug)]
pub enum PluginError {
    #[error("plugin {plugin} failed in write_bundle: {source}")]
    Hook {
        plugin: String,
        source: RelocateError,
    },
}

/// Relocates HTML entries once the bundle is written.
///
/// Runs with [`HookOrder::Post`] so other plugins see the files where the
/// bundler wrote them.
#[derive(Debug, Clone, Default)]
pub struct HtmlLocation {
    options: LocationOptions,
}

impl HtmlLocation {
    pub fn new(options: LocationOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LocationOptions {
        &self.options
    }
}

impl OutputPlugin for HtmlLocation {
    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    fn write_bundle_order(&self) -> HookOrder {
        HookOrder::Post
    }

    fn write_bundle(&self, options: &OutputOptions, bundle: &Manifest) -> Result<(), RelocateError> {
        Relocator::new(&self.options).relocate(&options.output_root(), bundle)?;
        Ok(())
    }
}

/// Minimal plugin host: holds plugins and runs their write hooks in order.
#[derive(Default)]
pub struct PluginDriver {
    plugins: Vec<Box<dyn OutputPlugin>>,
}

impl PluginDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<P: OutputPlugin + 'static>(&mut self, plugin: P) -> &mut Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Plugin names in the order their write hooks will run.
    pub fn hook_order(&self) -> Vec<&str> {
        self.sorted().into_iter().map(|p| p.name()).collect()
    }

    /// Run every `write_bundle` hook. The first failure stops the run.
    pub fn write_bundle(&self, options: &OutputOptions, bundle: &Manifest) -> Result<(), PluginError> {
        for plugin in self.sorted() {
            plugin
                .write_bundle(options, bundle)
                .map_err(|source| PluginError::Hook {
                    plugin: plugin.name().to_string(),
                    source,
                })?;
        }
        Ok(())
    }

    fn sorted(&self) -> Vec<&dyn OutputPlugin> {
        let mut plugins: Vec<&dyn OutputPlugin> = self.plugins.iter().map(|p| p.as_ref()).collect();
        // stable: registration order within a group
        plugins.sort_by_key(|p| p.write_bundle_order());
        plugins
    }
}
