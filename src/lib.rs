//! Relocate HTML entry files after a bundler has written its output
//!
//! Bundlers emit HTML entries next to the assets they reference. This crate runs
//! as the last "bundle written" hook and moves those HTML files to the paths the
//! caller asks for, then removes any directories the moves left empty.
//!
//! # Example
//!
//! ```no_run
//! use html_location::{HtmlLocation, LocationOptions, Manifest, OutputOptions, PluginDriver};
//!
//! let options = LocationOptions::default()
//!     .with_dir("pages")
//!     .with_filename_map([("index.html", "home/index.html")]);
//!
//! let mut driver = PluginDriver::new();
//! driver.register(HtmlLocation::new(options));
//!
//! let manifest = Manifest::scan("dist").unwrap();
//! driver
//!     .write_bundle(&OutputOptions::with_dir("dist"), &manifest)
//!     .unwrap();
//! ```
//!
//! # Rules
//!
//! - `dir` - destination root under the output directory (`../` segments are stripped)
//! - `filename` - a static map or a function from the emitted path to the new path
//! - `disable_clear_empty_folder` - keep directories emptied by a move
//! - `logging` - print each move (green) and the cleanup notice (red)
//!
//! Entries whose mapped path does not end in `.html`, or equals the original
//! path, are skipped. Existing destinations are never overwritten, so running
//! the hook twice is harmless.
//!
//! # Ordering
//!
//! The hook must run exactly once, after every output file is on disk and before
//! anything else reads the output directory. [`HtmlLocation`] asks for
//! [`HookOrder::Post`]; enforcing that is the host's job.

pub mod manifest;
pub mod options;
pub mod output;
pub mod plugin;
pub mod relocator;

pub use manifest::{Manifest, ManifestEntry, OutputKind};
pub use options::{LocationOptions, LocationToml, RenameRule};
pub use plugin::{HookOrder, HtmlLocation, OutputOptions, OutputPlugin, PluginDriver, PluginError};
pub use relocator::{MoveInstruction, RelocateError, RelocationReport, Relocator};
