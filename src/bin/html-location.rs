//! html-location CLI - relocate HTML entries in an already written output directory
//!
//! Usage:
//!   html-location dist                               Apply ./html-location.toml to dist
//!   html-location dist -m index.html=home/index.html Move one entry
//!   html-location dist --dir pages --dry-run         Show the plan only

use anyhow::{Context, Result};
use clap::Parser;
use html_location::{output, LocationToml, Manifest, Relocator};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Options file picked up from the current directory when `--config` is absent
const DEFAULT_CONFIG: &str = "html-location.toml";

#[derive(Parser)]
#[command(name = "html-location")]
#[command(about = "Relocate HTML entry files inside a bundler's output directory")]
#[command(version)]
struct Cli {
    /// Output directory the bundler wrote to
    out_dir: PathBuf,

    /// TOML options file
    #[arg(short, long, env = "HTML_LOCATION_CONFIG")]
    config: Option<PathBuf>,

    /// Destination root, relative to the output directory
    #[arg(short, long)]
    dir: Option<String>,

    /// Rename entry FROM=TO (repeatable)
    #[arg(short, long = "map", value_name = "FROM=TO", value_parser = parse_mapping)]
    mappings: Vec<(String, String)>,

    /// JSON manifest of emitted files (scans the output directory if omitted)
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Keep directories left empty by a move
    #[arg(long)]
    keep_empty_dirs: bool,

    /// Do not print moves
    #[arg(short, long)]
    quiet: bool,

    /// Print the planned moves without touching the filesystem
    #[arg(short = 'n', long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !cli.out_dir.is_dir() {
        anyhow::bail!("Output directory not found: {}", cli.out_dir.display());
    }

    let (toml, config) = load_options(&cli)?;
    let options = toml.into_options();

    if options.logging {
        if let Some(path) = &config {
            output::info(&format!("using options from {}", path.display()));
        }
        if options.filename.is_none() {
            output::warning("no rename rules given, nothing will move");
        }
    }

    let manifest = match &cli.manifest {
        Some(path) => Manifest::from_json_file(path)
            .with_context(|| format!("Failed to load manifest: {}", path.display()))?,
        None => Manifest::scan(&cli.out_dir)
            .with_context(|| format!("Failed to scan output directory: {}", cli.out_dir.display()))?,
    };

    let relocator = Relocator::new(&options);

    if cli.dry_run {
        let plan = relocator.plan(&manifest);
        if plan.is_empty() {
            output::skip("nothing to relocate");
            return Ok(());
        }
        output::action(&format!("Planned moves in {}", cli.out_dir.display()));
        for mv in &plan {
            let note = if !cli.out_dir.join(&mv.source).exists() {
                " (source missing, skipped)"
            } else if cli.out_dir.join(&mv.dest).exists() {
                " (destination exists, skipped)"
            } else {
                ""
            };
            output::detail(&format!("{}{}", output::move_line(&mv.source, &mv.dest), note));
        }
        return Ok(());
    }

    let report = relocator
        .relocate(&cli.out_dir, &manifest)
        .with_context(|| format!("Failed to relocate HTML in {}", cli.out_dir.display()))?;

    if !options.logging {
        return Ok(());
    }
    if report.moved.is_empty() {
        output::skip("nothing to relocate");
    } else {
        output::success(&format!(
            "{} file(s) moved, {} empty folder(s) removed",
            report.moved.len(),
            report.removed_dirs.len()
        ));
    }

    Ok(())
}

/// Layer defaults, the options file, then flags. Also returns the file used.
fn load_options(cli: &Cli) -> Result<(LocationToml, Option<PathBuf>)> {
    let mut toml = LocationToml {
        logging: Some(true),
        ..Default::default()
    };

    let config = config_path(cli.config.as_deref());
    if let Some(path) = &config {
        let file = LocationToml::load(path)
            .with_context(|| format!("Failed to load options: {}", path.display()))?;
        toml.merge(file);
    }

    let filename = if cli.mappings.is_empty() {
        None
    } else {
        Some(cli.mappings.iter().cloned().collect::<BTreeMap<_, _>>())
    };

    toml.merge(LocationToml {
        dir: cli.dir.clone(),
        filename,
        disable_clear_empty_folder: cli.keep_empty_dirs.then_some(true),
        logging: cli.quiet.then_some(false),
    });

    Ok((toml, config))
}

fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let default = PathBuf::from(DEFAULT_CONFIG);
    default.exists().then_some(default)
}

/// Parse a `FROM=TO` rename entry
fn parse_mapping(s: &str) -> Result<(String, String), String> {
    let (from, to) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FROM=TO, got '{}'", s))?;
    let (from, to) = (from.trim(), to.trim());
    if from.is_empty() || to.is_empty() {
        return Err(format!("expected FROM=TO, got '{}'", s));
    }
    Ok((from.to_string(), to.to_string()))
}
