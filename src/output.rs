//! Colored console output for html-location
//!
//! Uses owo-colors for terminal colors. Move and cleanup lines carry the plugin
//! name as prefix so they stand out in a bundler's own log.

use owo_colors::OwoColorize;

/// Prefix printed before every relocation line
pub const PLUGIN_NAME: &str = "html-location";

/// Plain text of a move line
/// Example: "[index.html] ==> [pages/index.html]"
pub fn move_line(source: &str, dest: &str) -> String {
    format!("[{}] ==> [{}]", source, dest)
}

/// Plain text of the cleanup notice
pub fn clear_line() -> &'static str {
    "clear empty folder!"
}

/// Print a relocated file (green)
/// Example: "html-location:  [index.html] ==> [pages/index.html]"
pub fn moved(source: &str, dest: &str) {
    println!("{}:  {}", PLUGIN_NAME, move_line(source, dest).green());
}

/// Print the empty-folder cleanup notice (red)
pub fn cleared() {
    println!("{}:  {}", PLUGIN_NAME, clear_line().red());
}

/// Print an action header (blue, bold)
/// Example: "==> Relocating HTML in dist"
pub fn action(message: &str) {
    println!("{} {}", "==>".blue().bold(), message.bold());
}

/// Print a detail line (dimmed)
/// Example: "     index.html -> home/index.html"
pub fn detail(message: &str) {
    println!("     {}", message.dimmed());
}

/// Print a success message (green)
pub fn success(message: &str) {
    println!("{} {}", "==>".green().bold(), message.green());
}

/// Print an info message (cyan)
pub fn info(message: &str) {
    println!("{} {}", "::".cyan(), message);
}

/// Print a skip message (dimmed)
/// Example: "==> nothing to relocate"
pub fn skip(message: &str) {
    println!("{} {}", "==>".dimmed(), message.dimmed());
}

/// Print a warning message (yellow)
pub fn warning(message: &str) {
    eprintln!("{} {}", "warning:".yellow().bold(), message.yellow());
}
