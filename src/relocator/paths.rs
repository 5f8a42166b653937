//! String rules for relative output paths.
//!
//! Manifest paths and destinations are `/`-separated strings relative to the
//! output root. They only become real paths when joined onto the root.

/// Suffix that marks an HTML entry.
pub const HTML_EXT: &str = ".html";

pub fn is_html(path: &str) -> bool {
    path.ends_with(HTML_EXT)
}

/// Remove every run of dots that is directly followed by `/`, slash included.
///
/// One left-to-right pass: `../../etc` becomes `etc`, `./a` becomes `a`, while
/// dots inside a name (`a.b/c`) are kept.
pub fn strip_traversal(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut dots = 0usize;

    for c in input.chars() {
        match c {
            '.' => dots += 1,
            '/' if dots > 0 => dots = 0,
            _ => {
                out.extend(std::iter::repeat_n('.', dots));
                dots = 0;
                out.push(c);
            }
        }
    }
    out.extend(std::iter::repeat_n('.', dots));
    out
}

/// Resolve the configured destination root into a prefix.
///
/// Returns `""` when there is no usable root, otherwise a relative prefix
/// ending in `/`.
pub fn resolve_dest_root(dir: Option<&str>) -> String {
    let Some(dir) = dir else {
        return String::new();
    };

    let stripped = strip_traversal(dir.trim());
    let root = stripped.trim().trim_start_matches('/');
    if root.is_empty() {
        return String::new();
    }

    if root.ends_with('/') {
        root.to_string()
    } else {
        format!("{}/", root)
    }
}

/// Prefix a mapped path with the destination root.
pub fn dest_path(dest_root: &str, path: &str) -> String {
    format!("{}{}", dest_root, path.trim_start_matches('/'))
}

/// True when a relative path stays inside the output root.
pub fn stays_inside(path: &str) -> bool {
    !path.split('/').any(|segment| segment == "..")
}
