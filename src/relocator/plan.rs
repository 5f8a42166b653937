//! Move-instruction computation.

use super::paths::{dest_path, is_html, stays_inside};
use crate::manifest::Manifest;
use crate::options::RenameRule;

/// A pending relocation. Both paths are relative to the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveInstruction {
    pub source: String,
    pub dest: String,
}

/// Compute the moves for every HTML entry in `manifest`, in manifest order.
///
/// A mapped path is kept only when it is non-empty, ends in `.html`, differs
/// from the emitted path and does not climb out of the output root. Anything
/// else is skipped without complaint.
pub fn plan_moves(manifest: &Manifest, rule: Option<&RenameRule>, dest_root: &str) -> Vec<MoveInstruction> {
    let Some(rule) = rule else {
        return Vec::new();
    };

    manifest
        .file_names()
        .filter(|p| is_html(p))
        .filter_map(|source| {
            let mapped = rule.rename(source)?;
            if mapped.is_empty() || !is_html(&mapped) || mapped == source {
                return None;
            }
            let dest = dest_path(dest_root, &mapped);
            if !stays_inside(&dest) {
                return None;
            }
            Some(MoveInstruction {
                source: source.to_string(),
                dest,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::ManifestEntry;
    use crate::options::LocationOptions;

    fn manifest(names: &[&str]) -> Manifest {
        names.iter().map(|n| ManifestEntry::asset(*n)).collect()
    }

    fn mv(source: &str, dest: &str) -> MoveInstruction {
        MoveInstruction {
            source: source.into(),
            dest: dest.into(),
        }
    }

    #[test]
    fn test_no_rule_no_moves() {
        assert!(plan_moves(&manifest(&["index.html"]), None, "pages/").is_empty());
    }

    #[test]
    fn test_static_map_only_touches_html_keys() {
        let opts = LocationOptions::default().with_filename_map([
            ("index.html", "home/index.html"),
            ("main.js", "home/main.html"),
            ("missing.html", "x/missing.html"),
        ]);
        let plan = plan_moves(
            &manifest(&["index.html", "main.js", "about.html"]),
            opts.filename.as_ref(),
            "",
        );
        assert_eq!(plan, [mv("index.html", "home/index.html")]);
    }

    #[test]
    fn test_static_map_skips_invalid_values() {
        let opts = LocationOptions::default().with_filename_map([
            ("a.html", "a.html"),
            ("b.html", "b.txt"),
            ("c.html", ""),
        ]);
        let plan = plan_moves(&manifest(&["a.html", "b.html", "c.html"]), opts.filename.as_ref(), "");
        assert!(plan.is_empty());
    }

    #[test]
    fn test_dynamic_rule_filters_results() {
        let opts = LocationOptions::default().with_filename_fn(|p| match p {
            "index.html" => "index.html".to_string(),
            "about.html" => "about/index.htm".to_string(),
            "blog.html" => String::new(),
            other => format!("pages/{}", other),
        });
        let plan = plan_moves(
            &manifest(&["index.html", "about.html", "blog.html", "contact.html", "app.js"]),
            opts.filename.as_ref(),
            "",
        );
        assert_eq!(plan, [mv("contact.html", "pages/contact.html")]);
    }

    #[test]
    fn test_dest_root_and_leading_slash() {
        let opts = LocationOptions::default().with_filename_map([("index.html", "/home/index.html")]);
        let plan = plan_moves(&manifest(&["index.html"]), opts.filename.as_ref(), "site/");
        assert_eq!(plan, [mv("index.html", "site/home/index.html")]);
    }

    #[test]
    fn test_traversal_in_mapped_path_is_dropped() {
        let opts = LocationOptions::default().with_filename_fn(|_| "../outside.html".to_string());
        let plan = plan_moves(&manifest(&["index.html"]), opts.filename.as_ref(), "");
        assert!(plan.is_empty());
    }

    #[test]
    fn test_keeps_manifest_order() {
        let opts = LocationOptions::default().with_filename_fn(|p| format!("out/{}", p));
        let plan = plan_moves(&manifest(&["z.html", "a.html", "m.html"]), opts.filename.as_ref(), "");
        let sources: Vec<_> = plan.iter().map(|m| m.source.as_str()).collect();
        assert_eq!(sources, ["z.html", "a.html", "m.html"]);
    }
}
