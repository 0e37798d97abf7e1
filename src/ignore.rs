//! Paths on the target wiki that must never be themed.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Asset file listing the ignored paths, one per line.
pub const IGNORE_LIST_FILE: &str = "css_ignore_list.txt";

/// Read the ignore list. A missing or unreadable file yields an empty set.
pub fn load_ignore_list(path: &Path) -> HashSet<String> {
    match fs::read_to_string(path) {
        Ok(text) => parse_ignore_list(&text),
        Err(err) => {
            log::warn!("ignore list {} unavailable: {err}", path.display());
            HashSet::new()
        }
    }
}

/// Parse newline separated paths, skipping blanks and `#` comments.
pub fn parse_ignore_list(text: &str) -> HashSet<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            if line.starts_with('/') {
                line.to_string()
            } else {
                format!("/{line}")
            }
        })
        .collect()
}

/// Exact membership test; no prefix or glob matching.
pub fn is_ignored(path: &str, ignore: &HashSet<String>) -> bool {
    ignore.contains(path)
}
