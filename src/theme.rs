//! Theme discovery from the bundled `css` asset directory.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use walkdir::WalkDir;

/// Asset subdirectory holding the theme stylesheets.
pub const THEMES_DIR: &str = "css";
/// File name suffix that marks a stylesheet as a selectable theme.
pub const THEME_SUFFIX: &str = ".colors.css";

/// A selectable theme, keyed by its asset file name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeDescriptor {
    /// Stable file name, e.g. `dark_blue.colors.css`.
    pub id: String,
    /// Human readable title shown in the sidebar.
    pub display_name: String,
}

impl ThemeDescriptor {
    /// Build a descriptor, deriving the display name from the file name.
    pub fn from_file_name(id: impl Into<String>) -> Self {
        let id = id.into();
        let display_name = humanize(&id);
        Self { id, display_name }
    }
}

/// List every theme in `dir`, sorted by id. Failures yield an empty list.
pub fn list_themes(dir: &Path) -> Vec<ThemeDescriptor> {
    match theme_file_names(dir) {
        Ok(names) => names
            .into_iter()
            .map(ThemeDescriptor::from_file_name)
            .collect(),
        Err(err) => {
            log::warn!("theme catalog unavailable: {err:#}");
            Vec::new()
        }
    }
}

/// Read the CSS text of every theme. Unreadable files map to an empty string.
pub fn load_css_map(dir: &Path, themes: &[ThemeDescriptor]) -> HashMap<String, String> {
    let mut map = HashMap::with_capacity(themes.len());
    for theme in themes {
        let path = dir.join(&theme.id);
        let css = fs::read_to_string(&path).unwrap_or_else(|err| {
            log::warn!("failed to read theme {}: {err}", path.display());
            String::new()
        });
        map.insert(theme.id.clone(), css);
    }
    map
}

/// Return true when the file name carries the theme suffix, ignoring ASCII case.
pub fn is_theme_file(name: &str) -> bool {
    strip_theme_suffix(name).is_some()
}

fn theme_file_names(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.with_context(|| format!("failed to list {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if is_theme_file(name) {
            names.push(name.to_string());
        }
    }
    names.sort();
    Ok(names)
}

fn strip_theme_suffix(name: &str) -> Option<&str> {
    let split = name.len().checked_sub(THEME_SUFFIX.len())?;
    let (stem, suffix) = (name.get(..split)?, name.get(split..)?);
    suffix.eq_ignore_ascii_case(THEME_SUFFIX).then_some(stem)
}

/// `dark_high-contrast.colors.css` becomes `Dark High Contrast`.
fn humanize(id: &str) -> String {
    let stem = strip_theme_suffix(id).unwrap_or(id);
    let title = stem
        .split(['_', '-', ' '])
        .filter(|token| !token.trim().is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");
    if title.is_empty() {
        id.to_string()
    } else {
        title
    }
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
