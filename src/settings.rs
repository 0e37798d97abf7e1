//! Persistence of the selected theme.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::theme::ThemeDescriptor;

/// File name used under the per-user config directory.
const SETTINGS_FILE: &str = "settings.json";
/// Theme used when nothing was saved yet or the saved one disappeared.
pub const DEFAULT_THEME_FILE: &str = "none.colors.css";

/// Settings persisted to `settings.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ViewerSettings {
    /// File name of the last selected theme.
    pub selected_theme_file: String,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            selected_theme_file: DEFAULT_THEME_FILE.to_string(),
        }
    }
}

/// Durable store for the selected theme id.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    /// Store backed by `settings.json` in the per-user config directory.
    pub fn open_default() -> Result<Self> {
        let proj_dirs = ProjectDirs::from("us", "minecraftchest2", "wikidot_viewer")
            .ok_or_else(|| anyhow!("cannot determine config directory"))?;
        Ok(Self::at(proj_dirs.config_dir().join(SETTINGS_FILE)))
    }

    /// Store backed by an explicit file.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings from disk, returning defaults when missing or corrupt.
    pub fn load(&self) -> ViewerSettings {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(_) => return ViewerSettings::default(),
        };
        serde_json::from_str(&contents).unwrap_or_else(|err| {
            log::warn!("ignoring unreadable {}: {err}", self.path.display());
            ViewerSettings::default()
        })
    }

    /// Resolve the active theme against `catalog`. Never fails.
    pub fn load_selected(&self, catalog: &[ThemeDescriptor]) -> ThemeDescriptor {
        resolve_selected(catalog, &self.load().selected_theme_file)
    }

    /// Persist the selected theme id. Last write wins.
    pub fn save_selected(&self, theme: &ThemeDescriptor) -> Result<()> {
        let settings = ViewerSettings {
            selected_theme_file: theme.id.clone(),
        };
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
        let contents = serde_json::to_string_pretty(&settings)?;
        fs::write(&self.path, contents)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }
}

/// Saved id, then the default theme, then the first theme, then a placeholder.
pub fn resolve_selected(catalog: &[ThemeDescriptor], saved: &str) -> ThemeDescriptor {
    catalog
        .iter()
        .find(|theme| theme.id == saved)
        .or_else(|| catalog.iter().find(|theme| theme.id == DEFAULT_THEME_FILE))
        .or_else(|| catalog.first())
        .cloned()
        .unwrap_or_else(|| ThemeDescriptor {
            id: DEFAULT_THEME_FILE.to_string(),
            display_name: "None".to_string(),
        })
}
