//! Session state tying page loads and theme picks to the injector.

use std::collections::{HashMap, HashSet};

use anyhow::{Result, anyhow};

use crate::config::ViewerConfig;
use crate::ignore::{self, IGNORE_LIST_FILE};
use crate::inject::{self, BrowserSurface};
use crate::location::Location;
use crate::settings::ThemeStore;
use crate::theme::{self, THEMES_DIR, ThemeDescriptor};

/// What a finished page load resulted in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PageLoad {
    /// Not a URL with a host; nothing changed.
    Unparsed,
    /// Host is not the target wiki.
    OffSite,
    /// Path is on the ignore list.
    Ignored,
    /// The active theme was applied.
    Themed,
}

/// Owner of everything theming needs between page loads.
#[derive(Debug)]
pub struct ThemeSession {
    target_host: String,
    themes: Vec<ThemeDescriptor>,
    css: HashMap<String, String>,
    ignore: HashSet<String>,
    store: ThemeStore,
    selected: ThemeDescriptor,
    eligible: bool,
    last_location: Option<String>,
}

impl ThemeSession {
    /// Build the session from assets and the saved selection.
    pub fn load(config: &ViewerConfig, store: ThemeStore) -> Self {
        let themes_dir = config.assets_dir.join(THEMES_DIR);
        let themes = theme::list_themes(&themes_dir);
        let css = theme::load_css_map(&themes_dir, &themes);
        let ignore = ignore::load_ignore_list(&config.assets_dir.join(IGNORE_LIST_FILE));
        log::info!(
            "loaded {} themes and {} ignored paths from {}",
            themes.len(),
            ignore.len(),
            config.assets_dir.display()
        );
        Self::new(config.target_host(), themes, css, ignore, store)
    }

    pub fn new(
        target_host: impl Into<String>,
        themes: Vec<ThemeDescriptor>,
        css: HashMap<String, String>,
        ignore: HashSet<String>,
        store: ThemeStore,
    ) -> Self {
        let selected = store.load_selected(&themes);
        log::debug!("active theme: {}", selected.id);
        Self {
            target_host: target_host.into().to_ascii_lowercase(),
            themes,
            css,
            ignore,
            store,
            selected,
            eligible: false,
            last_location: None,
        }
    }

    pub fn themes(&self) -> &[ThemeDescriptor] {
        &self.themes
    }

    pub fn selected(&self) -> &ThemeDescriptor {
        &self.selected
    }

    /// Whether the current page accepted the theme.
    pub fn is_eligible(&self) -> bool {
        self.eligible
    }

    /// Last location that was themed.
    pub fn last_location(&self) -> Option<&str> {
        self.last_location.as_deref()
    }

    /// CSS of the active theme, empty when unknown.
    pub fn active_css(&self) -> &str {
        self.css
            .get(&self.selected.id)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Handle a finished page load reported by the surface.
    pub fn on_page_finished<S: BrowserSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        location: &str,
    ) -> PageLoad {
        let Some(parsed) = Location::parse(location).filter(|loc| !loc.host.is_empty()) else {
            log::debug!("ignoring load of {location}");
            return PageLoad::Unparsed;
        };
        if parsed.host != self.target_host {
            log::debug!("off-site load {location}");
            return PageLoad::OffSite;
        }
        if ignore::is_ignored(&parsed.path, &self.ignore) {
            // The ignored page replaced the last themed one.
            self.eligible = false;
            log::debug!("theme skipped for ignored path {}", parsed.path);
            return PageLoad::Ignored;
        }

        self.eligible = true;
        self.last_location = Some(location.to_string());
        inject::apply(surface, self.active_css());
        log::debug!("applied {} to {location}", self.selected.id);
        PageLoad::Themed
    }

    /// Switch to the theme with `id`, persist it, and re-apply if eligible.
    ///
    /// Returns whether the theme was applied to the current page.
    pub fn select_theme<S: BrowserSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        id: &str,
    ) -> Result<bool> {
        let theme = self
            .themes
            .iter()
            .find(|theme| theme.id == id)
            .cloned()
            .ok_or_else(|| anyhow!("unknown theme: {id}"))?;
        if let Err(err) = self.store.save_selected(&theme) {
            log::warn!("failed to persist theme {}: {err:#}", theme.id);
        }
        log::info!("theme changed to {}", theme.display_name);
        self.selected = theme;

        if !self.eligible {
            return Ok(false);
        }
        inject::apply(surface, self.active_css());
        Ok(true)
    }
}
