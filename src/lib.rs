//! Themed viewer shell for a single wikidot site.
//!
//! Themes are `*.colors.css` files bundled under `assets/css`. After every
//! finished page load on the target wiki the active theme is injected into
//! the page through [`inject::BrowserSurface`], unless the path is listed in
//! `assets/css_ignore_list.txt`.

pub mod app;
pub mod config;
pub mod console;
pub mod ignore;
pub mod inject;
pub mod location;
pub mod settings;
pub mod sidebar;
pub mod state;
pub mod theme;

#[cfg(test)]
mod test_utils;
