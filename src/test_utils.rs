//! Test doubles for the page surface.

use base64::{Engine as _, engine::general_purpose};

use crate::inject::{BrowserSurface, STYLE_ELEMENT_ID};

/// Records every submitted script verbatim.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub scripts: Vec<String>,
}

impl BrowserSurface for RecordingSurface {
    fn run_script(&mut self, code: &str) {
        self.scripts.push(code.to_string());
    }
}

/// A toy document that understands the injector's two scripts.
#[derive(Debug, Default)]
pub struct FakeDocument {
    /// `(id, text)` of every style element in the head.
    styles: Vec<(String, String)>,
}

impl FakeDocument {
    pub fn managed_count(&self) -> usize {
        self.styles
            .iter()
            .filter(|(id, _)| id == STYLE_ELEMENT_ID)
            .count()
    }

    pub fn managed_css(&self) -> Option<String> {
        self.styles
            .iter()
            .find(|(id, _)| id == STYLE_ELEMENT_ID)
            .map(|(_, css)| css.clone())
    }

    /// A full navigation discards everything the previous page held.
    pub fn navigate(&mut self) {
        self.styles.clear();
    }
}

impl BrowserSurface for FakeDocument {
    fn run_script(&mut self, code: &str) {
        if code.contains("removeChild") {
            self.styles.retain(|(id, _)| id != STYLE_ELEMENT_ID);
            return;
        }
        if !code.contains("createElement('style')") {
            return;
        }
        if self.managed_count() == 0 {
            self.styles.push((STYLE_ELEMENT_ID.to_string(), String::new()));
        }
        let payload = code
            .split("atob('")
            .nth(1)
            .and_then(|rest| rest.split("')").next())
            .unwrap_or_default();
        let bytes = general_purpose::STANDARD.decode(payload).unwrap_or_default();
        let text = String::from_utf8(bytes).unwrap_or_default();
        if let Some((_, css)) = self
            .styles
            .iter_mut()
            .find(|(id, _)| id == STYLE_ELEMENT_ID)
        {
            css.push_str(&text);
        }
    }
}
