//! Script console standing in for a web view on the desktop.

use std::collections::VecDeque;

use crate::inject::BrowserSurface;

/// Scripts kept for display.
const CONSOLE_CAPACITY: usize = 32;

/// Collects submitted scripts so they can be inspected or pasted into a
/// browser's developer console.
#[derive(Debug, Default)]
pub struct ScriptConsole {
    scripts: VecDeque<String>,
    submitted: usize,
}

impl ScriptConsole {
    /// Most recent scripts, oldest first.
    pub fn scripts(&self) -> impl Iterator<Item = &str> {
        self.scripts.iter().map(String::as_str)
    }

    /// Total number of scripts ever submitted.
    pub fn submitted(&self) -> usize {
        self.submitted
    }

    pub fn clear(&mut self) {
        self.scripts.clear();
    }
}

impl BrowserSurface for ScriptConsole {
    fn run_script(&mut self, code: &str) {
        if self.scripts.len() == CONSOLE_CAPACITY {
            self.scripts.pop_front();
        }
        self.scripts.push_back(code.to_string());
        self.submitted += 1;
        log::trace!("script #{} queued ({} bytes)", self.submitted, code.len());
    }
}
