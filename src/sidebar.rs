//! Right-hand theme picker.

use egui::{Align, Context, Layout, RichText, ScrollArea, SidePanel};

use crate::theme::ThemeDescriptor;

const SIDEBAR_WIDTH: f32 = 300.0;

/// What the user did in the sidebar this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarAction {
    /// A theme row was clicked.
    Select(String),
    Close,
}

/// Draw the sidebar and report the user's action, if any.
pub fn show(
    ctx: &Context,
    themes: &[ThemeDescriptor],
    selected: &ThemeDescriptor,
) -> Option<SidebarAction> {
    let mut action = None;
    SidePanel::right("theme_sidebar")
        .resizable(false)
        .exact_width(SIDEBAR_WIDTH)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Select Theme").strong());
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button("Close").clicked() {
                        action = Some(SidebarAction::Close);
                    }
                });
            });
            ui.separator();

            if themes.is_empty() {
                ui.label("No themes found.");
                return;
            }
            ScrollArea::vertical().id_source("theme_list").show(ui, |ui| {
                for theme in themes {
                    if ui.radio(theme.id == selected.id, theme.display_name.as_str()).clicked() {
                        action = Some(SidebarAction::Select(theme.id.clone()));
                    }
                }
            });
        });
    action
}
