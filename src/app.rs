use eframe::CreationContext;
use eframe::egui::{self, RichText};

use crate::config::ViewerConfig;
use crate::console::ScriptConsole;
use crate::settings::ThemeStore;
use crate::sidebar::{self, SidebarAction};
use crate::state::{PageLoad, ThemeSession};

pub struct ViewerApp {
    session: ThemeSession,
    console: ScriptConsole,
    location: String,
    show_sidebar: bool,
    status: String,
}

impl ViewerApp {
    pub fn new(cc: &CreationContext<'_>, config: ViewerConfig, store: ThemeStore) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        let session = ThemeSession::load(&config, store);
        let mut app = Self {
            session,
            console: ScriptConsole::default(),
            location: config.start_url.clone(),
            show_sidebar: false,
            status: String::new(),
        };
        app.load_location();
        app
    }

    pub fn ui(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(RichText::new("SCP Wiki").strong());
                let field = ui.text_edit_singleline(&mut self.location);
                let submitted = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("Load").clicked() || submitted {
                    self.load_location();
                }
                if ui.button("Theme").clicked() {
                    self.show_sidebar = true;
                }
            });
        });

        if self.show_sidebar {
            match sidebar::show(ctx, self.session.themes(), self.session.selected()) {
                Some(SidebarAction::Select(id)) => {
                    self.select_theme(&id);
                    self.show_sidebar = false;
                }
                Some(SidebarAction::Close) => self.show_sidebar = false,
                None => {}
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("Theme: {}", self.session.selected().display_name));
                ui.separator();
                ui.label(format!("Status: {}", self.status));
                if ui.button("Clear").clicked() {
                    self.console.clear();
                }
            });
            ui.separator();
            egui::ScrollArea::vertical()
                .id_source("script_console")
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for script in self.console.scripts() {
                        ui.monospace(script);
                        ui.separator();
                    }
                });
        });
    }

    /// Report the location field as a finished page load.
    fn load_location(&mut self) {
        let location = self.location.trim().to_string();
        let outcome = self.session.on_page_finished(&mut self.console, &location);
        self.status = match outcome {
            PageLoad::Unparsed => format!("not a page URL: {location}"),
            PageLoad::OffSite => format!("off-site, not themed: {location}"),
            PageLoad::Ignored => format!("ignored path, not themed: {location}"),
            PageLoad::Themed => format!("themed: {location}"),
        };
    }

    fn select_theme(&mut self, id: &str) {
        match self.session.select_theme(&mut self.console, id) {
            Ok(true) => self.status = "theme re-applied".to_string(),
            Ok(false) => self.status = "theme saved; applies on the next wiki page".to_string(),
            Err(err) => self.status = err.to_string(),
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}
