use std::fs;
use std::path::Path;

use wikidot_viewer::config::ViewerConfig;
use wikidot_viewer::inject::{BrowserSurface, insert_script, remove_script};
use wikidot_viewer::settings::ThemeStore;
use wikidot_viewer::state::{PageLoad, ThemeSession};

#[derive(Default)]
struct Recorder {
    scripts: Vec<String>,
}

impl BrowserSurface for Recorder {
    fn run_script(&mut self, code: &str) {
        self.scripts.push(code.to_string());
    }
}

fn write_assets(root: &Path) {
    let css = root.join("css");
    fs::create_dir_all(&css).unwrap();
    fs::write(css.join("dark.colors.css"), "body { background: #111; }").unwrap();
    fs::write(css.join("none.colors.css"), "").unwrap();
    fs::write(css.join("notes.md"), "not a theme").unwrap();
    fs::write(root.join("css_ignore_list.txt"), "# skip\nlicensing-guide\n").unwrap();
}

fn config(root: &Path) -> ViewerConfig {
    ViewerConfig {
        start_url: "https://target.example/".to_string(),
        assets_dir: root.to_path_buf(),
    }
}

#[test]
fn full_session_over_bundled_assets() {
    let assets = tempfile::tempdir().unwrap();
    let prefs = tempfile::tempdir().unwrap();
    write_assets(assets.path());
    let store = ThemeStore::at(prefs.path().join("settings.json"));

    let mut session = ThemeSession::load(&config(assets.path()), store.clone());
    let names: Vec<_> = session.themes().iter().map(|t| t.display_name.as_str()).collect();
    assert_eq!(names, ["Dark", "None"]);
    assert_eq!(session.selected().id, "none.colors.css");

    let mut surface = Recorder::default();
    assert_eq!(
        session.on_page_finished(&mut surface, "https://target.example/licensing-guide"),
        PageLoad::Ignored
    );
    assert!(surface.scripts.is_empty());

    assert_eq!(
        session.on_page_finished(&mut surface, "https://target.example/other-page"),
        PageLoad::Themed
    );
    // The "none" theme is empty, so only the removal runs.
    assert_eq!(surface.scripts, [remove_script()]);

    surface.scripts.clear();
    assert!(session.select_theme(&mut surface, "dark.colors.css").unwrap());
    assert_eq!(
        surface.scripts,
        [remove_script(), insert_script("body { background: #111; }")]
    );

    // A restart picks the saved theme back up.
    let restarted = ThemeSession::load(&config(assets.path()), store);
    assert_eq!(restarted.selected().id, "dark.colors.css");
    assert_eq!(restarted.active_css(), "body { background: #111; }");
}

#[test]
fn stale_saved_theme_falls_back_to_none() {
    let assets = tempfile::tempdir().unwrap();
    let prefs = tempfile::tempdir().unwrap();
    write_assets(assets.path());
    let settings = prefs.path().join("settings.json");
    fs::write(&settings, r#"{ "selected_theme_file": "light.colors.css" }"#).unwrap();

    let session = ThemeSession::load(&config(assets.path()), ThemeStore::at(settings));
    assert_eq!(session.selected().id, "none.colors.css");
}

#[test]
fn missing_assets_degrade_to_placeholder() {
    let empty = tempfile::tempdir().unwrap();
    let prefs = tempfile::tempdir().unwrap();
    let store = ThemeStore::at(prefs.path().join("settings.json"));

    let mut session = ThemeSession::load(&config(&empty.path().join("missing")), store);
    assert!(session.themes().is_empty());
    assert_eq!(session.selected().display_name, "None");

    let mut surface = Recorder::default();
    assert_eq!(
        session.on_page_finished(&mut surface, "https://target.example/scp-173"),
        PageLoad::Themed
    );
    assert_eq!(surface.scripts, [remove_script()]);
}

#[test]
fn bundled_assets_are_well_formed() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
    let themes = wikidot_viewer::theme::list_themes(&root.join("css"));
    let ids: Vec<_> = themes.iter().map(|t| t.id.as_str()).collect();
    assert!(ids.contains(&"none.colors.css"));
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));

    let ignore = wikidot_viewer::ignore::load_ignore_list(&root.join("css_ignore_list.txt"));
    assert!(ignore.contains("/licensing-guide"));
    assert!(ignore.iter().all(|path| path.starts_with('/')));
}
