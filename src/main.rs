use wikidot_viewer::app::ViewerApp;
use wikidot_viewer::config::ViewerConfig;
use wikidot_viewer::settings::ThemeStore;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match ViewerConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        // Usage errors, --help and --version print and exit the clap way.
        Err(err) => match err.downcast::<clap::Error>() {
            Ok(usage) => usage.exit(),
            Err(err) => return Err(err),
        },
    };
    let store = ThemeStore::open_default().unwrap_or_else(|err| {
        log::warn!("{err:#}; keeping the theme choice in the working directory");
        ThemeStore::at("settings.json")
    });
    log::info!("theme choice stored in {}", store.path().display());

    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "Wikidot Viewer",
        native_options,
        Box::new(move |cc| Box::new(ViewerApp::new(cc, config, store))),
    )?;
    Ok(())
}
