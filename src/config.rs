//! Start-up configuration from command-line flags.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::location::Location;

/// Wiki loaded on start and the only host that gets themed.
pub const DEFAULT_START_URL: &str = "https://scp-wiki.wikidot.com/";
/// Directory holding `css/` and the ignore list.
pub const DEFAULT_ASSETS_DIR: &str = "assets";

#[derive(Debug, Parser)]
#[command(name = "wikidot_viewer", about = "Themed viewer for a single wikidot site", version)]
struct Cli {
    /// Page loaded on start; its host is the only one that gets themed.
    #[arg(long, default_value = DEFAULT_START_URL, value_parser = parse_web_url)]
    url: String,

    /// Directory holding `css/` and `css_ignore_list.txt`.
    #[arg(long, default_value = DEFAULT_ASSETS_DIR)]
    assets: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    /// Page reported as loaded when the viewer starts.
    pub start_url: String,
    /// Root of the bundled assets.
    pub assets_dir: PathBuf,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            start_url: DEFAULT_START_URL.to_string(),
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
        }
    }
}

impl ViewerConfig {
    /// Parse `--url <url>` and `--assets <dir>`; the program name must be skipped.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let argv = std::iter::once("wikidot_viewer".to_string()).chain(args);
        let cli = Cli::try_parse_from(argv)?;
        Ok(Self {
            start_url: cli.url,
            assets_dir: cli.assets,
        })
    }

    /// Host of the start URL; only pages on it are themed.
    pub fn target_host(&self) -> String {
        Location::parse(&self.start_url)
            .map(|loc| loc.host)
            .unwrap_or_default()
    }
}

/// Accept only absolute `http`/`https` URLs with a host.
fn parse_web_url(url: &str) -> Result<String, String> {
    match Location::parse(url) {
        Some(loc) if loc.is_web() && !loc.host.is_empty() => Ok(url.to_string()),
        _ => Err(format!("not an absolute http(s) URL: {url}")),
    }
}
