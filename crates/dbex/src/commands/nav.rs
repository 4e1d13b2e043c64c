//! `dbex-docs nav` command implementation.

use std::path::PathBuf;

use clap::Args;
use dbex_config::{CliSettings, Config};

use crate::commands::load_navigation;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    /// Page path, exactly as it appears in the navigation (e.g. `/getting-started`).
    path: String,

    /// Navigation file (overrides config).
    #[arg(short, long)]
    navigation: Option<PathBuf>,

    /// Reference language for `{current_language}` hrefs (overrides config).
    #[arg(short, long)]
    language: Option<String>,

    /// Path to configuration file (default: auto-discover dbex.toml).
    #[arg(short, long, env = "DBEX_CONFIG")]
    config: Option<PathBuf>,
}

impl NavArgs {
    /// Execute the nav command.
    ///
    /// A page missing from the navigation is reported as a warning, not an error.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            navigation: self.navigation,
            language: self.language,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let tree = load_navigation(&config)?;

        match tree.page_links(&self.path) {
            Some(links) => output.json(&links),
            None => {
                output.warning(&format!("{} is not in the navigation", self.path));
                Ok(())
            }
        }
    }
}
