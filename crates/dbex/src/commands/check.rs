//! `dbex-docs check` command implementation.

use std::path::PathBuf;

use clap::Args;
use dbex_config::{CliSettings, Config};

use crate::commands::load_navigation;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Navigation file (overrides config).
    #[arg(short, long)]
    navigation: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover dbex.toml).
    #[arg(short, long, env = "DBEX_CONFIG")]
    config: Option<PathBuf>,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the navigation cannot be loaded or has errors.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            navigation: self.navigation,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        output.info(&format!(
            "Navigation: {}",
            config.navigation_path.display()
        ));

        let tree = load_navigation(&config)?;
        for warning in tree.check_issues()? {
            output.warning(&format!("Warning: {warning}"));
        }

        let pages = tree.leaf_hrefs().len();
        output.success(&format!(
            "Navigation OK: {} sections, {} entries, {pages} pages",
            tree.sections().len(),
            tree.len(),
        ));
        Ok(())
    }
}
