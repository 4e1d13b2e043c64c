//! `dbex-docs sitemap` command implementation.

use std::path::PathBuf;

use clap::Args;
use dbex_config::{CliSettings, Config};
use dbex_sitemap::SitemapBuilder;

use crate::commands::load_navigation;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sitemap command.
#[derive(Args)]
pub(crate) struct SitemapArgs {
    /// Output directory (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Navigation file (overrides config).
    #[arg(short, long)]
    navigation: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover dbex.toml).
    #[arg(short, long, env = "DBEX_CONFIG")]
    config: Option<PathBuf>,
}

impl SitemapArgs {
    /// Execute the sitemap command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or navigation fail to load, the
    /// navigation is invalid, or the files cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            navigation: self.navigation,
            output_dir: self.output_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let tree = load_navigation(&config)?;
        tree.check()?;

        let builder = SitemapBuilder::new(&config.site.url, &config.site.base_path)
            .with_robots_txt(config.sitemap_resolved.generate_robots_txt);
        let written = builder.write(&tree.leaf_hrefs(), &config.sitemap_resolved.output_dir)?;

        for path in &written {
            output.info(&format!("Wrote {}", path.display()));
        }
        output.success(&format!(
            "Sitemap built with {} pages",
            tree.leaf_hrefs().len()
        ));
        Ok(())
    }
}
