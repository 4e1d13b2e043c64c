//! CLI error types.

use dbex_config::ConfigError;
use dbex_nav::NavError;
use dbex_sitemap::SitemapError;
use dbex_toc::TocError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Navigation(#[from] NavError),

    #[error("{0}")]
    Toc(#[from] TocError),

    #[error("{0}")]
    Sitemap(#[from] SitemapError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
