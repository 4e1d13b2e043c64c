//! Configuration management for dbExpression docs.
//!
//! Parses `dbex.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! `site.url` supports `${VAR}` and `${VAR:-default}`, so the published URL
//! can come from `SITE_URL` at build time:
//!
//! ```toml
//! [site]
//! url = "${SITE_URL:-https://dbexpression.com}"
//! ```

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "dbex.toml";

/// Default navigation filename, relative to the config directory.
const DEFAULT_NAVIGATION: &str = "navigation.toml";

/// Default sitemap output directory, relative to the config directory.
const DEFAULT_OUTPUT_DIR: &str = "out";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override navigation file path.
    pub navigation: Option<PathBuf>,
    /// Override reference language.
    pub language: Option<String>,
    /// Override sitemap output directory.
    pub output_dir: Option<PathBuf>,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site configuration.
    pub site: SiteConfig,
    /// Sitemap configuration (paths are relative strings from TOML).
    sitemap: SitemapConfigRaw,

    /// Resolved navigation file path (set after loading).
    #[serde(skip)]
    pub navigation_path: PathBuf,
    /// Resolved sitemap configuration (set after loading).
    #[serde(skip)]
    pub sitemap_resolved: SitemapConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Public site URL.
    pub url: String,
    /// Path prefix the site is served under.
    pub base_path: String,
    /// Reference language substituted for `{current_language}` in hrefs.
    pub language: String,
    /// Navigation file, relative to the config file.
    navigation: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: "https://dbexpression.com".to_owned(),
            base_path: String::new(),
            language: "mssql".to_owned(),
            navigation: None,
        }
    }
}

/// Raw sitemap configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SitemapConfigRaw {
    generate_robots_txt: Option<bool>,
    output_dir: Option<String>,
}

/// Resolved sitemap configuration with absolute paths.
#[derive(Debug, Default)]
pub struct SitemapConfig {
    /// Whether to write `robots.txt` next to the sitemap.
    pub generate_robots_txt: bool,
    /// Directory the sitemap files are written to.
    pub output_dir: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.url`").
        field: String,
        /// Error message (e.g., "${`SITE_URL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `dbex.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            tracing::debug!(path = %discovered.display(), "Discovered config file");
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(navigation) = &settings.navigation {
            self.navigation_path.clone_from(navigation);
        }
        if let Some(language) = &settings.language {
            self.site.language.clone_from(language);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.sitemap_resolved.output_dir.clone_from(output_dir);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfig::default(),
            sitemap: SitemapConfigRaw::default(),
            navigation_path: base.join(DEFAULT_NAVIGATION),
            sitemap_resolved: SitemapConfig {
                generate_robots_txt: true,
                output_dir: base.join(DEFAULT_OUTPUT_DIR),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.url, "site.url")?;
        require_http_url(&self.site.url, "site.url")?;
        require_non_empty(&self.site.language, "site.language")?;

        if !self.site.base_path.is_empty() && !self.site.base_path.starts_with('/') {
            return Err(ConfigError::Validation(
                "site.base_path must start with /".to_owned(),
            ));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.url = expand::expand_env(&self.site.url, "site.url")?;
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.navigation_path =
            config_dir.join(self.site.navigation.as_deref().unwrap_or(DEFAULT_NAVIGATION));

        self.sitemap_resolved = SitemapConfig {
            generate_robots_txt: self.sitemap.generate_robots_txt.unwrap_or(true),
            output_dir: config_dir.join(
                self.sitemap
                    .output_dir
                    .as_deref()
                    .unwrap_or(DEFAULT_OUTPUT_DIR),
            ),
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.site.url, "https://dbexpression.com");
        assert_eq!(config.site.language, "mssql");
        assert_eq!(config.site.base_path, "");
        assert_eq!(
            config.navigation_path,
            PathBuf::from("/test/navigation.toml")
        );
        assert_eq!(config.sitemap_resolved.output_dir, PathBuf::from("/test/out"));
        assert!(config.sitemap_resolved.generate_robots_txt);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.site.language, "mssql");
    }

    #[test]
    fn test_parse_site_config() {
        let toml = r#"
[site]
url = "https://docs.example.com"
base_path = "/docs.dbExpression.com"
language = "mysql"
navigation = "nav/sidebar.toml"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(config.site.url, "https://docs.example.com");
        assert_eq!(config.site.base_path, "/docs.dbExpression.com");
        assert_eq!(config.site.language, "mysql");
        assert_eq!(
            config.navigation_path,
            PathBuf::from("/project/nav/sidebar.toml")
        );
    }

    #[test]
    fn test_parse_sitemap_config() {
        let toml = r#"
[sitemap]
generate_robots_txt = false
output_dir = "public"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert!(!config.sitemap_resolved.generate_robots_txt);
        assert_eq!(
            config.sitemap_resolved.output_dir,
            PathBuf::from("/project/public")
        );
    }

    #[test]
    fn test_validate_rejects_non_http_url() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site.url = "ftp://dbexpression.com".to_owned();

        let err = config.validate().unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("site.url"));
    }

    #[test]
    fn test_validate_rejects_empty_language() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site.language = String::new();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_relative_base_path() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site.base_path = "docs".to_owned();

        let err = config.validate().unwrap_err();

        assert!(err.to_string().contains("base_path"));
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            language: Some("postgres".to_owned()),
            output_dir: Some(PathBuf::from("/tmp/site")),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.site.language, "postgres");
        assert_eq!(config.sitemap_resolved.output_dir, PathBuf::from("/tmp/site"));
        assert_eq!(
            config.navigation_path,
            PathBuf::from("/test/navigation.toml")
        ); // Unchanged
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dbex.toml");
        std::fs::write(
            &path,
            "[site]\nurl = \"https://example.com\"\nnavigation = \"nav.toml\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.site.url, "https://example.com");
        assert_eq!(config.navigation_path, dir.path().join("nav.toml"));
        assert_eq!(config.sitemap_resolved.output_dir, dir.path().join("out"));
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        let result = Config::load(Some(&dir.path().join("missing.toml")), None);

        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_expands_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dbex.toml");
        std::fs::write(
            &path,
            "[site]\nurl = \"${DBEX_TEST_LOAD_URL:-https://fallback.example.com}\"\n",
        )
        .unwrap();
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DBEX_TEST_LOAD_URL");
        }

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.site.url, "https://fallback.example.com");
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dbex.toml");
        std::fs::write(&path, "[site\nurl = ").unwrap();

        let result = Config::load(Some(&path), None);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
