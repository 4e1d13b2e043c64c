//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod nav;
pub(crate) mod sitemap;
pub(crate) mod toc;

pub(crate) use check::CheckArgs;
pub(crate) use nav::NavArgs;
pub(crate) use sitemap::SitemapArgs;
pub(crate) use toc::TocArgs;

use dbex_config::Config;
use dbex_nav::{NavTree, NavigationFile};

use crate::error::CliError;

/// Load the navigation file named by the config and resolve it.
pub(crate) fn load_navigation(config: &Config) -> Result<NavTree, CliError> {
    let file = NavigationFile::load(&config.navigation_path)?;
    let tree = file.into_tree(&config.site.language);
    tracing::debug!(
        path = %config.navigation_path.display(),
        language = %config.site.language,
        entries = tree.len(),
        "Resolved navigation"
    );
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_load_navigation_from_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("dbex.toml");
        std::fs::write(
            &config_path,
            "[site]\nlanguage = \"mysql\"\nnavigation = \"nav.toml\"\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("nav.toml"),
            r#"
[[groups]]
title = "Reference"

[[groups.links]]
title = "Functions"
href = "/reference/{current_language}/functions"

[[groups.links]]
title = "Operators"
href = "/reference/operators"
"#,
        )
        .unwrap();

        let config = Config::load(Some(&config_path), None).unwrap();
        let tree = load_navigation(&config).unwrap();

        let links = tree.page_links("/reference/mysql/functions").unwrap();
        assert_eq!(links.breadcrumb, "Reference");
        assert_eq!(links.next.unwrap().href, "/reference/operators");
    }

    #[test]
    fn test_load_navigation_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("dbex.toml");
        std::fs::write(&config_path, "").unwrap();

        let config = Config::load(Some(&config_path), None).unwrap();
        let result = load_navigation(&config);

        assert!(matches!(
            result,
            Err(CliError::Navigation(dbex_nav::NavError::NotFound(_)))
        ));
    }
}
