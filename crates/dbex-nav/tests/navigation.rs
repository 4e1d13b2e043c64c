//! End-to-end resolution over a realistic navigation file.

use dbex_nav::{Behavior, Direction, NavigationFile};
use pretty_assertions::assert_eq;

const NAVIGATION: &str = r#"
[[groups]]
title = "Getting Started"
icon = "terminal"

[[groups.links]]
title = "Why dbExpression?"
href = "/"

[[groups.links]]
title = "Up and Running in 10 Minutes"
href = "/getting-started"

[[groups.links]]
title = "Supported Versions"
href = "/reference/{current_language}/versions"

[[groups]]
title = "Core Concepts"
icon = "box"

[[groups.links]]
title = "Basic Queries"
href = "/core-concepts/basics"
behaviour = "expandable"

[[groups.links.links]]
title = "Select Statements"
href = "/core-concepts/basics/select-statement"

[[groups.links.links]]
title = "Joins"
href = "/core-concepts/basics/join"

[[groups.links]]
title = "Utilities"
behaviour = "expandable"

[[groups.links.links]]
title = "Database Functions"
href = "/core-concepts/utilities/functions"

[[groups]]
title = "Reference"
icon = "book"

[[groups.links]]
title = "Statements"
href = "/reference/statements"

[[groups.links.links]]
title = "Select"
href = "/reference/statements/select"
behaviour = "indent-1"
"#;

fn tree() -> dbex_nav::NavTree {
    NavigationFile::from_toml_str(NAVIGATION)
        .unwrap()
        .into_tree("mssql")
}

#[test]
fn test_walk_every_page_forward() {
    let tree = tree();
    let mut hrefs = Vec::new();
    let mut current = tree.resolve_current_page("/");

    while let Some(entry) = current {
        hrefs.push(entry.href.clone().unwrap());
        current = tree.find_adjacent(entry.index(), Direction::Next);
    }

    assert_eq!(hrefs, tree.leaf_hrefs());
    assert_eq!(
        hrefs,
        vec![
            "/",
            "/getting-started",
            "/reference/mssql/versions",
            "/core-concepts/basics",
            "/core-concepts/basics/select-statement",
            "/core-concepts/basics/join",
            "/core-concepts/utilities/functions",
            "/reference/statements",
            "/reference/statements/select",
        ]
    );
}

#[test]
fn test_page_links_across_group_boundary() {
    let tree = tree();

    let links = tree.page_links("/core-concepts/utilities/functions").unwrap();

    assert_eq!(links.section, "Core Concepts");
    assert_eq!(links.breadcrumb, "Core Concepts > Utilities");
    assert_eq!(links.previous.unwrap().title, "Joins");
    assert_eq!(links.next.unwrap().title, "Statements");
}

#[test]
fn test_first_and_last_pages() {
    let tree = tree();

    let first = tree.page_links("/").unwrap();
    assert!(first.previous.is_none());
    assert_eq!(first.breadcrumb, "Getting Started");

    let last = tree.page_links("/reference/statements/select").unwrap();
    assert!(last.next.is_none());
    assert_eq!(last.breadcrumb, "Reference > Statements");
}

#[test]
fn test_unknown_page_has_no_links() {
    let tree = tree();

    assert!(tree.page_links("/reference/{current_language}/versions").is_none());
    assert!(tree.page_links("/getting-started/").is_none());
}

#[test]
fn test_expandable_groups_and_indent() {
    let tree = tree();

    let basics = tree.resolve_current_page("/core-concepts/basics").unwrap();
    assert_eq!(basics.behavior, Behavior::Expandable);
    assert!(tree.is_in_expandable(basics.index(), "/core-concepts/basics/join"));

    let select = tree
        .resolve_current_page("/reference/statements/select")
        .unwrap();
    assert_eq!(select.behavior.indent_level(), Some(1));
}

#[test]
fn test_navigation_file_passes_checks() {
    assert!(tree().check().is_ok());
}

#[test]
fn test_site_navigation_file() {
    let file = NavigationFile::from_toml_str(include_str!("../../../navigation.toml")).unwrap();
    let tree = file.into_tree("mssql");

    assert!(tree.check().is_ok());
    assert_eq!(tree.sections().len(), 3);
    assert_eq!(tree.len(), 156);

    let links = tree.page_links("/").unwrap();
    assert!(links.previous.is_none());
    assert_eq!(links.next.unwrap().href, "/getting-started");

    let abs = tree
        .page_links("/reference/mssql/functions/mathematical/abs")
        .unwrap();
    assert_eq!(abs.breadcrumb, "Reference > Functions > Mathematical");
    assert_eq!(abs.previous.unwrap().title, "Mathematical");
}
