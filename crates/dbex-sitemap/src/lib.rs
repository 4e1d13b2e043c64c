//! Sitemap and robots.txt generation.
//!
//! Produces a single `sitemap.xml` (no sitemap index) listing every
//! navigable page, and an optional `robots.txt` pointing crawlers at it.
//!
//! ```
//! use dbex_sitemap::SitemapBuilder;
//!
//! let builder = SitemapBuilder::new("https://dbexpression.com", "/docs");
//! let xml = builder.render_sitemap(&["/", "/getting-started"]).unwrap();
//!
//! assert!(xml.contains("<loc>https://dbexpression.com/docs/getting-started</loc>"));
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

/// Sitemap protocol namespace.
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Change frequency advertised for every page.
const CHANGE_FREQ: &str = "daily";

/// Priority advertised for every page.
const PRIORITY: &str = "0.7";

/// Sitemap filename.
pub const SITEMAP_FILENAME: &str = "sitemap.xml";

/// Robots filename.
pub const ROBOTS_FILENAME: &str = "robots.txt";

/// Error generating sitemap files.
#[derive(Debug, thiserror::Error)]
pub enum SitemapError {
    /// XML writing error.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Generated XML was not valid UTF-8.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Join a site URL, base path and page href into an absolute URL.
///
/// Slashes between the parts are normalized so that exactly one separates
/// each part.
#[must_use]
pub fn absolute_url(site_url: &str, base_path: &str, href: &str) -> String {
    let site = site_url.trim_end_matches('/');
    let base = base_path.trim_matches('/');
    let page = href.trim_start_matches('/');

    let mut url = String::from(site);
    if !base.is_empty() {
        url.push('/');
        url.push_str(base);
    }
    url.push('/');
    url.push_str(page);
    url
}

/// Generator for `sitemap.xml` and `robots.txt`.
#[derive(Debug, Clone)]
pub struct SitemapBuilder {
    site_url: String,
    base_path: String,
    generate_robots_txt: bool,
}

impl SitemapBuilder {
    /// Create a builder for pages served under `site_url` + `base_path`.
    #[must_use]
    pub fn new(site_url: impl Into<String>, base_path: impl Into<String>) -> Self {
        Self {
            site_url: site_url.into(),
            base_path: base_path.into(),
            generate_robots_txt: true,
        }
    }

    /// Enable or disable `robots.txt` generation.
    #[must_use]
    pub fn with_robots_txt(mut self, enabled: bool) -> Self {
        self.generate_robots_txt = enabled;
        self
    }

    /// Absolute page URLs in the given order, without duplicates.
    #[must_use]
    pub fn urls(&self, hrefs: &[&str]) -> Vec<String> {
        let mut seen = HashSet::new();
        hrefs
            .iter()
            .map(|href| absolute_url(&self.site_url, &self.base_path, href))
            .filter(|url| seen.insert(url.clone()))
            .collect()
    }

    /// Render `sitemap.xml` for the given page hrefs.
    pub fn render_sitemap(&self, hrefs: &[&str]) -> Result<String, SitemapError> {
        render_urlset(&self.urls(hrefs))
    }

    /// Render `robots.txt` allowing all crawlers and pointing at the sitemap.
    #[must_use]
    pub fn render_robots(&self) -> String {
        let host = self.site_url.trim_end_matches('/');
        let sitemap = absolute_url(&self.site_url, &self.base_path, SITEMAP_FILENAME);
        format!(
            "# *\nUser-agent: *\nAllow: /\n\n# Host\nHost: {host}\n\n# Sitemaps\nSitemap: {sitemap}\n"
        )
    }

    /// Write `sitemap.xml` (and `robots.txt` if enabled) into `output_dir`.
    ///
    /// Returns the paths of the written files.
    pub fn write(&self, hrefs: &[&str], output_dir: &Path) -> Result<Vec<PathBuf>, SitemapError> {
        std::fs::create_dir_all(output_dir)?;
        let mut written = Vec::new();

        let urls = self.urls(hrefs);
        let sitemap_path = output_dir.join(SITEMAP_FILENAME);
        std::fs::write(&sitemap_path, render_urlset(&urls)?)?;
        tracing::info!(path = %sitemap_path.display(), pages = urls.len(), "Wrote sitemap");
        written.push(sitemap_path);

        if self.generate_robots_txt {
            let robots_path = output_dir.join(ROBOTS_FILENAME);
            std::fs::write(&robots_path, self.render_robots())?;
            tracing::info!(path = %robots_path.display(), "Wrote robots.txt");
            written.push(robots_path);
        }

        Ok(written)
    }
}

/// Render a `urlset` document listing `urls`.
fn render_urlset(urls: &[String]) -> Result<String, SitemapError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(
        BytesStart::new("urlset").with_attributes([("xmlns", SITEMAP_NS)]),
    ))?;

    for url in urls {
        writer.write_event(Event::Start(BytesStart::new("url")))?;
        write_text_element(&mut writer, "loc", url)?;
        write_text_element(&mut writer, "changefreq", CHANGE_FREQ)?;
        write_text_element(&mut writer, "priority", PRIORITY)?;
        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("urlset")))?;

    let mut xml = String::from_utf8(writer.into_inner())?;
    xml.push('\n');
    Ok(xml)
}

/// Write `<name>text</name>` with the text escaped.
fn write_text_element(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    text: &str,
) -> Result<(), SitemapError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
