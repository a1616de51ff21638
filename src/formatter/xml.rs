use super::{escape_text, format_date, format_priority, helpers, FormatConfig, Formatter};
use crate::{entry::UrlEntry, sitemap::Sitemap};
use std::borrow::Cow;
use tracing::{debug, instrument};

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Renders sitemaps.org `<urlset>` documents.
///
/// Every line of output is flush left and lines are separated by a single
/// `\n`; the document has no trailing newline.
pub struct XmlFormatter;

impl Formatter for XmlFormatter {
    #[instrument(level = "debug", skip_all, fields(urls = sitemap.urls.len()))]
    fn format(&self, sitemap: &Sitemap, config: &FormatConfig) -> String {
        let blocks: Vec<String> = sitemap
            .urls
            .iter()
            .map(|entry| Self::format_entry(entry, config))
            .collect();

        let xml = format!(
            "{XML_DECLARATION}\n<urlset xmlns=\"{SITEMAP_NS}\">\n{}\n</urlset>",
            helpers::join_lines(blocks)
        );
        debug!(bytes = xml.len(), "rendered sitemap");
        xml
    }
}

impl XmlFormatter {
    /// Render one `<url>` block: `<loc>` first, then whichever of
    /// `<lastmod>`, `<changefreq>` and `<priority>` are set, in that order.
    pub fn format_entry(entry: &UrlEntry, config: &FormatConfig) -> String {
        let location = if config.escape_text {
            escape_text(entry.location.as_str())
        } else {
            Cow::Borrowed(entry.location.as_str())
        };

        let mut elements = vec![helpers::element("loc", &location)];

        let metadata = &entry.metadata;
        if let Some(date) = metadata.last_modification {
            elements.push(helpers::element("lastmod", &format_date(date)));
        }
        if let Some(frequency) = metadata.change_frequency {
            elements.push(helpers::element("changefreq", frequency.as_str()));
        }
        if let Some(priority) = metadata.priority {
            elements.push(helpers::element("priority", &format_priority(priority)));
        }

        format!("<url>\n{}\n</url>", helpers::join_lines(elements))
    }
}
