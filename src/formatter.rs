mod values;
mod xml;

pub use self::{
    values::{escape_text, format_date, format_priority},
    xml::{XmlFormatter, SITEMAP_NS, XML_DECLARATION},
};
use crate::sitemap::Sitemap;

/// Configuration options for formatting
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatConfig {
    /// Replace `& < > " '` in location text with entity references.
    ///
    /// Off by default: locations are written exactly as given, so already
    /// percent-encoded query strings come out untouched and a literal `&`
    /// stays a literal `&`.
    pub escape_text: bool,
}

impl FormatConfig {
    pub const fn escaped() -> Self {
        Self { escape_text: true }
    }
}

/// Trait for formatting a sitemap as a string
pub trait Formatter {
    fn format(&self, sitemap: &Sitemap, config: &FormatConfig) -> String;
}

/// Helper functions for assembling documents
pub mod helpers {
    pub fn join_lines(items: Vec<String>) -> String {
        items.join("\n")
    }

    pub fn element(name: &str, text: &str) -> String {
        format!("<{name}>{text}</{name}>")
    }
}
