use crate::{
    entry::{Metadata, UrlEntry},
    formatter::{FormatConfig, Formatter, XmlFormatter},
    location::Location,
    pages::entries_from_pages,
};
use std::fmt;

/// An ordered list of entries rendered as one `<urlset>` document.
///
/// Entries are written in the order they are stored. Duplicate locations are
/// not merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sitemap {
    pub urls: Vec<UrlEntry>,
}

impl Sitemap {
    pub fn new(urls: Vec<UrlEntry>) -> Self {
        Self { urls }
    }

    /// Build a sitemap from `(page, metadata)` pairs, see [`entries_from_pages`].
    pub fn from_pages<P, L, R, I>(router: R, pages: I) -> Self
    where
        R: FnMut(&P) -> L,
        L: Into<Location>,
        I: IntoIterator<Item = (P, Metadata)>,
    {
        Self::new(entries_from_pages(router, pages))
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// The complete XML document. Recomputed on every call.
    pub fn xml(&self) -> String {
        self.xml_with_config(&FormatConfig::default())
    }

    pub fn xml_with_config(&self, config: &FormatConfig) -> String {
        XmlFormatter.format(self, config)
    }
}

impl From<Vec<UrlEntry>> for Sitemap {
    fn from(urls: Vec<UrlEntry>) -> Self {
        Self::new(urls)
    }
}

impl FromIterator<UrlEntry> for Sitemap {
    fn from_iter<T: IntoIterator<Item = UrlEntry>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Extend<UrlEntry> for Sitemap {
    fn extend<T: IntoIterator<Item = UrlEntry>>(&mut self, iter: T) {
        self.urls.extend(iter);
    }
}

impl fmt::Display for Sitemap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.xml())
    }
}
