//! Building entries from application pages.

use crate::{
    entry::{Metadata, UrlEntry},
    location::Location,
};
use tracing::debug;

/// Map `(page, metadata)` pairs to entries, resolving each page's location
/// through `router`.
///
/// One entry is produced per pair, in the iteration order of `pages`. With a
/// `HashMap` that order is unspecified; pass a `BTreeMap`, a `Vec` of pairs or
/// any other ordered collection when the document order matters. Pages are
/// not deduplicated beyond what the source collection already guarantees.
///
/// ```
/// use std::collections::BTreeMap;
/// use sitemap::{entries_from_pages, ChangeFrequency, Location, Metadata};
///
/// #[derive(PartialEq, Eq, PartialOrd, Ord)]
/// enum Page {
///     Home,
///     About,
/// }
///
/// let pages = BTreeMap::from([
///     (Page::Home, Metadata::new(None, Some(ChangeFrequency::Daily), Some(1.0))),
///     (Page::About, Metadata::EMPTY),
/// ]);
///
/// let entries = entries_from_pages(
///     |page| match page {
///         Page::Home => Location::parse("https://example.com"),
///         Page::About => Location::parse("https://example.com/about"),
///     }
///     .unwrap_or_else(|err| panic!("{err}")),
///     pages,
/// );
///
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0].location.as_str(), "https://example.com");
/// ```
pub fn entries_from_pages<P, L, R, I>(mut router: R, pages: I) -> Vec<UrlEntry>
where
    R: FnMut(&P) -> L,
    L: Into<Location>,
    I: IntoIterator<Item = (P, Metadata)>,
{
    let entries: Vec<UrlEntry> = pages
        .into_iter()
        .map(|(page, metadata)| UrlEntry::with_metadata(router(&page), metadata))
        .collect();

    debug!(entries = entries.len(), "mapped pages to sitemap entries");
    entries
}
