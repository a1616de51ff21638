//! sitemap: builds sitemaps.org XML documents
//!
//! This crate provides functionality to:
//! - Describe sitemap entries with typed metadata
//! - Render entries as a complete `<urlset>` document
//! - Map application pages to entries through a router function
//! - Load entries from TOML or JSON manifests
//!
//! # Examples
//! ```
//! use sitemap::{ChangeFrequency, Location, Result, Sitemap, UrlEntry};
//!
//! fn example() -> Result<()> {
//!     let sitemap = Sitemap::new(vec![
//!         UrlEntry::new(Location::parse("https://example.com")?)
//!             .with_change_frequency(ChangeFrequency::Daily)
//!             .with_priority(1.0),
//!         UrlEntry::new(Location::parse("https://example.com/about")?)
//!             .with_change_frequency(ChangeFrequency::Monthly)
//!             .with_priority(0.8),
//!     ]);
//!
//!     assert!(sitemap.xml().contains("<loc>https://example.com/about</loc>"));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod entry;
pub mod enums;
pub mod error;
pub mod formatter;
pub mod location;
pub mod manifest;
pub mod pages;
pub mod sitemap;

// Re-exports
pub use entry::{Metadata, UrlEntry};
pub use enums::{ChangeFrequency, Format};
pub use error::{Error, Result};
pub use formatter::FormatConfig;
pub use location::Location;
pub use pages::entries_from_pages;
pub use sitemap::Sitemap;

pub use time::Date;
pub use url::Url;
