//! Sitemaps described in TOML or JSON.
//!
//! A manifest is a list of `url` records:
//!
//! ```toml
//! [[url]]
//! loc = "https://example.com"
//! lastmod = "2025-01-15"
//! changefreq = "daily"
//! priority = 1.0
//! ```
//!
//! or, in JSON, `{"url": [{"loc": "https://example.com", "priority": 1.0}]}`.
//! Only `loc` is required. Entries keep their manifest order.

use crate::{
    entry::{Metadata, UrlEntry},
    enums::{ChangeFrequency, Format},
    error::{Error, Result},
    location::Location,
    sitemap::Sitemap,
};
use serde::Deserialize;
use std::{fs, path::Path};
use time::{
    format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime,
    PrimitiveDateTime,
};
use tracing::{debug, error, info, instrument, warn};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Manifest {
    #[serde(default, rename = "url")]
    urls: Vec<ManifestEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestEntry {
    loc: String,
    lastmod: Option<String>,
    changefreq: Option<ChangeFrequency>,
    priority: Option<f32>,
}

impl ManifestEntry {
    fn into_entry(self) -> Result<UrlEntry> {
        let location = Location::parse(&self.loc)?;
        let last_modification = self
            .lastmod
            .as_deref()
            .map(parse_last_modification)
            .transpose()?;

        Ok(UrlEntry::with_metadata(
            location,
            Metadata::new(last_modification, self.changefreq, self.priority),
        ))
    }
}

/// Accepts `yyyy-mm-dd`, an RFC 3339 timestamp or a local
/// `yyyy-mm-ddThh:mm:ss` timestamp. The time of day is dropped; RFC 3339
/// timestamps keep the calendar date of their own offset.
pub fn parse_last_modification(input: &str) -> Result<Date> {
    let input = input.trim();

    if let Ok(date) = Date::parse(input, format_description!("[year]-[month]-[day]")) {
        return Ok(date);
    }
    if let Ok(datetime) = OffsetDateTime::parse(input, &Rfc3339) {
        return Ok(datetime.date());
    }
    PrimitiveDateTime::parse(
        input,
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    )
    .map(|datetime| datetime.date())
    .map_err(|_| Error::InvalidDate {
        input: input.to_string(),
    })
}

/// Parse a TOML manifest.
pub fn from_toml_str(input: &str) -> Result<Sitemap> {
    from_str(input, Format::Toml)
}

/// Parse a JSON manifest.
pub fn from_json_str(input: &str) -> Result<Sitemap> {
    from_str(input, Format::Json)
}

pub fn from_str(input: &str, format: Format) -> Result<Sitemap> {
    let manifest: Manifest = match format {
        Format::Json => serde_json::from_str(input)?,
        Format::Toml => toml::from_str(input)?,
    };
    debug!(entries = manifest.urls.len(), ?format, "manifest decoded");

    manifest
        .urls
        .into_iter()
        .map(ManifestEntry::into_entry)
        .collect::<Result<Vec<UrlEntry>>>()
        .map(Sitemap::new)
}

/// Read a manifest file, choosing the format from its extension.
#[instrument]
pub fn load_file(path: &Path) -> Result<Sitemap> {
    debug!("Starting to read manifest: {}", path.display());

    let Some(format) = Format::from_path(path) else {
        warn!("Unknown manifest extension");
        return Err(Error::UnknownFormat {
            found: path
                .extension()
                .map(|ext| ext.to_string_lossy().into_owned())
                .unwrap_or_default(),
            supported: Format::supported(),
        });
    };

    let content = fs::read_to_string(path).map_err(|e| {
        error!("Failed to read manifest: {}", e);
        Error::Io(e)
    })?;

    info!("Manifest read successfully, parsing as {:?}", format);
    from_str(&content, format)
}
