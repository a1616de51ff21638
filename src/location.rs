//! Absolute URL locations.

use crate::error::{Error, Result};
use std::{fmt, str::FromStr};
use url::Url;

/// The `<loc>` of a sitemap entry.
///
/// A `Location` can only be built from text that parses as an absolute URL,
/// but the text itself is kept exactly as supplied: `https://example.com`
/// stays `https://example.com` and is not normalized to a trailing slash,
/// percent-encoding is not added or removed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location(String);

impl Location {
    /// Check that `input` is an absolute URL and keep it verbatim.
    ///
    /// Text that the URL parser would silently strip (leading or trailing
    /// spaces and C0 controls, tabs or newlines anywhere) is rejected, since
    /// it would otherwise end up inside `<loc>`.
    pub fn parse(input: &str) -> Result<Self> {
        let stripped = input.trim_matches(|c: char| c <= ' ');
        if stripped.len() != input.len() || input.contains(['\t', '\n', '\r']) {
            return Err(Error::UnstrippedLocation {
                input: input.to_string(),
            });
        }

        Url::parse(input).map_err(|source| Error::InvalidLocation {
            input: input.to_string(),
            source,
        })?;
        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<Url> for Location {
    fn from(url: Url) -> Self {
        Self(url.into())
    }
}

impl From<&Url> for Location {
    fn from(url: &Url) -> Self {
        Self(url.as_str().to_string())
    }
}

impl FromStr for Location {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl AsRef<str> for Location {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
