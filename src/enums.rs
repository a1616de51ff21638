use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::{fmt, path::Path, str::FromStr};
use strum::{EnumIter, IntoEnumIterator};

/// How frequently the page at a location is likely to change.
///
/// The textual form is the lowercase variant name, both in rendered XML and
/// in manifests.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }

    /// Lenient lookup: `None` for anything that is not one of the exact
    /// lowercase names. Use [`str::parse`] when an error is wanted instead.
    pub fn parse(s: &str) -> Option<Self> {
        Self::iter().find(|frequency| frequency.as_str() == s)
    }

    fn supported() -> String {
        Self::iter()
            .map(Self::as_str)
            .collect::<Vec<&str>>()
            .join(", ")
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeFrequency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| Error::UnknownChangeFrequency {
            found: s.to_string(),
            supported: Self::supported(),
        })
    }
}

/// Manifest encodings understood by [`crate::manifest`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Json,
    Toml,
}

impl Format {
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Toml => "toml",
        }
    }

    /// Infer the format from a file extension, ignoring case.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_lowercase();
        Self::iter().find(|format| format.extension() == ext)
    }

    pub(crate) fn supported() -> String {
        Self::iter()
            .map(Self::extension)
            .collect::<Vec<&str>>()
            .join(", ")
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Self::iter()
            .find(|format| format.extension() == lowered)
            .ok_or_else(|| Error::UnknownFormat {
                found: s.to_string(),
                supported: Self::supported(),
            })
    }
}
