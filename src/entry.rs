//! Sitemap entries and their optional metadata.

use crate::{
    enums::ChangeFrequency,
    formatter::{FormatConfig, XmlFormatter},
    location::Location,
};
use std::fmt;
use time::Date;

/// Optional per-entry hints for crawlers.
///
/// `priority` is conventionally within `0.0..=1.0` but is not checked: any
/// value, including negative or non-finite ones, is kept and rendered as is.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Metadata {
    pub last_modification: Option<Date>,
    pub change_frequency: Option<ChangeFrequency>,
    pub priority: Option<f32>,
}

impl Metadata {
    /// Metadata with every field absent.
    pub const EMPTY: Self = Self {
        last_modification: None,
        change_frequency: None,
        priority: None,
    };

    pub const fn new(
        last_modification: Option<Date>,
        change_frequency: Option<ChangeFrequency>,
        priority: Option<f32>,
    ) -> Self {
        Self {
            last_modification,
            change_frequency,
            priority,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.last_modification.is_none()
            && self.change_frequency.is_none()
            && self.priority.is_none()
    }
}

/// One `<url>` element of a sitemap.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlEntry {
    pub location: Location,
    pub metadata: Metadata,
}

impl UrlEntry {
    pub fn new(location: impl Into<Location>) -> Self {
        Self::with_metadata(location, Metadata::EMPTY)
    }

    pub fn with_metadata(location: impl Into<Location>, metadata: Metadata) -> Self {
        Self {
            location: location.into(),
            metadata,
        }
    }

    pub fn from_parts(
        location: impl Into<Location>,
        last_modification: Option<Date>,
        change_frequency: Option<ChangeFrequency>,
        priority: Option<f32>,
    ) -> Self {
        Self::with_metadata(
            location,
            Metadata::new(last_modification, change_frequency, priority),
        )
    }

    #[must_use]
    pub fn with_last_modification(mut self, date: Date) -> Self {
        self.metadata.last_modification = Some(date);
        self
    }

    #[must_use]
    pub fn with_change_frequency(mut self, frequency: ChangeFrequency) -> Self {
        self.metadata.change_frequency = Some(frequency);
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: f32) -> Self {
        self.metadata.priority = Some(priority);
        self
    }

    /// The `<url>...</url>` fragment for this entry.
    pub fn xml(&self) -> String {
        self.xml_with_config(&FormatConfig::default())
    }

    pub fn xml_with_config(&self, config: &FormatConfig) -> String {
        XmlFormatter::format_entry(self, config)
    }
}

impl fmt::Display for UrlEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.xml())
    }
}
