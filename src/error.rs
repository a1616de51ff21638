use serde_json::Error as SerdeJsonError;
use std::io;
use thiserror::Error;
use toml::de::Error as TomlError;

/// Errors raised at the boundaries of the crate.
///
/// Building entries from typed values and rendering them never fails; only
/// turning caller text into typed values (locations, change frequencies,
/// manifests) can.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid location {input:?}: {source}")]
    InvalidLocation {
        input: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid location {input:?}: surrounding whitespace, control characters, tabs and newlines are not allowed")]
    UnstrippedLocation { input: String },

    #[error("Unknown change frequency: {found}. Supported: {supported}")]
    UnknownChangeFrequency { found: String, supported: String },

    #[error("Invalid last modification {input:?}: expected yyyy-mm-dd or an RFC 3339 timestamp")]
    InvalidDate { input: String },

    #[error("Error parsing JSON manifest: {0}")]
    InvalidJson(#[from] SerdeJsonError),

    #[error("Error parsing TOML manifest: {0}")]
    InvalidToml(#[from] TomlError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid manifest file type: {found}. Supported types: {supported}")]
    UnknownFormat { found: String, supported: String },
}

pub type Result<T> = std::result::Result<T, Error>;
