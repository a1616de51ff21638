#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use sitemap::{manifest, ChangeFrequency, Error, Format, Metadata};
use std::fs;
use time::macros::date;

const TOML_MANIFEST: &str = r#"
[[url]]
loc = "https://example.com"
lastmod = "2025-01-15T09:30:00Z"
changefreq = "daily"
priority = 1.0

[[url]]
loc = "https://example.com/about"
changefreq = "monthly"
priority = 0.8

[[url]]
loc = "https://example.com/search?q=rust&page=1"
"#;

const JSON_MANIFEST: &str = r#"{
  "url": [
    {"loc": "https://example.com", "lastmod": "2025-01-15", "changefreq": "daily", "priority": 1},
    {"loc": "https://example.com/about", "changefreq": "monthly", "priority": 0.8}
  ]
}"#;

#[test]
fn test_toml_manifest() -> Result<(), Box<dyn std::error::Error>> {
    let sitemap = manifest::from_toml_str(TOML_MANIFEST)?;
    assert_eq!(sitemap.len(), 3);

    assert_eq!(sitemap.urls[0].location.as_str(), "https://example.com");
    assert_eq!(
        sitemap.urls[0].metadata,
        Metadata::new(
            Some(date!(2025 - 01 - 15)),
            Some(ChangeFrequency::Daily),
            Some(1.0)
        )
    );
    assert_eq!(
        sitemap.urls[1].metadata,
        Metadata::new(None, Some(ChangeFrequency::Monthly), Some(0.8))
    );
    assert!(sitemap.urls[2].metadata.is_empty());

    let xml = sitemap.xml();
    assert!(xml.contains("<lastmod>2025-01-15</lastmod>"));
    assert!(xml.contains("<loc>https://example.com/search?q=rust&page=1</loc>"));
    Ok(())
}

#[test]
fn test_json_manifest_matches_toml() -> Result<(), Box<dyn std::error::Error>> {
    let json = manifest::from_json_str(JSON_MANIFEST)?;
    let toml = manifest::from_toml_str(TOML_MANIFEST)?;

    assert_eq!(json.len(), 2);
    assert_eq!(json.urls[..], toml.urls[..2]);
    Ok(())
}

#[test]
fn test_unknown_change_frequency_is_rejected() {
    let input = "[[url]]\nloc = \"https://example.com\"\nchangefreq = \"sometimes\"\n";
    let err = manifest::from_toml_str(input).unwrap_err();
    assert!(matches!(err, Error::InvalidToml(_)));
}

#[test]
fn test_unknown_field_is_rejected() {
    let input = r#"{"url": [{"loc": "https://example.com", "images": []}]}"#;
    let err = manifest::from_json_str(input).unwrap_err();
    assert!(matches!(err, Error::InvalidJson(_)));
}

#[test]
fn test_missing_loc_is_rejected() {
    let err = manifest::from_str("[[url]]\npriority = 0.5\n", Format::Toml).unwrap_err();
    assert!(matches!(err, Error::InvalidToml(_)));
}

#[test]
fn test_relative_loc_is_rejected() {
    let err = manifest::from_json_str(r#"{"url": [{"loc": "/about"}]}"#).unwrap_err();
    match err {
        Error::InvalidLocation { input, .. } => assert_eq!(input, "/about"),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_padded_loc_is_rejected() {
    let err = manifest::from_toml_str("[[url]]\nloc = \" https://example.com\\n\"\n").unwrap_err();
    match err {
        Error::UnstrippedLocation { input } => assert_eq!(input, " https://example.com\n"),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_bad_date_is_rejected() {
    let err = manifest::from_json_str(
        r#"{"url": [{"loc": "https://example.com", "lastmod": "15/01/2025"}]}"#,
    )
    .unwrap_err();
    assert!(matches!(err, Error::InvalidDate { .. }));
}

#[test]
fn test_load_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("pages.toml");
    fs::write(&path, TOML_MANIFEST)?;

    let sitemap = manifest::load_file(&path)?;
    assert_eq!(sitemap.len(), 3);
    Ok(())
}

#[test]
fn test_load_file_errors() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;

    let unknown = dir.path().join("pages.yaml");
    fs::write(&unknown, "url: []")?;
    match manifest::load_file(&unknown).unwrap_err() {
        Error::UnknownFormat { found, supported } => {
            assert_eq!(found, "yaml");
            assert_eq!(supported, "json, toml");
        }
        other => panic!("unexpected error: {}", other),
    }

    let missing = dir.path().join("missing.json");
    assert!(matches!(
        manifest::load_file(&missing).unwrap_err(),
        Error::Io(_)
    ));
    Ok(())
}
