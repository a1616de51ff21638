#![allow(clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const MANIFEST: &str = r#"
[[url]]
loc = "https://example.com"
changefreq = "daily"
priority = 1.0

[[url]]
loc = "https://example.com/search?q=a&b=c"
"#;

fn sitemap() -> Command {
    Command::cargo_bin("sitemap").unwrap()
}

#[test]
fn renders_file_to_stdout() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("pages.toml");
    fs::write(&input, MANIFEST)?;

    sitemap()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            r#"<?xml version="1.0" encoding="UTF-8"?>"#,
        ))
        .stdout(predicate::str::contains("<changefreq>daily</changefreq>"))
        .stdout(predicate::str::contains(
            "<loc>https://example.com/search?q=a&b=c</loc>",
        ));
    Ok(())
}

#[test]
fn writes_output_file_and_escapes_on_request() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("pages.toml");
    let output = dir.path().join("sitemap.xml");
    fs::write(&input, MANIFEST)?;

    sitemap()
        .arg(&input)
        .arg("--escape")
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let xml = fs::read_to_string(&output)?;
    assert!(xml.contains("<loc>https://example.com/search?q=a&amp;b=c</loc>"));
    assert!(xml.ends_with("</urlset>\n"));
    Ok(())
}

#[test]
fn file_and_stdout_output_are_identical() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("pages.toml");
    let output = dir.path().join("sitemap.xml");
    fs::write(&input, MANIFEST)?;

    let printed = sitemap().arg(&input).output()?;
    assert!(printed.status.success());

    sitemap().arg(&input).arg("-o").arg(&output).assert().success();
    let written = fs::read(&output)?;

    assert_eq!(written, printed.stdout);
    assert!(written.ends_with(b"</urlset>\n"));
    Ok(())
}

#[test]
fn reads_stdin_with_explicit_format() {
    sitemap()
        .args(["--from", "json"])
        .write_stdin(r#"{"url": [{"loc": "https://example.com/about"}]}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("<loc>https://example.com/about</loc>"));
}

#[test]
fn stdin_without_format_fails() {
    sitemap()
        .write_stdin(MANIFEST)
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not infer manifest format"));
}

#[test]
fn invalid_manifest_reports_context() {
    sitemap()
        .args(["--from", "json"])
        .write_stdin(r#"{"url": [{"loc": "not a url"}]}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load manifest"))
        .stderr(predicate::str::contains("Invalid location"));
}
