use anyhow::Result;

use crate::{CATALOG, CliTest, stderr, stdout};

#[test]
fn test_status_prints_coverage() -> Result<()> {
    let test = CliTest::with_file("Localizable.xcstrings", CATALOG)?;

    let output = test.status_command().args(["-l", "de,fr"]).output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert!(lines[0].starts_with("language"));
    assert!(lines[1].starts_with("en*"));
    assert!(lines[1].ends_with("100%"));
    assert!(lines[2].starts_with("de "));
    assert!(lines[2].ends_with("50%"));
    assert!(lines[3].starts_with("fr "));
    assert!(lines[3].ends_with("0%"));
    assert_eq!(lines[4], "* source language");

    Ok(())
}

#[test]
fn test_status_defaults_to_catalog_languages() -> Result<()> {
    let test = CliTest::with_file("Localizable.xcstrings", CATALOG)?;

    let output = test.status_command().output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.lines().any(|line| line.starts_with("de ")));
    assert!(!out.lines().any(|line| line.starts_with("fr ")));

    Ok(())
}
