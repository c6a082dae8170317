use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("Created .lingorc.json"));
    assert!(out.contains("\"targetLanguages\""));
    assert!(out.contains("export OPENAI_API_KEY"));

    let content = test.read_file(".lingorc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["targetLanguages"], Value::Array(Vec::new()));
    assert_eq!(parsed["apiKeyEnv"], "OPENAI_API_KEY");
    assert_eq!(parsed["enumName"], "L10n");
    assert!(parsed.get("catalog").is_none());
    assert!(content.ends_with("}\n"));

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".lingorc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(".lingorc.json already exists"));
    assert_eq!(test.read_file(".lingorc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::with_file("Localizable.xcstrings", crate::CATALOG)?;

    test.command().arg("init").output()?;

    let output = test.status_command().output()?;
    assert!(
        output.status.success(),
        "status should work with initialized config. stderr: {}",
        stderr(&output)
    );

    Ok(())
}
