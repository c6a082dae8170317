use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CATALOG, CliTest, stderr, stdout};

const TRANSLATED: &str = r#"{
  "sourceLanguage" : "en",
  "strings" : {
    "Hello" : {
      "localizations" : {
        "de" : {
          "stringUnit" : {
            "state" : "translated",
            "value" : "Hallo"
          }
        }
      }
    }
  },
  "version" : "1.0"
}
"#;

#[test]
fn test_dry_run_lists_tasks() -> Result<()> {
    let test = CliTest::with_file("Localizable.xcstrings", CATALOG)?;

    let output = test
        .translate_command()
        .args(["--dry-run", "-l", "de,fr"])
        .output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("de Welcome %@"));
    assert!(out.contains("fr Hello"));
    assert!(out.contains("fr Welcome %@"));
    assert!(
        out.contains("3 entries would be translated (1 up to date, 0 unsupported, 0 excluded)")
    );
    assert_eq!(test.read_file("Localizable.xcstrings")?, CATALOG);

    Ok(())
}

#[test]
fn test_missing_api_key() -> Result<()> {
    let test = CliTest::with_file("Localizable.xcstrings", CATALOG)?;

    let output = test.translate_command().args(["-l", "de"]).output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("OPENAI_API_KEY"));

    Ok(())
}

#[test]
fn test_no_target_languages() -> Result<()> {
    let test = CliTest::with_file("Localizable.xcstrings", CATALOG)?;

    let output = test.translate_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("no target languages"));

    Ok(())
}

#[test]
fn test_no_catalog_found() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.translate_command().args(["-l", "de"]).output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("no .xcstrings catalog found"));

    Ok(())
}

#[test]
fn test_up_to_date_catalog_is_untouched() -> Result<()> {
    let test = CliTest::with_file("Localizable.xcstrings", TRANSLATED)?;
    test.write_file(
        ".lingorc.json",
        r#"{ "targetLanguages": ["de"], "apiBaseUrl": "http://127.0.0.1:9" }"#,
    )?;

    let output = test
        .translate_command()
        .env("OPENAI_API_KEY", "test-key")
        .output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("0 requests"));
    assert_eq!(test.read_file("Localizable.xcstrings")?, TRANSLATED);
    assert!(!test.root().join("Localizable.xcstrings.bak").exists());

    Ok(())
}

#[test]
fn test_non_alphabetic_text_is_copied() -> Result<()> {
    let test = CliTest::with_file(
        "Localizable.xcstrings",
        r#"{
  "sourceLanguage" : "en",
  "strings" : {
    "10 / 20" : { }
  },
  "version" : "1.0"
}
"#,
    )?;

    let output = test
        .translate_command()
        .args(["-l", "de", "--catalog", "Localizable.xcstrings"])
        .env("OPENAI_API_KEY", "test-key")
        .output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("1 copied"));

    assert_eq!(
        test.read_file("Localizable.xcstrings")?,
        r#"{
  "sourceLanguage" : "en",
  "strings" : {
    "10 / 20" : {
      "localizations" : {
        "de" : {
          "stringUnit" : {
            "state" : "translated",
            "value" : "10 / 20"
          }
        }
      }
    }
  },
  "version" : "1.0"
}
"#
    );
    assert!(test.root().join("Localizable.xcstrings.bak").exists());

    Ok(())
}

#[test]
fn test_no_backup_flag() -> Result<()> {
    let test = CliTest::with_file(
        "Localizable.xcstrings",
        r#"{
  "sourceLanguage" : "en",
  "strings" : {
    "42" : { }
  },
  "version" : "1.0"
}
"#,
    )?;

    let output = test
        .translate_command()
        .args(["-l", "de", "--no-backup"])
        .env("OPENAI_API_KEY", "test-key")
        .output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(!test.root().join("Localizable.xcstrings.bak").exists());

    Ok(())
}

#[test]
fn test_unreachable_service_marks_errors() -> Result<()> {
    let test = CliTest::with_file("Localizable.xcstrings", TRANSLATED)?;
    test.write_file(
        ".lingorc.json",
        r#"{ "apiBaseUrl": "http://127.0.0.1:9", "rateLimitMs": 0, "timeoutSecs": 2 }"#,
    )?;

    let output = test
        .translate_command()
        .args(["-l", "fr", "--no-backup"])
        .env("OPENAI_API_KEY", "test-key")
        .output()?;
    assert_eq!(output.status.code(), Some(1), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("1 failed"));

    let catalog = test.read_file("Localizable.xcstrings")?;
    assert!(catalog.contains(
        r#""fr" : {
          "stringUnit" : {
            "state" : "error",
            "value" : ""
          }
        }"#
    ));

    Ok(())
}

#[test]
fn test_source_language_flag_is_not_saved() -> Result<()> {
    let test = CliTest::with_file(
        "Localizable.xcstrings",
        r#"{
  "sourceLanguage" : "en",
  "strings" : {
    "42" : { }
  },
  "version" : "1.0"
}
"#,
    )?;

    let output = test
        .translate_command()
        .args(["-l", "de,fr", "--source-language", "fr", "--no-backup"])
        .env("OPENAI_API_KEY", "test-key")
        .output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("1 copied"));

    let catalog = test.read_file("Localizable.xcstrings")?;
    assert!(catalog.contains(r#""sourceLanguage" : "en""#));
    assert!(catalog.contains(r#""de" : {"#));
    assert!(!catalog.contains(r#""fr" : {"#));

    Ok(())
}
