use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CATALOG, CliTest, stderr, stdout};

#[test]
fn test_generate_writes_swift_file() -> Result<()> {
    let test = CliTest::with_file("Localizable.xcstrings", CATALOG)?;

    let output = test.generate_command().output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Generated 2 accessors in"));

    let swift = test.read_file("Strings.swift")?;
    assert_eq!(
        swift,
        r#"// Generated by lingo. Do not edit.

import Foundation

public enum L10n {
    /// Hello
    public static var hello: String {
        String(localized: "Hello")
    }

    /// Welcome %@
    public static func welcome(_ param1: String) -> String {
        String(format: String(localized: "Welcome %@"), param1)
    }
}
"#
    );

    Ok(())
}

#[test]
fn test_generate_uses_table_for_other_catalogs() -> Result<()> {
    let test = CliTest::with_file("Resources/Onboarding.xcstrings", CATALOG)?;

    let output = test
        .generate_command()
        .args(["-o", "Generated/Onboarding.swift", "--enum-name", "Onboarding"])
        .output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let swift = test.read_file("Generated/Onboarding.swift")?;
    assert!(swift.contains("public enum Onboarding {"));
    assert!(swift.contains(r#"String(localized: "Hello", table: "Onboarding")"#));

    Ok(())
}

#[test]
fn test_generate_reports_collisions() -> Result<()> {
    let test = CliTest::with_file(
        "Localizable.xcstrings",
        r#"{
  "sourceLanguage" : "en",
  "strings" : {
    "Sign in" : { },
    "Sign-in" : { }
  },
  "version" : "1.0"
}
"#,
    )?;

    let output = test.generate_command().output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("identifier-collision"));

    let swift = test.read_file("Strings.swift")?;
    assert!(swift.contains("public static var signIn: String"));
    assert!(swift.contains("public static var signIn2: String"));

    Ok(())
}

#[test]
fn test_generate_malformed_catalog() -> Result<()> {
    let test = CliTest::with_file("Localizable.xcstrings", r#"{ "strings" : [ ] }"#)?;

    let output = test.generate_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error:"));
    assert!(!test.root().join("Strings.swift").exists());

    Ok(())
}

#[test]
fn test_generate_rejects_invalid_enum_name() -> Result<()> {
    let test = CliTest::with_file("Localizable.xcstrings", CATALOG)?;

    let output = test
        .generate_command()
        .args(["--enum-name", "My Enum"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("\"My Enum\" is not a valid identifier"));
    assert!(!test.root().join("Strings.swift").exists());

    Ok(())
}
