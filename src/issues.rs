//! Issue types recorded while processing a catalog.
//!
//! Issues are per-entry problems that never abort a run. Each issue carries
//! everything the reporter needs to print it.

use enum_dispatch::enum_dispatch;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    UnsupportedFormat,
    TranslationFailed,
    IdentifierCollision,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::UnsupportedFormat => write!(f, "unsupported-format"),
            Rule::TranslationFailed => write!(f, "translation-failed"),
            Rule::IdentifierCollision => write!(f, "identifier-collision"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Localization uses plural, device or substitution variants and was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedFormatIssue {
    pub key: String,
    pub language: String,
}

impl UnsupportedFormatIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnsupportedFormat
    }
}

/// Translation service failed for one (key, language) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationFailedIssue {
    pub key: String,
    pub language: String,
    pub reason: String,
}

impl TranslationFailedIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::TranslationFailed
    }
}

/// Two keys derived the same accessor name; the later key was renamed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierCollisionIssue {
    pub key: String,
    /// Name the key derived on its own.
    pub derived: String,
    /// Name actually emitted after disambiguation.
    pub renamed: String,
    /// Key that claimed `derived` first.
    pub conflicts_with: String,
}

impl IdentifierCollisionIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::IdentifierCollision
    }
}

// ============================================================
// Issue Enum
// ============================================================

#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    UnsupportedFormat(UnsupportedFormatIssue),
    TranslationFailed(TranslationFailedIssue),
    IdentifierCollision(IdentifierCollisionIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::UnsupportedFormat(_) => UnsupportedFormatIssue::severity(),
            Issue::TranslationFailed(_) => TranslationFailedIssue::severity(),
            Issue::IdentifierCollision(_) => IdentifierCollisionIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::UnsupportedFormat(_) => UnsupportedFormatIssue::rule(),
            Issue::TranslationFailed(_) => TranslationFailedIssue::rule(),
            Issue::IdentifierCollision(_) => IdentifierCollisionIssue::rule(),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Trait for types that can be reported to CLI.
///
/// Uses `enum_dispatch` for zero-cost dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    /// Catalog key the issue is about.
    fn key(&self) -> &str;

    /// Language code, when the issue concerns a single localization.
    fn language(&self) -> Option<&str> {
        None
    }

    /// Primary message to display.
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for UnsupportedFormatIssue {
    fn key(&self) -> &str {
        &self.key
    }

    fn language(&self) -> Option<&str> {
        Some(&self.language)
    }

    fn message(&self) -> String {
        "plural, device or substitution variants are not translated".to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for TranslationFailedIssue {
    fn key(&self) -> &str {
        &self.key
    }

    fn language(&self) -> Option<&str> {
        Some(&self.language)
    }

    fn message(&self) -> String {
        "translation failed, unit marked as error".to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(self.reason.clone())
    }
}

impl Report for IdentifierCollisionIssue {
    fn key(&self) -> &str {
        &self.key
    }

    fn message(&self) -> String {
        format!("accessor `{}` renamed to `{}`", self.derived, self.renamed)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("\"{}\" already uses `{}`", self.conflicts_with, self.derived))
    }
}
