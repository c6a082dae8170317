//! Accessor names derived from catalog keys.

use std::collections::HashSet;

/// Swift's wildcard pattern. Never a valid member name, whatever the rules say.
const WILDCARD: &str = "_";

/// Name used when a key has no usable characters at all.
pub const FALLBACK_IDENTIFIER: &str = "key";

pub const DEFAULT_ESCAPE_PREFIX: &str = "_";

/// Punctuation and symbols that always split words.
const SEPARATOR_CHARS: &[char] = &[
    '\n', '\t', '\r', '/', '\\', '.', ',', '!', '?', ':', ';', '\'', '"', '(', ')', '[', ']', '{',
    '}', '<', '>', '-', '+', '=', '*', '&', '^', '%', '$', '#', '@', '~', '|', '`',
];

/// Swift keywords, including contextual keywords that cannot name a static member.
pub const SWIFT_RESERVED_WORDS: &[&str] = &[
    "Any", "Protocol", "Self", "Type", "actor", "as", "associatedtype", "async", "await",
    "break", "case", "catch", "class", "continue", "default", "defer", "deinit", "do", "else",
    "enum", "extension", "fallthrough", "false", "fileprivate", "for", "func", "guard", "if",
    "import", "in", "init", "inout", "internal", "is", "let", "nil", "open", "operator",
    "precedencegroup", "private", "protocol", "public", "repeat", "rethrows", "return", "self",
    "static", "struct", "subscript", "super", "switch", "throw", "throws", "true", "try",
    "typealias", "var", "where", "while",
];

/// Target-language rules for accessor names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierRules {
    reserved: HashSet<String>,
    escape_prefix: String,
}

impl IdentifierRules {
    pub fn new<I, S>(reserved: I, escape_prefix: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            reserved: reserved.into_iter().map(Into::into).collect(),
            escape_prefix: escape_prefix.into(),
        }
    }

    pub fn swift() -> Self {
        Self::new(SWIFT_RESERVED_WORDS.iter().copied(), DEFAULT_ESCAPE_PREFIX)
    }

    pub fn is_reserved(&self, word: &str) -> bool {
        self.reserved.contains(word)
    }

    pub fn escape_prefix(&self) -> &str {
        &self.escape_prefix
    }
}

impl Default for IdentifierRules {
    fn default() -> Self {
        Self::swift()
    }
}

fn is_separator(c: char) -> bool {
    SEPARATOR_CHARS.contains(&c) || c.is_whitespace() || !(c.is_alphanumeric() || c == '_')
}

/// Split a key into word components.
///
/// Every separator character, run of separators and space counts as one
/// boundary; empty components are dropped.
pub fn components(key: &str) -> Vec<&str> {
    key.split(is_separator)
        .filter(|component| !component.is_empty())
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower camel case from word components.
///
/// The first component is lowercased entirely; later components only get an
/// uppercase first letter, so `"URL"` stays `"URL"` in `"openURL"`.
fn camel_case(components: &[&str]) -> String {
    let mut out = String::new();
    for (i, component) in components.iter().enumerate() {
        if i == 0 {
            out.push_str(&component.to_lowercase());
        } else {
            out.push_str(&capitalize(component));
        }
    }
    out
}

/// Derive the accessor name for `key`.
///
/// ```
/// use lingo::codegen::{IdentifierRules, derive_identifier};
///
/// let rules = IdentifierRules::swift();
/// assert_eq!(derive_identifier("Account Deletion/Hi!", &rules), "accountDeletionHi");
/// assert_eq!(derive_identifier("import", &rules), "_import");
/// assert_eq!(derive_identifier("2FA", &rules), "_2fa");
/// assert_eq!(derive_identifier("!!!", &rules), "key");
/// ```
pub fn derive_identifier(key: &str, rules: &IdentifierRules) -> String {
    let parts = components(key);
    if parts.is_empty() {
        return FALLBACK_IDENTIFIER.to_string();
    }

    let mut identifier = camel_case(&parts);

    if identifier == WILDCARD || rules.is_reserved(&identifier) {
        identifier.insert_str(0, rules.escape_prefix());
    }
    if identifier.starts_with(|c: char| c.is_ascii_digit()) {
        identifier.insert_str(0, rules.escape_prefix());
    }

    identifier
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derive(key: &str) -> String {
        derive_identifier(key, &IdentifierRules::swift())
    }

    #[test]
    fn test_spaces_and_path_separators() {
        assert_eq!(derive("Account Deletion/Hi!"), "accountDeletionHi");
        assert_eq!(derive("Settings/Privacy/Title"), "settingsPrivacyTitle");
    }

    #[test]
    fn test_first_component_is_lowercased() {
        assert_eq!(derive("HELLO world"), "helloWorld");
        assert_eq!(derive("Open URL"), "openURL");
    }

    #[test]
    fn test_repeated_separators_collapse() {
        assert_eq!(derive("  Hello,   --  World!!  "), "helloWorld");
        assert_eq!(derive("Line one\nLine\ttwo\r\n"), "lineOneLineTwo");
    }

    #[test]
    fn test_placeholders_are_stripped() {
        assert_eq!(derive("Hello, %@!"), "hello");
        assert_eq!(derive("%lld items selected"), "lldItemsSelected");
    }

    #[test]
    fn test_empty_and_symbol_only_keys() {
        assert_eq!(derive(""), "key");
        assert_eq!(derive("   "), "key");
        assert_eq!(derive("!?/"), "key");
        assert_eq!(derive("🎉"), "key");
    }

    #[test]
    fn test_underscores_are_kept() {
        assert_eq!(derive("settings_title"), "settings_title");
    }

    #[test]
    fn test_unicode_letters_are_kept() {
        assert_eq!(derive("Grüße aus Köln"), "grüßeAusKöln");
    }

    #[test]
    fn test_reserved_word_is_escaped() {
        assert_eq!(derive("import"), "_import");
        assert_eq!(derive("Default"), "_default");
        assert_eq!(derive("Self"), "_self");
    }

    #[test]
    fn test_lone_underscore_is_escaped() {
        assert_eq!(derive("_"), "__");
        assert_eq!(derive("-_-"), "__");
        let custom = IdentifierRules::new(["class"], "x");
        assert_eq!(derive_identifier("_", &custom), "x_");
    }

    #[test]
    fn test_leading_digit_is_escaped() {
        assert_eq!(derive("2fa"), "_2fa");
        assert_eq!(derive("2 Factor Auth"), "_2FactorAuth");
    }

    #[test]
    fn test_custom_rules() {
        let rules = IdentifierRules::new(["match", "type"], "r#");
        assert_eq!(derive_identifier("match", &rules), "r#match");
        assert_eq!(derive_identifier("import", &rules), "import");
        assert_eq!(derive_identifier("3d", &rules), "r#3d");
    }

    #[test]
    fn test_components() {
        assert_eq!(components("Account Deletion/Hi!"), vec!["Account", "Deletion", "Hi"]);
        assert!(components("...").is_empty());
    }
}
