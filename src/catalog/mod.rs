//! In-memory model of an Xcode string catalog (`.xcstrings`).
//!
//! The catalog maps source-text keys to per-language localizations. Units
//! that use plural, device or substitution variants are kept as opaque JSON
//! so they survive a load/save cycle untouched.

mod discover;
mod format;

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};
use serde_json::{Map, Value};
use tracing::info;

pub use discover::{CATALOG_EXTENSION, discover_catalogs};
pub use format::XcodeFormatter;

use crate::error::{Error, Result};

/// Keys whose presence marks a localization as an alternate-format unit.
pub const ALTERNATE_FORMAT_KEYS: &[&str] = &["variations", "substitutions"];

// ============================================================
// Translation State
// ============================================================

/// State recorded in a `stringUnit`.
///
/// Anything other than `translated` or `error` is kept verbatim and treated
/// as needing translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TranslationState {
    Translated,
    Error,
    Pending(String),
}

impl TranslationState {
    pub fn as_str(&self) -> &str {
        match self {
            TranslationState::Translated => "translated",
            TranslationState::Error => "error",
            TranslationState::Pending(state) => state,
        }
    }
}

impl From<String> for TranslationState {
    fn from(state: String) -> Self {
        match state.as_str() {
            "translated" => TranslationState::Translated,
            "error" => TranslationState::Error,
            _ => TranslationState::Pending(state),
        }
    }
}

impl From<TranslationState> for String {
    fn from(state: TranslationState) -> Self {
        match state {
            TranslationState::Translated => "translated".to_string(),
            TranslationState::Error => "error".to_string(),
            TranslationState::Pending(state) => state,
        }
    }
}

// ============================================================
// Units and Groups
// ============================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringUnit {
    pub state: TranslationState,
    #[serde(default)]
    pub value: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StringUnit {
    pub fn new(value: impl Into<String>, state: TranslationState) -> Self {
        Self {
            state,
            value: value.into(),
            extra: Map::new(),
        }
    }
}

/// A plain text localization: an optional `stringUnit`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextUnit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string_unit: Option<StringUnit>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Per-language payload for one key.
#[derive(Debug, Clone, PartialEq)]
pub enum LocalizationUnit {
    /// Simple text with a translation state.
    Text(TextUnit),
    /// Plural, device-variant or substitution unit. Never interpreted.
    Opaque(Value),
}

impl LocalizationUnit {
    pub fn text(value: impl Into<String>, state: TranslationState) -> Self {
        LocalizationUnit::Text(TextUnit {
            string_unit: Some(StringUnit::new(value, state)),
            extra: Map::new(),
        })
    }

    pub fn string_unit(&self) -> Option<&StringUnit> {
        match self {
            LocalizationUnit::Text(unit) => unit.string_unit.as_ref(),
            LocalizationUnit::Opaque(_) => None,
        }
    }

    pub fn is_opaque(&self) -> bool {
        matches!(self, LocalizationUnit::Opaque(_))
    }

    pub fn is_translated(&self) -> bool {
        self.string_unit()
            .is_some_and(|unit| unit.state == TranslationState::Translated)
    }
}

impl Serialize for LocalizationUnit {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            LocalizationUnit::Text(unit) => unit.serialize(serializer),
            LocalizationUnit::Opaque(value) => value.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for LocalizationUnit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let Value::Object(map) = &value else {
            return Err(D::Error::custom("localization must be an object"));
        };
        if ALTERNATE_FORMAT_KEYS.iter().any(|key| map.contains_key(*key)) {
            return Ok(LocalizationUnit::Opaque(value));
        }
        serde_json::from_value(value)
            .map(LocalizationUnit::Text)
            .map_err(D::Error::custom)
    }
}

/// All localizations of one key, plus its translator-facing metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizationGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extraction_state: Option<String>,
    /// Created lazily: `None` and an empty map are both written back as read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localizations: Option<BTreeMap<String, LocalizationUnit>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_translate: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LocalizationGroup {
    pub fn localization(&self, language: &str) -> Option<&LocalizationUnit> {
        self.localizations.as_ref()?.get(language)
    }

    pub fn localizations(&self) -> impl Iterator<Item = (&String, &LocalizationUnit)> {
        self.localizations.iter().flatten()
    }

    /// Whether the catalog marks this key as not to be translated.
    pub fn is_translatable(&self) -> bool {
        self.should_translate != Some(false)
    }
}

// ============================================================
// Catalog
// ============================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    source_language: String,
    #[serde(default)]
    strings: BTreeMap<String, LocalizationGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    version: Option<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
    /// Run-only source language. Never written back.
    #[serde(skip)]
    source_override: Option<String>,
}

impl Catalog {
    pub fn new(source_language: impl Into<String>) -> Self {
        Self {
            source_language: source_language.into(),
            strings: BTreeMap::new(),
            version: Some("1.0".to_string()),
            extra: Map::new(),
            source_override: None,
        }
    }

    /// Parse a catalog from its JSON text.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::malformed(e.to_string()))
    }

    /// Read and parse a catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::malformed(format!("cannot read file: {}", e)).with_path(path))?;
        let catalog = Self::from_json(&content).map_err(|e| e.with_path(path))?;
        info!(
            path = %path.display(),
            keys = catalog.len(),
            source_language = %catalog.source_language,
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Source language in effect: the override if set, else the declared one.
    pub fn source_language(&self) -> &str {
        self.source_override
            .as_deref()
            .unwrap_or(&self.source_language)
    }

    /// Source language as declared in the document.
    pub fn declared_source_language(&self) -> &str {
        &self.source_language
    }

    /// Treat `language` as the source for this run. The saved document keeps
    /// its declared `sourceLanguage`.
    pub fn override_source_language(&mut self, language: impl Into<String>) {
        self.source_override = Some(language.into());
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    pub fn strings(&self) -> impl Iterator<Item = (&String, &LocalizationGroup)> {
        self.strings.iter()
    }

    pub fn group(&self, key: &str) -> Option<&LocalizationGroup> {
        self.strings.get(key)
    }

    /// Add a key with no localizations. Existing groups are left alone.
    pub fn insert_key(&mut self, key: impl Into<String>, comment: Option<String>) {
        self.strings
            .entry(key.into())
            .or_insert_with(|| LocalizationGroup {
                comment,
                ..LocalizationGroup::default()
            });
    }

    /// Every language code that appears in any localization, sorted.
    pub fn languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = self
            .strings
            .values()
            .flat_map(|group| group.localizations().map(|(lang, _)| lang.clone()))
            .collect();
        languages.sort();
        languages.dedup();
        languages
    }

    /// Write a translation for `key` in `language`.
    ///
    /// Creates the group, the localization map and the unit as needed, and
    /// overwrites the `stringUnit` of an existing text unit.
    pub fn set_translation(
        &mut self,
        key: &str,
        language: &str,
        text: &str,
        state: TranslationState,
    ) {
        let group = self.strings.entry(key.to_string()).or_default();
        let localizations = group.localizations.get_or_insert_with(BTreeMap::new);
        match localizations.get_mut(language) {
            Some(LocalizationUnit::Text(unit)) => match unit.string_unit.as_mut() {
                Some(string_unit) => {
                    string_unit.state = state;
                    string_unit.value = text.to_string();
                }
                None => unit.string_unit = Some(StringUnit::new(text, state)),
            },
            _ => {
                localizations.insert(language.to_string(), LocalizationUnit::text(text, state));
            }
        }
    }

    /// Serialize with sorted keys in Xcode's formatting, ending in a newline.
    ///
    /// Every object is sorted, including preserved unknown fields and opaque
    /// units, which would otherwise keep their input order.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut value = serde_json::to_value(self)?;
        sort_object_keys(&mut value);

        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, XcodeFormatter::new());
        value.serialize(&mut ser)?;
        buf.push(b'\n');
        // Serializer output is always valid UTF-8.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Overwrite `path` with this catalog, keeping the previous file as `.bak`.
    pub fn save(&self, path: &Path, backup: bool) -> anyhow::Result<()> {
        let content = self.to_json().context("Failed to serialize catalog")?;

        if backup && path.exists() {
            let backup_path = backup_path(path);
            fs::copy(path, &backup_path).with_context(|| {
                format!("Failed to write backup: {}", backup_path.display())
            })?;
        }

        fs::write(path, content)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        info!(path = %path.display(), "saved catalog");
        Ok(())
    }
}

fn sort_object_keys(value: &mut Value) {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = std::mem::take(map).into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            for (key, mut child) in entries {
                sort_object_keys(&mut child);
                map.insert(key, child);
            }
        }
        Value::Array(items) => items.iter_mut().for_each(sort_object_keys),
        _ => {}
    }
}

/// `Localizable.xcstrings` -> `Localizable.xcstrings.bak`
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".bak");
    PathBuf::from(name)
}
