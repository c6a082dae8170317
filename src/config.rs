use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::codegen::{
    IdentifierRules,
    identifier::{DEFAULT_ESCAPE_PREFIX, SWIFT_RESERVED_WORDS},
    swift::DEFAULT_ENUM_NAME,
};
use crate::translate::openai::{DEFAULT_BASE_URL, DEFAULT_MODEL};

pub const CONFIG_FILE_NAME: &str = ".lingorc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Catalog to work on. Discovered below the working directory when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
    /// Overrides the catalog's own `sourceLanguage`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_language: Option<String>,
    #[serde(default)]
    pub target_languages: Vec<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Minimum spacing between translation requests.
    #[serde(default = "default_rate_limit_ms")]
    pub rate_limit_ms: u64,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Generated Swift file.
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default = "default_enum_name")]
    pub enum_name: String,
    /// Replaces the Swift keyword list when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserved_words: Option<Vec<String>>,
    #[serde(default = "default_escape_prefix")]
    pub escape_prefix: String,
    /// Keep the previous catalog as `<catalog>.bak` before overwriting.
    #[serde(default = "default_backup")]
    pub backup: bool,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_api_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

fn default_rate_limit_ms() -> u64 {
    1000
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_output() -> PathBuf {
    PathBuf::from("Strings.swift")
}

fn default_enum_name() -> String {
    DEFAULT_ENUM_NAME.to_string()
}

fn default_escape_prefix() -> String {
    DEFAULT_ESCAPE_PREFIX.to_string()
}

fn default_backup() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: None,
            source_language: None,
            target_languages: Vec::new(),
            model: default_model(),
            api_base_url: default_api_base_url(),
            api_key_env: default_api_key_env(),
            rate_limit_ms: default_rate_limit_ms(),
            timeout_secs: default_timeout_secs(),
            output: default_output(),
            enum_name: default_enum_name(),
            reserved_words: None,
            escape_prefix: default_escape_prefix(),
            backup: default_backup(),
        }
    }
}

/// Whether `name` can be used as the generated enum name.
///
/// Swift keywords and the lone `_` wildcard are rejected.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let well_formed = chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_');
    well_formed && name != "_" && !SWIFT_RESERVED_WORDS.contains(&name)
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !is_identifier(&self.enum_name) {
            bail!(
                "Invalid 'enumName': \"{}\" is not a valid identifier",
                self.enum_name
            );
        }
        if self.escape_prefix.is_empty() {
            bail!("'escapePrefix' must not be empty");
        }
        if self.timeout_secs == 0 {
            bail!("'timeoutSecs' must be greater than 0");
        }
        Ok(())
    }

    pub fn identifier_rules(&self) -> IdentifierRules {
        match &self.reserved_words {
            Some(words) => IdentifierRules::new(words.iter().cloned(), self.escape_prefix.clone()),
            None => IdentifierRules::new(
                SWIFT_RESERVED_WORDS.iter().copied(),
                self.escape_prefix.clone(),
            ),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, `None` when using defaults.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    /// Directory relative paths in the config are resolved against.
    pub fn base_dir(&self, fallback: &Path) -> PathBuf {
        self.path
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_else(|| fallback.to_path_buf())
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
