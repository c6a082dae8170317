//! Shared setup for catalog commands: config loading and catalog resolution.

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::Result;
use tracing::debug;

use super::super::args::CommonArgs;
use crate::{
    catalog::{Catalog, discover_catalogs},
    config::{Config, load_config},
    error::Error,
};

pub struct CommandContext {
    pub config: Config,
    /// Working directory; relative CLI paths resolve against it.
    pub cwd: PathBuf,
    /// Directory of the config file, or `cwd` without one.
    pub base_dir: PathBuf,
    pub catalog_path: PathBuf,
    pub source_language: Option<String>,
    pub verbose: bool,
}

impl CommandContext {
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir()?;
        let loaded = load_config(&cwd)?;
        let base_dir = loaded.base_dir(&cwd);
        if let Some(path) = &loaded.path {
            debug!(path = %path.display(), "using config file");
        }

        let catalog_path = resolve_catalog(
            common.catalog.as_deref(),
            loaded.config.catalog.as_deref(),
            &cwd,
            &base_dir,
            common.verbose,
        )?;

        let source_language = common
            .source_language
            .clone()
            .or_else(|| loaded.config.source_language.clone());

        Ok(Self {
            config: loaded.config,
            cwd,
            base_dir,
            catalog_path,
            source_language,
            verbose: common.verbose,
        })
    }

    /// Load the catalog, applying any source language override.
    pub fn load_catalog(&self) -> Result<Catalog> {
        let mut catalog = Catalog::load(&self.catalog_path)?;
        if let Some(language) = &self.source_language {
            catalog.override_source_language(language.clone());
        }
        Ok(catalog)
    }

    /// CLI value relative to `cwd`, otherwise config value relative to the config file.
    pub fn resolve_path(&self, cli: Option<&Path>, config: &Path) -> PathBuf {
        match cli {
            Some(path) => self.cwd.join(path),
            None => self.base_dir.join(config),
        }
    }
}

/// Pick the catalog: CLI flag, then config, then the single `.xcstrings`
/// file found below the working directory.
fn resolve_catalog(
    cli: Option<&Path>,
    config: Option<&Path>,
    cwd: &Path,
    base_dir: &Path,
    verbose: bool,
) -> Result<PathBuf> {
    if let Some(path) = cli {
        return Ok(cwd.join(path));
    }
    if let Some(path) = config {
        return Ok(base_dir.join(path));
    }

    let mut found = discover_catalogs(cwd, verbose);
    match found.len() {
        0 => Err(Error::ConfigurationMissing(format!(
            "no .xcstrings catalog found in {}; pass --catalog",
            cwd.display()
        ))
        .into()),
        1 => Ok(found.remove(0)),
        _ => {
            let candidates = found
                .iter()
                .map(|p| p.strip_prefix(cwd).unwrap_or(p).display().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            Err(Error::ConfigurationMissing(format!(
                "several catalogs found ({}); pass --catalog",
                candidates
            ))
            .into())
        }
    }
}
