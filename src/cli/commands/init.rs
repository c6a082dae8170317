use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::Path,
};

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::{exit_status::ExitStatus, report::SUCCESS_MARK};
use crate::config::{CONFIG_FILE_NAME, Config, default_config_json};

/// Write a default `.lingorc.json` into the working directory.
///
/// An existing file is never overwritten.
pub fn init() -> Result<ExitStatus> {
    let path = Path::new(CONFIG_FILE_NAME);
    let content = default_config_json()?;

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
            eprintln!(
                "Error: {} already exists; edit it or remove it first",
                CONFIG_FILE_NAME
            );
            return Ok(ExitStatus::Failure);
        }
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to create {}", CONFIG_FILE_NAME));
        }
    };
    writeln!(file, "{}", content)
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;

    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", CONFIG_FILE_NAME).green()
    );
    println!(
        "Next: list your languages in \"targetLanguages\" and export {} before running `lingo translate`.",
        Config::default().api_key_env.bold()
    );

    Ok(ExitStatus::Success)
}
