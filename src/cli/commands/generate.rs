use std::{fs, io};

use anyhow::{Context, Result, bail};
use colored::Colorize;

use super::super::{
    args::GenerateCommand,
    exit_status::ExitStatus,
    report::{SUCCESS_MARK, print_issues_to},
};
use super::context::CommandContext;
use crate::{
    codegen::{SwiftEmitter, SwiftOptions, swift::DEFAULT_TABLE, synthesize},
    config::is_identifier,
};

pub fn generate(cmd: GenerateCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let catalog = ctx.load_catalog()?;

    let enum_name = cmd
        .enum_name
        .clone()
        .unwrap_or_else(|| ctx.config.enum_name.clone());
    if !is_identifier(&enum_name) {
        bail!("Invalid --enum-name: \"{}\" is not a valid identifier", enum_name);
    }
    let output = ctx.resolve_path(cmd.output.as_deref(), &ctx.config.output);

    let synthesis = synthesize(&catalog, &ctx.config.identifier_rules());
    print_issues_to(&synthesis.issues, &mut io::stderr().lock());

    let stem = ctx
        .catalog_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(DEFAULT_TABLE);
    let emitter = SwiftEmitter::new(SwiftOptions::for_table(enum_name, stem));
    let source = emitter.render(&synthesis.records);

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(&output, source)
        .with_context(|| format!("Failed to write file: {}", output.display()))?;

    let count = synthesis.records.len();
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Generated {} {} in {}",
            count,
            if count == 1 { "accessor" } else { "accessors" },
            output.display()
        )
        .green()
    );

    Ok(ExitStatus::Success)
}
