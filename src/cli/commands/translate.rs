use std::{env, io};

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::{
    args::TranslateCommand,
    exit_status::ExitStatus,
    report::{SUCCESS_MARK, print_plan_to, print_progress_to, print_summary_to},
};
use super::context::CommandContext;
use crate::{
    error::Error,
    translate::{OpenAiConfig, OpenAiTranslator, Orchestrator, RateGate, plan},
};

pub fn translate(cmd: TranslateCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let mut catalog = ctx.load_catalog()?;

    let languages = if cmd.languages.is_empty() {
        ctx.config.target_languages.clone()
    } else {
        cmd.languages.clone()
    };
    if languages.is_empty() {
        return Err(Error::ConfigurationMissing(
            "no target languages; pass --language or set 'targetLanguages'".to_string(),
        )
        .into());
    }

    if cmd.dry_run {
        let plan = plan(&catalog, &languages, cmd.force)?;
        print_plan_to(&plan, &mut io::stdout().lock());
        return Ok(ExitStatus::Success);
    }

    let api_key = env::var(&ctx.config.api_key_env)
        .ok()
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| {
            Error::ConfigurationMissing(format!(
                "environment variable {} is not set",
                ctx.config.api_key_env
            ))
        })?;

    let translator = OpenAiTranslator::new(OpenAiConfig {
        base_url: ctx.config.api_base_url.clone(),
        api_key,
        model: ctx.config.model.clone(),
        timeout: ctx.config.timeout(),
    })
    .context("Failed to create HTTP client")?;
    let orchestrator = Orchestrator::new(translator, RateGate::from_millis(ctx.config.rate_limit_ms));

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let report = runtime.block_on(orchestrator.process(
        &mut catalog,
        &languages,
        cmd.force,
        |event| print_progress_to(&event, &mut io::stdout().lock(), &mut io::stderr().lock()),
    ))?;

    let changed = report.translated + report.failed + report.passthrough;
    if changed > 0 {
        let backup = ctx.config.backup && !cmd.no_backup;
        catalog.save(&ctx.catalog_path, backup)?;
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Updated {}", ctx.catalog_path.display()).green()
        );
    }

    print_summary_to(&report, &mut io::stdout().lock());

    if report.has_failures() {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}
