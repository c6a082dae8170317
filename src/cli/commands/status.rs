use std::io;

use anyhow::Result;

use super::super::{args::StatusCommand, exit_status::ExitStatus, report::print_coverage_to};
use super::context::CommandContext;
use crate::coverage::coverage;

pub fn status(cmd: StatusCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let catalog = ctx.load_catalog()?;

    let mut languages = if !cmd.languages.is_empty() {
        cmd.languages.clone()
    } else if !ctx.config.target_languages.is_empty() {
        ctx.config.target_languages.clone()
    } else {
        catalog.languages()
    };

    // Source language first so the table reads top-down from the reference.
    let source = catalog.source_language().to_string();
    languages.retain(|language| *language != source);
    languages.insert(0, source.clone());

    let rows = coverage(&catalog, &languages);
    print_coverage_to(&source, &rows, &mut io::stdout().lock());

    Ok(ExitStatus::Success)
}
