//! Command-line interface layer.
//!
//! - `args`: clap argument definitions
//! - `commands`: one handler per subcommand
//! - `report`: colored terminal output

mod args;
mod commands;
mod exit_status;
pub mod logging;
mod report;
mod run;

use std::process::ExitCode;

use anyhow::Result;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let status = run::run(args)?;
    Ok(status.into())
}
