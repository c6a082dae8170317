use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{generate::generate, init::init, status::status, translate::translate},
    exit_status::ExitStatus,
};

/// Dispatch to the command handler.
///
/// # Returns
/// - `Ok(ExitStatus)` when the command ran to completion
/// - `Err` if the command aborted (config not found, malformed catalog, I/O)
pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Translate(cmd)) => translate(cmd),
        Some(Command::Generate(cmd)) => generate(cmd),
        Some(Command::Status(cmd)) => status(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
