use std::process::ExitCode;

use clap::Parser;
use lingo::cli::{Arguments, ExitStatus, logging};

fn main() -> ExitCode {
    let args = Arguments::parse();
    logging::init(args.verbose());

    match lingo::cli::run_cli(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
