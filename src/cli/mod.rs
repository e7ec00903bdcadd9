//! Command-line interface layer.

use std::process::ExitCode;

use anyhow::Result;

pub mod args;
pub mod commands;
pub mod exit_status;
pub mod report;
pub mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

use crate::core::cancel::CancelToken;
use commands::CommandResult;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let cancel = CancelToken::new();
    let result = run::run(args, &cancel)?;
    report::print(&result, verbose);

    Ok(exit_status(&result).into())
}

fn exit_status(result: &CommandResult) -> ExitStatus {
    if result.exit_on_errors && result.error_count > 0 {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    }
}
