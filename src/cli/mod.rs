use std::process::ExitCode;

use anyhow::Result;

pub mod args;
mod commands;
mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, Command, ExtractArgs};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let Some(command) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let status = run::run(command)?;
    Ok(status.into())
}
