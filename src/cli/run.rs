use anyhow::Result;

use super::{
    args::Command,
    commands::{extract::extract, init::init},
    exit_status::ExitStatus,
};

/// Dispatch a parsed command to its handler.
pub fn run(command: Command) -> Result<ExitStatus> {
    match command {
        Command::Extract(args) => extract(&args),
        Command::Init => init(),
    }
}
