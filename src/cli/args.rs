//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Print the strings passed to a target function
//! - `init`: Initialize an xtract configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::context::OutputFormat;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Command> {
        match self.command {
            Some(command) => Some(command),
            None => {
                Self::command().print_help().ok();
                None
            }
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct ExtractArgs {
    /// Go files, directories or glob patterns to extract from
    #[arg(required = true, value_name = "PATTERNS")]
    pub patterns: Vec<String>,

    /// Target function as module.Name (overrides config file)
    #[arg(short = 'f', long = "func", value_name = "MODULE.NAME")]
    pub function: Option<String>,

    /// Directory import paths are resolved under (default: $GOPATH/src)
    #[arg(long, env = "XTRACT_MODULE_ROOT", value_name = "DIR")]
    pub module_root: Option<PathBuf>,

    /// Output format (overrides config file)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract the first-argument strings of every call to a target function
    Extract(ExtractArgs),
    /// Initialize a new .xtractrc.json configuration file
    Init,
}
