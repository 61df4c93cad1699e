//! CLI argument definitions for the assignment studio harness.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};

#[derive(Parser)]
#[command(
    name = "asmt",
    version,
    about = "Assignment Studio - coding-test assignment draft tools",
    long_about = "Validate saved assignment reads against the builder rules and\n\
                  preview the create/update/delete reconciliation payload a save\n\
                  would send."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a saved assignment read and print a summary table.
    Check(CheckArgs),
    /// Print the reconciliation payload a save would send.
    Payload(PayloadArgs),
}

#[derive(Args)]
pub struct CheckArgs {
    /// Path to a remote-read JSON file (the backend's assignment shape).
    pub input: PathBuf,
}

#[derive(Args)]
pub struct PayloadArgs {
    /// Path to a remote-read JSON file (the backend's assignment shape).
    pub input: PathBuf,

    /// Emit compact JSON instead of pretty-printed.
    #[arg(long)]
    pub compact: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
