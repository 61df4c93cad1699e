//! Assignment Studio CLI.

use clap::Parser;

mod cli;
mod commands;
mod logging;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg};
use crate::commands::{run_check, run_payload};
use crate::logging::{LogConfig, LogFormat, init_logging};
use crate::summary::print_check_summary;

fn main() {
    let cli = Cli::parse();
    init_logging(&log_config_from_cli(&cli));
    let exit_code = match &cli.command {
        Command::Check(args) => match run_check(args) {
            Ok(result) => {
                print_check_summary(&result);
                if result.report.is_valid() { 0 } else { 1 }
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Payload(args) => match run_payload(args) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        format: match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        },
        use_env_filter: !cli.verbosity.is_present(),
    }
}
