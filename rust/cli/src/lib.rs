//! # handrank CLI Library
//!
//! Command-line front end for the `handrank_engine` hand ranking core.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let args = ["handrank", "eval", "Ah", "Ad", "Ac", "As", "Kh", "Qd", "Jc"];
//! let code = handrank_cli::run(args, &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("Four of a Kind"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `eval`: Find the best five-card hand among 5 to 7 cards
//! - `compare`: Compare the best hands of two card groups
//! - `deal`: Deal a heads-up hand and report the winner
//! - `bench`: Benchmark best-hand search
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, HandrankCli};
use commands::{
    handle_bench_command, handle_cfg_command, handle_compare_command, handle_deal_command,
    handle_eval_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["eval", "compare", "deal", "bench", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments, resolves configuration, installs logging
/// and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: [`exit_code::SUCCESS`] or [`exit_code::ERROR`]
///
/// # Example
///
/// ```
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let code = handrank_cli::run(["handrank", "deal", "--seed", "42"], &mut out, &mut err);
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HandrankCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_usage_error(&e, out, err),
    };

    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            let _ = ui::write_error(err, &CliError::from(e).to_string());
            return exit_code::ERROR;
        }
    };
    logging::init_logging(&resolved.config.log_level);
    let style = resolved.config.card_style;

    let result = match cli.cmd {
        Commands::Eval { cards, format } => handle_eval_command(&cards, format, style, out),
        Commands::Compare { first, second } => handle_compare_command(&first, &second, style, out),
        Commands::Deal { seed, format } => {
            handle_deal_command(seed.or(resolved.config.seed), format, style, out)
        }
        Commands::Bench { iterations } => handle_bench_command(
            iterations.unwrap_or(resolved.config.bench_iterations),
            out,
        ),
        Commands::Cfg => handle_cfg_command(&resolved, out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn report_usage_error(e: &clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version print to stdout and exit 0
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }

    let _ = write_usage(e, err);
    exit_code::ERROR
}

fn write_usage(e: &clap::Error, err: &mut dyn Write) -> std::io::Result<()> {
    writeln!(err, "{}", e)?;
    writeln!(err)?;
    writeln!(err, "handrank: poker hand ranking")?;
    writeln!(err, "Usage: handrank <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in COMMANDS {
        writeln!(err, "  {}", c)?;
    }
    writeln!(err, "\nFor full help, run: handrank --help")
}
