//! Command-line argument definitions.
//!
//! The clap derive types here describe every `handrank` subcommand; dispatch
//! lives in [`crate::run`].

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "handrank",
    version,
    about = "Poker hand ranking: classify, compare and deal hands"
)]
pub struct HandrankCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the best five-card hand among 5 to 7 cards
    Eval {
        /// Cards such as `Ah Kd 10c`, separated by spaces or commas
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Compare the best hands of two card groups
    Compare {
        /// First group of 5 to 7 cards
        #[arg(long)]
        first: String,
        /// Second group of 5 to 7 cards
        #[arg(long)]
        second: String,
    },
    /// Deal a heads-up hand from a shuffled deck and show the winner
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Benchmark best-hand search over seven-card deals
    Bench {
        #[arg(long)]
        iterations: Option<u32>,
    },
    /// Display current configuration settings
    Cfg,
}

/// Output format shared by commands that can emit JSON.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
