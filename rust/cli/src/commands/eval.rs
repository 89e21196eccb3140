//! Hand evaluation command.
//!
//! This module provides the `eval` command, which parses 5 to 7 cards and
//! reports the strongest five-card hand among them: its category, the five
//! cards and the tiebreaker ranks.

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::formatters::{format_board, format_tiebreakers, CardStyle};
use crate::validation::parse_hand_input;
use handrank_engine::evaluator::find_best_hand;
use handrank_engine::record::HandSummary;
use serde::Serialize;
use std::io::Write;

/// JSON document printed by `eval --format json`.
#[derive(Debug, Serialize)]
struct EvalReport {
    input: Vec<String>,
    best: HandSummary,
}

/// Evaluates the best hand among the given cards.
///
/// # Arguments
///
/// * `cards` - Card tokens as typed; each may itself hold several cards
/// * `format` - Text or JSON output
/// * `style` - Suit rendering for text output
/// * `out` - Output stream for evaluation results
///
/// # Returns
///
/// `Result<(), CliError>`: `Err(CliError::InvalidInput)` for malformed
/// cards, duplicates, or a card count outside 5..=7.
pub fn handle_eval_command(
    cards: &[String],
    format: OutputFormat,
    style: CardStyle,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cards = parse_hand_input(&cards.join(" "))?;
    let best = find_best_hand(&cards)
        .ok_or_else(|| CliError::InvalidInput("at least 5 cards are required".into()))?;
    tracing::info!(cards = cards.len(), category = %best.category(), "evaluated input");

    match format {
        OutputFormat::Text => {
            writeln!(out, "Best hand: {}", best.category())?;
            writeln!(out, "Cards: {}", format_board(best.cards(), style))?;
            writeln!(out, "Tiebreakers: {}", format_tiebreakers(best.tiebreakers()))?;
        }
        OutputFormat::Json => {
            let report = EvalReport {
                input: cards.iter().map(ToString::to_string).collect(),
                best: HandSummary::from(&best),
            };
            let json = serde_json::to_string_pretty(&report).map_err(std::io::Error::other)?;
            writeln!(out, "{}", json)?;
        }
    }
    Ok(())
}
