//! Deal command handler for a single heads-up showdown.
//!
//! This module provides the `deal` command, which shuffles a deck, deals two
//! hole cards to each player and a five-card board, then reports each
//! player's best hand and the winner. The same seed always yields the same
//! deal.

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::formatters::{format_board, format_cards, format_hand, CardStyle};
use handrank_engine::deck::Deck;
use handrank_engine::record::ShowdownRecord;
use handrank_engine::showdown::{Outcome, Showdown};
use std::io::Write;

/// Handle the deal command.
///
/// # Arguments
///
/// * `seed` - RNG seed; a random one is drawn when `None`
/// * `format` - Text report, or one JSON line per deal
/// * `style` - Suit rendering for text output
/// * `out` - Output stream for command results
///
/// # Returns
///
/// Returns `Ok(())` on success, or `CliError` on I/O errors.
pub fn handle_deal_command(
    seed: Option<u64>,
    format: OutputFormat,
    style: CardStyle,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let base_seed = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::new_with_seed(base_seed);
    deck.shuffle();
    let showdown = Showdown::deal(&mut deck)?;
    tracing::info!(seed = base_seed, outcome = ?showdown.outcome(), "dealt showdown");

    if format == OutputFormat::Json {
        let line = ShowdownRecord::new(&showdown, Some(base_seed))
            .to_json_line()
            .map_err(std::io::Error::other)?;
        writeln!(out, "{}", line)?;
        return Ok(());
    }

    let [best1, best2] = showdown.best_hands();
    writeln!(out, "Seed: {}", base_seed)?;
    writeln!(out, "Hole P1: {}", format_cards(showdown.hole_cards(0), style))?;
    writeln!(out, "Hole P2: {}", format_cards(showdown.hole_cards(1), style))?;
    writeln!(out, "Board: {}", format_board(showdown.board(), style))?;
    writeln!(out, "P1 best: {}", format_hand(best1, style))?;
    writeln!(out, "P2 best: {}", format_hand(best2, style))?;
    let result = match showdown.outcome() {
        Outcome::PlayerOne => "Player 1 wins",
        Outcome::PlayerTwo => "Player 2 wins",
        Outcome::Split => "Split pot",
    };
    writeln!(out, "Result: {}", result)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal(seed: Option<u64>, format: OutputFormat) -> String {
        let mut out = Vec::new();
        handle_deal_command(seed, format, CardStyle::Ascii, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_deal_command_deterministic() {
        assert_eq!(deal(Some(12345), OutputFormat::Text), deal(Some(12345), OutputFormat::Text));
    }

    #[test]
    fn test_deal_command_without_seed() {
        let output = deal(None, OutputFormat::Text);
        assert!(output.starts_with("Seed: "));
        assert!(output.contains("Result: "));
    }

    #[test]
    fn test_deal_command_output_format() {
        let output = deal(Some(999), OutputFormat::Text);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "Seed: 999");
        assert!(lines[1].starts_with("Hole P1:"));
        assert!(lines[2].starts_with("Hole P2:"));
        assert!(lines[3].starts_with("Board: ["));
        assert!(lines[4].starts_with("P1 best:"));
        assert!(lines[5].starts_with("P2 best:"));
        assert!(lines[6].starts_with("Result:"));
    }

    #[test]
    fn test_deal_command_json_line() {
        let output = deal(Some(7), OutputFormat::Json);
        assert_eq!(output.lines().count(), 1);
        let record: ShowdownRecord = serde_json::from_str(output.trim()).unwrap();
        assert_eq!(record.seed, Some(7));
        assert_eq!(record.board.len(), 5);
        assert_eq!(record.hole[0].len(), 2);
        assert_eq!(record.hands[0].cards.len(), 5);
    }
}
