//! Compare command handler.
//!
//! Evaluates two card groups independently and reports which best hand wins,
//! or a split when both are equal under the hand comparator.

use crate::error::CliError;
use crate::formatters::{format_hand, CardStyle};
use crate::validation::{ensure_disjoint, parse_hand_input};
use handrank_engine::evaluator::find_best_hand;
use handrank_engine::hand::compare_hands;
use std::cmp::Ordering;
use std::io::Write;

pub fn handle_compare_command(
    first: &str,
    second: &str,
    style: CardStyle,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let a = parse_hand_input(first)?;
    let b = parse_hand_input(second)?;
    ensure_disjoint(&a, &b)?;

    let missing = || CliError::InvalidInput("at least 5 cards are required".into());
    let best_a = find_best_hand(&a).ok_or_else(missing)?;
    let best_b = find_best_hand(&b).ok_or_else(missing)?;

    writeln!(out, "First:  {}", format_hand(&best_a, style))?;
    writeln!(out, "Second: {}", format_hand(&best_b, style))?;
    let verdict = match compare_hands(&best_a, &best_b) {
        Ordering::Greater => "First hand wins",
        Ordering::Less => "Second hand wins",
        Ordering::Equal => "Split",
    };
    writeln!(out, "Result: {}", verdict)?;
    Ok(())
}
