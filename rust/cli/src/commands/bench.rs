//! Bench command handler for best-hand search performance.
//!
//! This module provides the `bench` command, which repeatedly deals seven
//! cards from a deck shuffled with seed 1 and runs the best-hand search on
//! each deal, then reports the iteration count and total execution time.

use crate::error::CliError;
use handrank_engine::deck::Deck;
use handrank_engine::evaluator::find_best_hand;
use std::io::Write;

const CARDS_PER_DEAL: usize = 7;

/// Handle the bench command.
///
/// # Arguments
///
/// * `iterations` - Number of seven-card deals to evaluate
/// * `out` - Output stream for benchmark results
///
/// # Returns
///
/// Returns `Ok(())` on success, or `CliError` on I/O errors or when
/// `iterations` is zero.
pub fn handle_bench_command(iterations: u32, out: &mut dyn Write) -> Result<(), CliError> {
    if iterations == 0 {
        return Err(CliError::InvalidInput("iterations must be >0".into()));
    }
    let start = std::time::Instant::now();
    let mut cnt = 0u64;
    let mut deck = Deck::new_with_seed(1);
    deck.shuffle();
    for _ in 0..iterations {
        if deck.remaining() < CARDS_PER_DEAL {
            deck.shuffle();
        }
        let cards = deck.deal(CARDS_PER_DEAL)?;
        std::hint::black_box(find_best_hand(&cards));
        cnt += 1;
    }
    let dur = start.elapsed();
    tracing::debug!(iterations = cnt, elapsed = ?dur, "benchmark finished");
    writeln!(out, "Benchmark: {} iters in {:?}", cnt, dur)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bench_command_reports_iterations() {
        let mut out = Vec::new();
        handle_bench_command(200, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("Benchmark: 200 iters in "));
    }

    #[test]
    fn test_bench_command_reshuffles_past_deck_end() {
        // 52 / 7 deals fit in one deck; the rest require reshuffles
        let mut out = Vec::new();
        handle_bench_command(30, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("30 iters"));
    }

    #[test]
    fn test_bench_command_includes_timing() {
        let mut out = Vec::new();
        handle_bench_command(5, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(
            output.trim_end().ends_with('s'),
            "Output should include timing units"
        );
    }

    #[test]
    fn test_bench_command_rejects_zero() {
        let mut out = Vec::new();
        assert!(matches!(
            handle_bench_command(0, &mut out),
            Err(CliError::InvalidInput(_))
        ));
    }
}
