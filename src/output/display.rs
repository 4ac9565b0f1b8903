//! Display functions for the line-based front ends

use super::formatters::{create_progress_bar, feedback_tiles, row_tiles};
use super::messages::{Message, MessageStyle};
use crate::commands::ScoreResult;
use crate::game::{Game, GameState};
use crate::share::{Glyphs, encode_feedback};
use colored::Colorize;
use std::io::{self, Write};

/// Print the committed rows of a game, followed by the active row while
/// the game is still going
///
/// # Errors
/// Returns an error if writing fails.
pub fn print_board<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    writeln!(out)?;
    for row in game.grid().committed_rows() {
        writeln!(out, "  {}", row_tiles(row))?;
    }
    if game.state() == GameState::Playing {
        let remaining = game.grid().max_attempts() - game.grid().attempts_used();
        writeln!(
            out,
            "  {}",
            format!(
                "{} {} left",
                remaining,
                if remaining == 1 { "attempt" } else { "attempts" }
            )
            .bright_black()
        )?;
    }
    writeln!(out)
}

/// Print messages in their style colours
///
/// # Errors
/// Returns an error if writing fails.
pub fn print_messages<W: Write>(out: &mut W, messages: &[Message]) -> io::Result<()> {
    for message in messages {
        let text = match message.style {
            MessageStyle::Info => message.text.normal(),
            MessageStyle::Success => message.text.green().bold(),
            MessageStyle::Error => message.text.red(),
        };
        writeln!(out, "{text}")?;
    }
    Ok(())
}

/// Print the win distribution of a session
///
/// # Errors
/// Returns an error if writing fails.
pub fn print_distribution<W: Write>(out: &mut W, distribution: &[usize]) -> io::Result<()> {
    let most = distribution.iter().copied().max().unwrap_or(0);
    writeln!(out, "{}", "Guess distribution:".bright_cyan().bold())?;
    for (attempts, &count) in distribution.iter().enumerate().skip(1) {
        let bar = create_progress_bar(count as f64, most as f64, 20);
        writeln!(out, "  {attempts}: {} {count}", bar.green())?;
    }
    Ok(())
}

/// Print the result of scoring one guess
pub fn print_score_result(result: &ScoreResult, glyphs: &Glyphs) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Target: {}   Rule: {}",
        result.target.to_uppercase().bright_yellow().bold(),
        result.rule
    );
    println!("{}", "─".repeat(40).cyan());
    println!(
        "\n  {}  {}",
        feedback_tiles(&result.guess, &result.feedback),
        encode_feedback(&result.feedback, glyphs)
    );
    println!();
    if result.feedback.is_perfect() {
        println!("{}", "✅ Exact match!".green().bold());
    }
}
