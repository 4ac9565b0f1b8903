//! Formatting utilities for terminal output

use crate::core::{Feedback, Status};
use crate::game::Row;
use colored::{ColoredString, Colorize};

/// Colour one uppercase letter tile by status
#[must_use]
pub fn letter_tile(letter: char, status: Option<Status>) -> ColoredString {
    let tile = format!(" {} ", letter.to_ascii_uppercase());
    match status {
        Some(Status::Correct) => tile.black().on_green().bold(),
        Some(Status::Present) => tile.black().on_yellow().bold(),
        Some(Status::Absent) => tile.white().on_bright_black(),
        None => tile.bold(),
    }
}

/// Render a grid row as coloured letter tiles
#[must_use]
pub fn row_tiles(row: &Row) -> String {
    row.cells()
        .iter()
        .map(|cell| letter_tile(cell.display_char().unwrap_or('_'), cell.status()).to_string())
        .collect()
}

/// Render a guess with its feedback as coloured letter tiles
#[must_use]
pub fn feedback_tiles(guess: &str, feedback: &Feedback) -> String {
    guess
        .chars()
        .zip(feedback.statuses())
        .map(|(letter, &status)| letter_tile(letter, Some(status)).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_tile_is_uppercase() {
        colored::control::set_override(false);
        assert_eq!(letter_tile('q', Some(Status::Correct)).to_string(), " Q ");
        assert_eq!(letter_tile('q', None).to_string(), " Q ");
    }

    #[test]
    fn feedback_tiles_cover_each_letter() {
        colored::control::set_override(false);
        let feedback = Feedback::from_statuses(vec![Status::Absent, Status::Correct]);
        assert_eq!(feedback_tiles("ab", &feedback), " A  B ");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
