//! Shareable result encoding
//!
//! Renders the attempted rows of a grid as lines of coloured squares, one
//! glyph per cell, without revealing any letters.

mod clipboard;
mod ports;

pub use clipboard::{ClipboardSink, ClipboardTool, DEFAULT_TOOLS};
pub use ports::{Notifier, ShareSink, WriterSink, share};

use crate::core::{Feedback, Status};
use crate::game::{Grid, Row};

/// The three glyphs used for a shared result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub correct: char,
    pub present: char,
    pub absent: char,
}

impl Glyphs {
    pub const EMOJI: Self = Self {
        correct: '🟩',
        present: '🟨',
        absent: '⬛',
    };

    pub const ASCII: Self = Self {
        correct: 'G',
        present: 'Y',
        absent: '-',
    };

    /// Look up a glyph set by its command-line name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "emoji" => Some(Self::EMOJI),
            "ascii" | "text" => Some(Self::ASCII),
            _ => None,
        }
    }

    #[must_use]
    pub const fn glyph(&self, status: Status) -> char {
        match status {
            Status::Correct => self.correct,
            Status::Present => self.present,
            Status::Absent => self.absent,
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::EMOJI
    }
}

/// Render one scored attempt
#[must_use]
pub fn encode_feedback(feedback: &Feedback, glyphs: &Glyphs) -> String {
    feedback
        .statuses()
        .iter()
        .map(|&status| glyphs.glyph(status))
        .collect()
}

fn encode_row(row: &Row, glyphs: &Glyphs) -> String {
    row.cells()
        .iter()
        .map(|cell| glyphs.glyph(cell.status().unwrap_or(Status::Absent)))
        .collect()
}

/// Encode every attempted row of a grid, one line per row
///
/// Rows without any letter are left out. Cells of a row that has letters but
/// was never committed have no status and use the absent glyph.
///
/// # Examples
/// ```
/// use wordle_grid::core::Word;
/// use wordle_grid::game::{Game, GameConfig, Key};
/// use wordle_grid::share::{encode, Glyphs};
///
/// let mut game = Game::new(Word::new("crane").unwrap(), &GameConfig::default());
/// for word in ["trace", "crane"] {
///     for c in word.chars() {
///         game.apply_key(Key::Letter(c));
///     }
///     game.apply_key(Key::Submit);
/// }
///
/// assert_eq!(encode(game.grid(), &Glyphs::ASCII), "-GGYG\nGGGGG");
/// ```
#[must_use]
pub fn encode(grid: &Grid, glyphs: &Glyphs) -> String {
    grid.rows()
        .iter()
        .filter(|row| !row.is_blank())
        .map(|row| encode_row(row, glyphs))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{Game, GameConfig, Key};

    fn play(target: &str, guesses: &[&str]) -> Game {
        let mut game = Game::new(Word::new(target).unwrap(), &GameConfig::default());
        for guess in guesses {
            for c in guess.chars() {
                game.apply_key(Key::Letter(c));
            }
            game.apply_key(Key::Submit);
        }
        game
    }

    #[test]
    fn empty_grid_encodes_to_nothing() {
        let game = play("crane", &[]);
        assert_eq!(encode(game.grid(), &Glyphs::EMOJI), "");
    }

    #[test]
    fn emoji_encoding() {
        let game = play("crane", &["trace", "crane"]);
        assert_eq!(
            encode(game.grid(), &Glyphs::EMOJI),
            "⬛🟩🟩🟨🟩\n🟩🟩🟩🟩🟩"
        );
    }

    #[test]
    fn k_rows_give_k_lines_of_word_length() {
        let guesses = ["trace", "slate", "fight", "mouse"];
        for k in 1..=guesses.len() {
            let game = play("crane", &guesses[..k]);
            let text = encode(game.grid(), &Glyphs::EMOJI);
            let lines: Vec<&str> = text.lines().collect();

            assert_eq!(lines.len(), k);
            for line in lines {
                assert_eq!(line.chars().count(), 5);
                assert!(line.chars().all(|c| ['🟩', '🟨', '⬛'].contains(&c)));
            }
        }
    }

    #[test]
    fn lost_game_has_every_row() {
        let game = play("crane", &["trace", "slate", "fight", "mouse", "plumb", "dizzy"]);
        assert_eq!(encode(game.grid(), &Glyphs::ASCII).lines().count(), 6);
    }

    #[test]
    fn partial_active_row_uses_absent_glyph() {
        let mut game = play("crane", &["trace"]);
        game.apply_key(Key::Letter('c'));
        assert_eq!(encode(game.grid(), &Glyphs::ASCII), "-GGYG\n-----");
    }

    #[test]
    fn encode_feedback_matches_row() {
        let game = play("crane", &["trace"]);
        let feedback = game.grid().rows()[0].feedback().unwrap();
        assert_eq!(encode_feedback(&feedback, &Glyphs::ASCII), "-GGYG");
    }

    #[test]
    fn glyph_names() {
        assert_eq!(Glyphs::from_name("EMOJI"), Some(Glyphs::EMOJI));
        assert_eq!(Glyphs::from_name("ascii"), Some(Glyphs::ASCII));
        assert_eq!(Glyphs::from_name("braille"), None);
    }
}
