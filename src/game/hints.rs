//! Per-letter keyboard colouring
//!
//! Summarises every committed row into the best status seen for each letter,
//! for renderers that colour an on-screen keyboard.

use super::grid::Grid;
use crate::core::Status;
use rustc_hash::FxHashMap;

/// Best known status for each letter guessed so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardHints {
    best: FxHashMap<u8, Status>,
}

impl KeyboardHints {
    /// Collect hints from the committed rows of a grid
    #[must_use]
    pub fn from_grid(grid: &Grid) -> Self {
        let mut best: FxHashMap<u8, Status> = FxHashMap::default();
        for row in grid.committed_rows() {
            for cell in row.cells() {
                if let (Some(letter), Some(status)) = (cell.letter(), cell.status()) {
                    best.entry(letter)
                        .and_modify(|seen| *seen = (*seen).max(status))
                        .or_insert(status);
                }
            }
        }
        Self { best }
    }

    /// Best status for a letter, `None` if it has not been tried
    #[must_use]
    pub fn status_of(&self, letter: char) -> Option<Status> {
        if !letter.is_ascii_alphabetic() {
            return None;
        }
        self.best.get(&(letter.to_ascii_lowercase() as u8)).copied()
    }
}
