//! The attempt matrix and write cursor
//!
//! A grid has `max_attempts` rows of `word_len` cells. Rows above the cursor
//! are committed and scored, the cursor row is being edited, and every row
//! below it is empty.

use crate::core::{Feedback, Status};

/// A single letter slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    letter: Option<u8>,
    status: Option<Status>,
}

impl Cell {
    #[inline]
    #[must_use]
    pub const fn letter(&self) -> Option<u8> {
        self.letter
    }

    /// The entered letter as an uppercase display character
    #[must_use]
    pub fn display_char(&self) -> Option<char> {
        self.letter.map(|b| char::from(b).to_ascii_uppercase())
    }

    /// Scoring outcome, `None` until the row is committed
    #[inline]
    #[must_use]
    pub const fn status(&self) -> Option<Status> {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.letter.is_none()
    }
}

/// One attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Vec<Cell>,
    committed: bool,
}

impl Row {
    fn empty(len: usize) -> Self {
        Self {
            cells: vec![Cell::default(); len],
            committed: false,
        }
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[must_use]
    pub const fn is_committed(&self) -> bool {
        self.committed
    }

    /// True when no cell holds a letter
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }

    /// The entered letters, skipping empty cells
    #[must_use]
    pub fn letters(&self) -> Vec<u8> {
        self.cells.iter().filter_map(Cell::letter).collect()
    }

    /// The entered letters as lowercase text
    #[must_use]
    pub fn text(&self) -> String {
        self.cells
            .iter()
            .filter_map(Cell::letter)
            .map(char::from)
            .collect()
    }

    /// Scored statuses, if the row is committed
    #[must_use]
    pub fn feedback(&self) -> Option<Feedback> {
        if !self.committed {
            return None;
        }
        self.cells
            .iter()
            .map(Cell::status)
            .collect::<Option<Vec<_>>>()
            .map(Feedback::from_statuses)
    }
}

/// Write position for the next letter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub cell: usize,
}

/// The full attempt matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Row>,
    cursor: Cursor,
    word_len: usize,
}

impl Grid {
    /// Create an empty grid
    #[must_use]
    pub fn new(max_attempts: usize, word_len: usize) -> Self {
        Self {
            rows: vec![Row::empty(word_len); max_attempts],
            cursor: Cursor::default(),
            word_len,
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    /// Number of committed rows
    #[must_use]
    pub const fn attempts_used(&self) -> usize {
        self.cursor.row
    }

    /// Committed rows, oldest first
    pub fn committed_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().take(self.cursor.row)
    }

    /// The row being edited, `None` once every attempt is used
    #[must_use]
    pub fn active_row(&self) -> Option<&Row> {
        self.rows.get(self.cursor.row)
    }

    /// True when the active row exists and every cell is filled
    #[must_use]
    pub fn active_row_is_full(&self) -> bool {
        self.active_row().is_some() && self.cursor.cell == self.word_len
    }

    /// Write a letter at the cursor. Returns false if the row is full.
    pub(crate) fn write(&mut self, letter: u8) -> bool {
        let Cursor { row, cell } = self.cursor;
        if cell >= self.word_len {
            return false;
        }
        let Some(active) = self.rows.get_mut(row) else {
            return false;
        };
        active.cells[cell].letter = Some(letter);
        self.cursor.cell += 1;
        true
    }

    /// Erase the letter before the cursor. Returns false if the row is empty.
    pub(crate) fn erase(&mut self) -> bool {
        let Cursor { row, cell } = self.cursor;
        if cell == 0 {
            return false;
        }
        let Some(active) = self.rows.get_mut(row) else {
            return false;
        };
        active.cells[cell - 1] = Cell::default();
        self.cursor.cell -= 1;
        true
    }

    /// Commit the full active row with its scored statuses and advance the
    /// cursor to the next row.
    ///
    /// Returns the committed row index, or `None` if the row is incomplete or
    /// the feedback does not fit it.
    pub(crate) fn commit(&mut self, feedback: &Feedback) -> Option<usize> {
        if !self.active_row_is_full() || feedback.len() != self.word_len {
            return None;
        }
        let index = self.cursor.row;
        let active = &mut self.rows[index];
        for (cell, &status) in active.cells.iter_mut().zip(feedback.statuses()) {
            cell.status = Some(status);
        }
        active.committed = true;

        self.cursor = Cursor {
            row: index + 1,
            cell: 0,
        };
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Status::{Absent, Correct, Present};

    fn fill(grid: &mut Grid, text: &str) {
        for b in text.bytes() {
            grid.write(b);
        }
    }

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new(6, 5);
        assert_eq!(grid.rows().len(), 6);
        assert!(grid.rows().iter().all(|r| r.is_blank() && !r.is_committed()));
        assert_eq!(grid.cursor(), Cursor::default());
        assert_eq!(grid.attempts_used(), 0);
    }

    #[test]
    fn write_stops_at_row_end() {
        let mut grid = Grid::new(2, 3);
        assert!(grid.write(b'c'));
        assert!(grid.write(b'a'));
        assert!(grid.write(b't'));
        assert!(!grid.write(b's'));
        assert_eq!(grid.cursor(), Cursor { row: 0, cell: 3 });
        assert_eq!(grid.rows()[0].text(), "cat");
        assert!(grid.active_row_is_full());
    }

    #[test]
    fn erase_stops_at_row_start() {
        let mut grid = Grid::new(2, 3);
        fill(&mut grid, "ca");
        assert!(grid.erase());
        assert_eq!(grid.rows()[0].text(), "c");
        assert!(grid.erase());
        assert!(!grid.erase());
        assert!(grid.rows()[0].is_blank());
        assert_eq!(grid.cursor().cell, 0);
    }

    #[test]
    fn commit_requires_full_row() {
        let mut grid = Grid::new(2, 3);
        fill(&mut grid, "ca");
        let feedback = Feedback::from_statuses(vec![Correct, Correct, Correct]);
        assert_eq!(grid.commit(&feedback), None);
        assert_eq!(grid.cursor(), Cursor { row: 0, cell: 2 });
    }

    #[test]
    fn commit_stores_statuses_and_advances() {
        let mut grid = Grid::new(2, 3);
        fill(&mut grid, "cat");
        let feedback = Feedback::from_statuses(vec![Correct, Present, Absent]);

        assert_eq!(grid.commit(&feedback), Some(0));
        assert_eq!(grid.cursor(), Cursor { row: 1, cell: 0 });

        let row = &grid.rows()[0];
        assert!(row.is_committed());
        assert_eq!(row.feedback(), Some(feedback));
        assert_eq!(grid.committed_rows().count(), 1);
    }

    #[test]
    fn uncommitted_row_has_no_feedback() {
        let mut grid = Grid::new(2, 3);
        fill(&mut grid, "cat");
        assert_eq!(grid.rows()[0].feedback(), None);
        assert!(grid.rows()[0].cells().iter().all(|c| c.status().is_none()));
    }

    #[test]
    fn no_writes_after_last_row() {
        let mut grid = Grid::new(1, 2);
        fill(&mut grid, "ab");
        grid.commit(&Feedback::from_statuses(vec![Absent, Absent]));

        assert!(grid.active_row().is_none());
        assert!(!grid.write(b'x'));
        assert!(!grid.erase());
        assert!(!grid.active_row_is_full());
        assert_eq!(grid.cursor(), Cursor { row: 1, cell: 0 });
    }

    #[test]
    fn display_char_is_uppercase() {
        let mut grid = Grid::new(1, 1);
        grid.write(b'q');
        assert_eq!(grid.rows()[0].cells()[0].display_char(), Some('Q'));
    }
}
