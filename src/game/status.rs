//! Win/loss state machine
//!
//! `Playing` moves to `Won` or `Lost` exactly once; both are terminal.

use super::grid::{Grid, Row};

/// Overall game state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }

    /// Derive the state after `row` has been committed
    ///
    /// Must be called on the grid as it stands after the commit, with the
    /// row scored and the cursor already advanced.
    #[must_use]
    pub fn after_commit(grid: &Grid, row: usize) -> Self {
        let solved = grid
            .row(row)
            .and_then(Row::feedback)
            .is_some_and(|feedback| feedback.is_perfect());

        if solved {
            Self::Won
        } else if grid.cursor().row >= grid.max_attempts() {
            Self::Lost
        } else {
            Self::Playing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;
    use crate::core::Status::{Absent, Correct};

    fn commit(grid: &mut Grid, statuses: Vec<crate::core::Status>) -> usize {
        for _ in 0..grid.word_len() {
            grid.write(b'x');
        }
        grid.commit(&Feedback::from_statuses(statuses)).unwrap()
    }

    #[test]
    fn perfect_row_wins() {
        let mut grid = Grid::new(6, 2);
        let row = commit(&mut grid, vec![Correct, Correct]);
        assert_eq!(GameState::after_commit(&grid, row), GameState::Won);
    }

    #[test]
    fn miss_with_attempts_left_keeps_playing() {
        let mut grid = Grid::new(6, 2);
        let row = commit(&mut grid, vec![Correct, Absent]);
        assert_eq!(GameState::after_commit(&grid, row), GameState::Playing);
    }

    #[test]
    fn miss_on_last_row_loses() {
        let mut grid = Grid::new(2, 2);
        commit(&mut grid, vec![Absent, Absent]);
        let row = commit(&mut grid, vec![Correct, Absent]);
        assert_eq!(GameState::after_commit(&grid, row), GameState::Lost);
    }

    #[test]
    fn win_on_last_row_beats_loss() {
        let mut grid = Grid::new(1, 2);
        let row = commit(&mut grid, vec![Correct, Correct]);
        assert_eq!(GameState::after_commit(&grid, row), GameState::Won);
    }

    #[test]
    fn terminal_states() {
        assert!(!GameState::Playing.is_terminal());
        assert!(GameState::Won.is_terminal());
        assert!(GameState::Lost.is_terminal());
    }
}
