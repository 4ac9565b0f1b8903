//! In-memory results for the games of one session

use super::session::RowCommit;
use super::status::GameState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of attempts used; index 0 is unused
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn new(max_attempts: usize) -> Self {
        Self {
            total_games: 0,
            games_won: 0,
            guess_distribution: vec![0; max_attempts.saturating_add(1)],
        }
    }

    /// Count a finished game; commits that leave the game playing are ignored
    pub fn record(&mut self, commit: &RowCommit) {
        match commit.state {
            GameState::Playing => {}
            GameState::Lost => self.total_games += 1,
            GameState::Won => {
                self.total_games += 1;
                self.games_won += 1;
                if let Some(slot) = self.guess_distribution.get_mut(commit.row + 1) {
                    *slot += 1;
                }
            }
        }
    }

    /// Percentage of finished games that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;

    fn commit(row: usize, state: GameState) -> RowCommit {
        RowCommit {
            row,
            feedback: Feedback::from_statuses(Vec::new()),
            state,
        }
    }

    #[test]
    fn records_wins_and_losses() {
        let mut stats = Statistics::new(6);
        stats.record(&commit(0, GameState::Playing));
        stats.record(&commit(2, GameState::Won));
        stats.record(&commit(5, GameState::Lost));

        assert_eq!(stats.total_games, 2);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution, [0, 0, 0, 1, 0, 0, 0]);
        assert!((stats.win_rate() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_win_rate_is_zero() {
        assert!(Statistics::new(6).win_rate().abs() < f64::EPSILON);
    }
}
