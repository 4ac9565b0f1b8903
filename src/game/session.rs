//! Game state transitions
//!
//! [`Game`] owns one puzzle: target word, grid and state. Every change goes
//! through [`Game::apply_key`], which performs the edit and, on a commit,
//! scores the row and re-derives the state before returning. [`Session`]
//! owns a game together with the word source used to start new ones.

use super::config::GameConfig;
use super::grid::{Cursor, Grid, Row};
use super::hints::KeyboardHints;
use super::key::Key;
use super::status::GameState;
use crate::core::{Feedback, ScoringRule, Word};
use crate::wordlists::{DictionaryError, WordSource};
use rand::Rng;
use rand::rngs::ThreadRng;
use tracing::{debug, info, instrument};

/// Emitted when a row is committed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowCommit {
    /// Index of the committed row
    pub row: usize,
    pub feedback: Feedback,
    /// State derived right after the commit
    pub state: GameState,
}

/// What a key did to the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Nothing changed
    Ignored,
    Written,
    Cleared,
    Committed(RowCommit),
}

/// Read model handed to renderers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub rows: Vec<Row>,
    pub cursor: Cursor,
    pub state: GameState,
    pub hints: KeyboardHints,
}

/// One puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    target: Word,
    grid: Grid,
    state: GameState,
    scoring: ScoringRule,
}

impl Game {
    /// Start a game with an empty grid sized to the target word
    #[must_use]
    pub fn new(target: Word, config: &GameConfig) -> Self {
        let grid = Grid::new(config.max_attempts(), target.len());
        Self {
            target,
            grid,
            state: GameState::Playing,
            scoring: config.scoring(),
        }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.grid.cursor()
    }

    /// A consistent copy of everything a renderer needs
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            rows: self.grid.rows().to_vec(),
            cursor: self.grid.cursor(),
            state: self.state,
            hints: KeyboardHints::from_grid(&self.grid),
        }
    }

    /// Apply one key
    ///
    /// Keys that cannot apply (game over, clearing an empty row, submitting
    /// an incomplete row, typing into a full row, non-letter characters) are
    /// ignored.
    ///
    /// # Examples
    /// ```
    /// use wordle_grid::core::Word;
    /// use wordle_grid::game::{Game, GameConfig, GameState, Key, KeyOutcome};
    ///
    /// let mut game = Game::new(Word::new("cat").unwrap(), &GameConfig::default());
    /// for c in "cat".chars() {
    ///     game.apply_key(Key::Letter(c));
    /// }
    /// let KeyOutcome::Committed(commit) = game.apply_key(Key::Submit) else {
    ///     panic!("row should commit");
    /// };
    /// assert_eq!(commit.state, GameState::Won);
    /// assert_eq!(game.apply_key(Key::Letter('x')), KeyOutcome::Ignored);
    /// ```
    pub fn apply_key(&mut self, key: Key) -> KeyOutcome {
        if self.state.is_terminal() {
            return KeyOutcome::Ignored;
        }

        match key {
            Key::Clear => {
                if self.grid.erase() {
                    KeyOutcome::Cleared
                } else {
                    KeyOutcome::Ignored
                }
            }
            Key::Submit => self.commit(),
            Key::Letter(_) => match key.letter_byte() {
                Some(letter) if self.grid.write(letter) => KeyOutcome::Written,
                _ => KeyOutcome::Ignored,
            },
        }
    }

    #[instrument(level = "debug", skip(self), fields(row = self.grid.cursor().row))]
    fn commit(&mut self) -> KeyOutcome {
        let Some(active) = self.grid.active_row() else {
            return KeyOutcome::Ignored;
        };
        if !self.grid.active_row_is_full() {
            return KeyOutcome::Ignored;
        }

        let feedback = Feedback::score(&active.letters(), &self.target, self.scoring);
        let Some(row) = self.grid.commit(&feedback) else {
            return KeyOutcome::Ignored;
        };

        // The grid is fully committed before the state is derived from it
        self.state = GameState::after_commit(&self.grid, row);

        debug!(
            row,
            correct = feedback.count(crate::core::Status::Correct),
            "row committed"
        );
        if self.state.is_terminal() {
            info!(state = ?self.state, attempts = row + 1, "game over");
        }

        KeyOutcome::Committed(RowCommit {
            row,
            feedback,
            state: self.state,
        })
    }
}

/// Pure transition: the game after `key`
///
/// # Examples
/// ```
/// use wordle_grid::core::Word;
/// use wordle_grid::game::{apply, Game, GameConfig, Key};
///
/// let game = Game::new(Word::new("cat").unwrap(), &GameConfig::default());
/// let next = apply(game.clone(), Key::Letter('c'));
/// assert_eq!(next.cursor().cell, 1);
/// assert_eq!(game.cursor().cell, 0);
/// ```
#[must_use]
pub fn apply(mut game: Game, key: Key) -> Game {
    game.apply_key(key);
    game
}

/// An owned game plus the word source used to restart it
#[derive(Debug)]
pub struct Session<R = ThreadRng> {
    source: WordSource<R>,
    config: GameConfig,
    game: Game,
    games_started: usize,
}

impl<R: Rng> Session<R> {
    /// Draw the first target word and start a game
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if the source has no words.
    pub fn new(mut source: WordSource<R>, config: GameConfig) -> Result<Self, DictionaryError> {
        let target = source.draw()?;
        info!(
            max_attempts = config.max_attempts(),
            scoring = %config.scoring(),
            "session started"
        );
        Ok(Self {
            source,
            config,
            game: Game::new(target, &config),
            games_started: 1,
        })
    }

    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Number of games started, including the current one
    #[must_use]
    pub const fn games_started(&self) -> usize {
        self.games_started
    }

    /// Apply one key to the current game
    pub fn apply_key(&mut self, key: Key) -> KeyOutcome {
        self.game.apply_key(key)
    }

    /// Discard the current game and start over with a fresh target word
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if the source has no words; the
    /// current game is left untouched in that case.
    pub fn restart(&mut self) -> Result<(), DictionaryError> {
        let target = self.source.draw()?;
        self.game = Game::new(target, &self.config);
        self.games_started += 1;
        info!(game = self.games_started, "game restarted");
        Ok(())
    }
}
