//! Wordle Grid
//!
//! A word-guessing puzzle: find the hidden word within a fixed number of
//! attempts, each attempt scored letter by letter.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_grid::core::Word;
//! use wordle_grid::game::{Game, GameConfig, GameState, Key};
//! use wordle_grid::share::{encode, Glyphs};
//!
//! let mut game = Game::new(Word::new("crane").unwrap(), &GameConfig::default());
//! for c in "crane".chars() {
//!     game.apply_key(Key::Letter(c));
//! }
//! game.apply_key(Key::Submit);
//!
//! assert_eq!(game.state(), GameState::Won);
//! assert_eq!(encode(game.grid(), &Glyphs::EMOJI), "🟩🟩🟩🟩🟩");
//! ```

// Core domain types
pub mod core;

// Grid, input and win/loss state machine
pub mod game;

// Shareable result encoding
pub mod share;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
