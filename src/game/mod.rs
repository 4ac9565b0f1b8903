//! The guess-grid engine
//!
//! Tracks attempts, applies key input, scores committed rows and decides
//! win or loss. All state lives in owned values; there is no global game.

mod config;
mod grid;
mod hints;
mod key;
mod session;
mod stats;
mod status;

pub use config::{ConfigError, DEFAULT_MAX_ATTEMPTS, GameConfig, MAX_ATTEMPTS_LIMIT};
pub use grid::{Cell, Cursor, Grid, Row};
pub use hints::KeyboardHints;
pub use key::Key;
pub use session::{Game, KeyOutcome, RowCommit, Session, Snapshot, apply};
pub use stats::Statistics;
pub use status::GameState;
