//! Command implementations

pub mod score;
pub mod simple;

pub use score::{ScoreError, ScoreResult, score_guess};
pub use simple::run_simple;
