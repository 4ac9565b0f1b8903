//! Core domain types for the puzzle
//!
//! This module contains the target word and the scoring rules. All types
//! here are pure and testable without any game state.

mod feedback;
mod word;

pub use feedback::{Feedback, ScoringRule, Status};
pub use word::{Word, WordError};
