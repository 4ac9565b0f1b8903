//! One-shot scoring command
//!
//! Scores a single guess against a given target word.

use crate::core::{Feedback, ScoringRule, Word, WordError};
use std::fmt;

/// Error type for the score command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    InvalidTarget(WordError),
    InvalidGuess(WordError),
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTarget(e) => write!(f, "Invalid target word: {e}"),
            Self::InvalidGuess(e) => write!(f, "Invalid guess: {e}"),
            Self::LengthMismatch { expected, actual } => {
                write!(f, "Guess must have {expected} letters, got {actual}")
            }
        }
    }
}

impl std::error::Error for ScoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidTarget(e) | Self::InvalidGuess(e) => Some(e),
            Self::LengthMismatch { .. } => None,
        }
    }
}

/// Result of scoring a guess
pub struct ScoreResult {
    pub target: String,
    pub guess: String,
    pub rule: ScoringRule,
    pub feedback: Feedback,
}

/// Score `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is invalid or their lengths differ.
pub fn score_guess(
    target: &str,
    guess: &str,
    rule: ScoringRule,
) -> Result<ScoreResult, ScoreError> {
    let target = Word::new(target).map_err(ScoreError::InvalidTarget)?;
    let guess = Word::new(guess).map_err(ScoreError::InvalidGuess)?;

    if guess.len() != target.len() {
        return Err(ScoreError::LengthMismatch {
            expected: target.len(),
            actual: guess.len(),
        });
    }

    let feedback = Feedback::calculate(&guess, &target, rule);
    Ok(ScoreResult {
        target: target.text().to_string(),
        guess: guess.text().to_string(),
        rule,
        feedback,
    })
}
