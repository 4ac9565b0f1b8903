//! Letter-by-letter scoring of an attempt against the target word
//!
//! Scoring runs in two passes:
//! 1. Exact matches are marked `Correct`
//! 2. Every other position is marked `Present` or `Absent`, according to the
//!    active [`ScoringRule`]

use super::Word;
use std::fmt;

/// Per-cell scoring outcome
///
/// Ordered by strength so the best status seen for a letter can be taken
/// with `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Status {
    /// Letter not in the target
    Absent,
    /// Letter in the target, wrong position
    Present,
    /// Letter in the right position
    Correct,
}

/// How the second scoring pass treats letters outside their exact position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringRule {
    /// `Present` whenever the target contains the letter anywhere.
    ///
    /// A letter guessed twice but present once is `Present` both times.
    #[default]
    Membership,
    /// `Present` only while unmatched copies of the letter remain in the
    /// target, as in the newspaper game.
    Multiplicity,
}

impl ScoringRule {
    /// Look up a rule by its command-line name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "membership" => Some(Self::Membership),
            "multiplicity" | "strict" => Some(Self::Multiplicity),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Membership => "membership",
            Self::Multiplicity => "multiplicity",
        }
    }
}

impl fmt::Display for ScoringRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Scored statuses for one attempt, in cell order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Status>);

impl Feedback {
    /// Score `guess` (lowercase ASCII letters) against `target`
    ///
    /// The result has one status per guessed letter. Positions past the end
    /// of the target can never be exact matches.
    ///
    /// # Examples
    /// ```
    /// use wordle_grid::core::{Feedback, ScoringRule, Status, Word};
    ///
    /// let target = Word::new("crane").unwrap();
    /// let feedback = Feedback::score(b"trace", &target, ScoringRule::Membership);
    ///
    /// assert_eq!(
    ///     feedback.statuses(),
    ///     &[Status::Absent, Status::Correct, Status::Correct, Status::Present, Status::Correct]
    /// );
    /// ```
    #[must_use]
    pub fn score(guess: &[u8], target: &Word, rule: ScoringRule) -> Self {
        let mut result = vec![Status::Absent; guess.len()];
        let mut available = target.letter_counts();

        // First pass: exact matches
        for (i, &letter) in guess.iter().enumerate() {
            if target.letter_at(i) == Some(letter) {
                result[i] = Status::Correct;
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: letters outside their exact position
        for (i, &letter) in guess.iter().enumerate() {
            if result[i] == Status::Correct {
                continue;
            }
            match rule {
                ScoringRule::Membership => {
                    if target.has_letter(letter) {
                        result[i] = Status::Present;
                    }
                }
                ScoringRule::Multiplicity => {
                    if let Some(count) = available.get_mut(&letter)
                        && *count > 0
                    {
                        result[i] = Status::Present;
                        *count -= 1;
                    }
                }
            }
        }

        Self(result)
    }

    /// Score one word against another
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word, rule: ScoringRule) -> Self {
        Self::score(guess.letters(), target, rule)
    }

    /// Build feedback from already-known statuses
    #[must_use]
    pub const fn from_statuses(statuses: Vec<Status>) -> Self {
        Self(statuses)
    }

    #[inline]
    #[must_use]
    pub fn statuses(&self) -> &[Status] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every position is `Correct`
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&s| s == Status::Correct)
    }

    /// Count positions with the given status
    #[must_use]
    pub fn count(&self, status: Status) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }
}
