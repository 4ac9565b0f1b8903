//! Per-game settings

use crate::core::ScoringRule;
use std::fmt;

/// Default number of attempts per game
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Largest number of attempts a game may be configured with
pub const MAX_ATTEMPTS_LIMIT: usize = 32;

/// Error type for invalid game settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroAttempts,
    TooManyAttempts(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroAttempts => write!(f, "A game needs at least one attempt"),
            Self::TooManyAttempts(n) => {
                write!(f, "{n} attempts is too many (at most {MAX_ATTEMPTS_LIMIT})")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Settings applied to every game of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    max_attempts: usize,
    scoring: ScoringRule,
}

impl GameConfig {
    /// # Errors
    /// Returns `ConfigError::ZeroAttempts` if `max_attempts` is zero and
    /// `ConfigError::TooManyAttempts` if it exceeds `MAX_ATTEMPTS_LIMIT`.
    pub const fn new(max_attempts: usize, scoring: ScoringRule) -> Result<Self, ConfigError> {
        if max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        if max_attempts > MAX_ATTEMPTS_LIMIT {
            return Err(ConfigError::TooManyAttempts(max_attempts));
        }
        Ok(Self {
            max_attempts,
            scoring,
        })
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub const fn scoring(&self) -> ScoringRule {
        self.scoring
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            scoring: ScoringRule::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_six_attempts_membership() {
        let config = GameConfig::default();
        assert_eq!(config.max_attempts(), 6);
        assert_eq!(config.scoring(), ScoringRule::Membership);
    }

    #[test]
    fn zero_attempts_rejected() {
        assert_eq!(
            GameConfig::new(0, ScoringRule::Membership),
            Err(ConfigError::ZeroAttempts)
        );
        assert!(GameConfig::new(1, ScoringRule::Multiplicity).is_ok());
    }

    #[test]
    fn huge_attempt_counts_rejected() {
        assert_eq!(
            GameConfig::new(usize::MAX, ScoringRule::Membership),
            Err(ConfigError::TooManyAttempts(usize::MAX))
        );
        assert_eq!(
            GameConfig::new(MAX_ATTEMPTS_LIMIT + 1, ScoringRule::Multiplicity),
            Err(ConfigError::TooManyAttempts(MAX_ATTEMPTS_LIMIT + 1))
        );
        let config = GameConfig::new(MAX_ATTEMPTS_LIMIT, ScoringRule::Membership).unwrap();
        assert_eq!(config.max_attempts(), MAX_ATTEMPTS_LIMIT);
    }
}
