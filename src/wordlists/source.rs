//! Target word selection
//!
//! A [`WordSource`] draws the hidden word for each game uniformly at random,
//! with replacement, from a fixed [`Dictionary`].

use super::loader::words_from_slice;
use crate::core::Word;
use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;
use std::fmt;
use tracing::{debug, trace};

/// Error type for dictionary misconfiguration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// There is nothing to draw a target word from
    Empty,
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word list is empty; cannot choose a target word"),
        }
    }
}

impl std::error::Error for DictionaryError {}

/// An ordered collection of candidate target words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<Word>,
}

impl Dictionary {
    #[must_use]
    pub const fn from_words(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Build a dictionary from raw strings, skipping invalid entries
    #[must_use]
    pub fn from_slice(slice: &[&str]) -> Self {
        Self::from_words(words_from_slice(slice))
    }

    /// The built-in list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_slice(super::WORDS)
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Pick one word uniformly at random
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if there are no words.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&Word, DictionaryError> {
        self.words.choose(rng).ok_or(DictionaryError::Empty)
    }
}

/// Supplies the hidden target word, one per game
#[derive(Debug)]
pub struct WordSource<R = ThreadRng> {
    dictionary: Dictionary,
    rng: R,
}

impl WordSource<ThreadRng> {
    /// Create a word source backed by the thread-local generator
    #[must_use]
    pub fn new(dictionary: Dictionary) -> Self {
        Self::with_rng(dictionary, rand::rng())
    }
}

impl<R: Rng> WordSource<R> {
    /// Create a word source with an explicit generator (seeded in tests)
    pub const fn with_rng(dictionary: Dictionary, rng: R) -> Self {
        Self { dictionary, rng }
    }

    /// Draw a target word
    ///
    /// Successive draws are independent and may repeat.
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if the dictionary has no words.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordle_grid::wordlists::{Dictionary, WordSource};
    ///
    /// let dictionary = Dictionary::from_slice(&["crane", "slate"]);
    /// let mut source = WordSource::with_rng(dictionary, StdRng::seed_from_u64(7));
    /// let word = source.draw().unwrap();
    /// assert!(["crane", "slate"].contains(&word.text()));
    /// ```
    pub fn draw(&mut self) -> Result<Word, DictionaryError> {
        let word = self.dictionary.choose(&mut self.rng)?.clone();
        debug!(
            length = word.len(),
            pool = self.dictionary.len(),
            "drew target word"
        );
        trace!(target_word = word.text(), "target word");
        Ok(word)
    }
}
