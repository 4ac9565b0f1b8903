//! Word lists and target word selection
//!
//! Provides the embedded word list compiled into the binary, file loading,
//! and the random [`WordSource`].

mod embedded;
pub mod loader;
mod source;

pub use embedded::{WORDS, WORDS_COUNT};
pub use source::{Dictionary, DictionaryError, WordSource};
