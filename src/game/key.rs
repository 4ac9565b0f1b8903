//! Key events accepted by the game

/// One input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Enter a letter at the cursor
    Letter(char),
    /// Erase the previous letter of the active row
    Clear,
    /// Commit the active row
    Submit,
}

impl Key {
    /// Map a typed character to a letter key
    ///
    /// Only ASCII letters map to a key; they are lowercased.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        c.is_ascii_alphabetic().then(|| Self::Letter(c.to_ascii_lowercase()))
    }

    /// The lowercase byte a letter key writes, `None` for other keys or
    /// characters outside the alphabet
    #[must_use]
    pub(crate) fn letter_byte(self) -> Option<u8> {
        match self {
            Self::Letter(c) if c.is_ascii_alphabetic() => Some(c.to_ascii_lowercase() as u8),
            _ => None,
        }
    }
}
