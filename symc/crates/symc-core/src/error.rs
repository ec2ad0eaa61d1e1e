//! Core error types for symc-core crate
//!
//! Encoding has exactly one failure mode: a character outside the symbol
//! alphabet. Decoding never fails.

use thiserror::Error;

/// Error type for symbol construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SymbolError {
    /// The identifier contains a character outside `[0-9A-Za-z_]`
    ///
    /// `position` is the byte offset of the offending character.
    #[error("bad encode: invalid character {character:?} at byte {position}")]
    InvalidCharacter { character: char, position: usize },
}

impl SymbolError {
    /// The offending character
    pub fn character(&self) -> char {
        match *self {
            Self::InvalidCharacter { character, .. } => character,
        }
    }

    /// Byte offset of the offending character within the identifier
    pub fn position(&self) -> usize {
        match *self {
            Self::InvalidCharacter { position, .. } => position,
        }
    }
}

/// Result type alias for symbol operations
pub type SymbolResult<T> = std::result::Result<T, SymbolError>;
