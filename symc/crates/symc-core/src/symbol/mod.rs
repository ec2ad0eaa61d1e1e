//! Symbol module - fixed-width 64-bit identifier codes.
//!
//! A [`Symbol`] is a `u64` surrogate for an identifier over `[0-9A-Za-z_]`.
//! Symbols are plain values: comparison, ordering and hashing all use the raw
//! code, and there is no table behind them.
//!
//! # Encoding
//!
//! | identifier length | layout | reversible |
//! |-------------------|--------|------------|
//! | 0-10              | exact: one 6-bit letter per character from bit 0 | yes |
//! | 11+               | lossy: fingerprint + first 3 and last 2 characters | no |
//!
//! Bit 63 flags a lossy code, so every lossy symbol orders after every exact
//! one. Bit 62 is reserved and always clear.
//!
//! Decoding a lossy symbol yields canonical text such as `abc_9e3779b9_yz`.
//! Feeding that text back to [`encode`] reproduces the same code.
//!
//! # Examples
//!
//! ```
//! use symc_core::symbol::{decode, encode, Symbol};
//!
//! let short = encode("hello").unwrap();
//! assert!(!short.is_lossy());
//! assert_eq!(decode(short), "hello");
//!
//! let long = encode("a_rather_long_identifier").unwrap();
//! assert!(long.is_lossy());
//! assert_eq!(encode(&decode(long)).unwrap(), long);
//!
//! assert!(short < long);
//! assert!(encode("no spaces").is_err());
//! ```

mod exact;
mod lossy;

use std::fmt;
use std::str::FromStr;

use crate::error::{SymbolError, SymbolResult};
use crate::letter;

pub use lossy::{fingerprint, is_lossy_format, LOSSY_TEXT_LEN};

/// Longest identifier that encodes exactly
pub const MAX_EXACT_LEN: usize = 10;

/// Bit 63: set when the identifier was too long to encode exactly
pub const LOSSY_FLAG: u64 = 1 << 63;

/// Bit 62: never set by any encoding path
pub const RESERVED_BIT: u64 = 1 << 62;

/// Symbol - a 64-bit encoded identifier
///
/// # Size
///
/// Exactly 8 bytes, `Copy`, and free to share across threads.
///
/// # Examples
///
/// ```
/// use symc_core::symbol::Symbol;
///
/// let sym: Symbol = "main".parse().unwrap();
/// assert_eq!(sym.to_string(), "main");
/// assert_eq!(format!("{:?}", sym), "Symbol(main)");
/// assert_eq!(Symbol::from_code(sym.code()), sym);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol {
    code: u64,
}

impl Symbol {
    /// The empty identifier, code 0
    pub const EMPTY: Symbol = Symbol { code: 0 };

    /// Encode an identifier
    ///
    /// Fails if any character lies outside `[0-9A-Za-z_]`. Identifiers up to
    /// [`MAX_EXACT_LEN`] characters encode exactly, longer ones lossily.
    pub fn new(identifier: &str) -> SymbolResult<Self> {
        letter::check(identifier)?;

        // validated text is ASCII, so bytes and characters coincide
        let code = if identifier.len() <= MAX_EXACT_LEN {
            exact::encode(identifier)
        } else {
            lossy::encode(identifier)
        };

        Ok(Self { code })
    }

    /// Wrap a raw code without any validation
    ///
    /// Accepts every bit pattern. Only codes that came out of [`Symbol::new`]
    /// (via [`Symbol::code`]) are guaranteed to decode to meaningful text;
    /// anything else still decodes, possibly to [`letter::TERMINATOR`]
    /// characters.
    #[inline]
    pub const fn from_code(code: u64) -> Self {
        Self { code }
    }

    /// The raw 64-bit code
    #[inline]
    pub const fn code(self) -> u64 {
        self.code
    }

    /// True if the identifier was too long to encode exactly and was hashed
    #[inline]
    pub const fn is_lossy(self) -> bool {
        self.code & LOSSY_FLAG != 0
    }

    /// True for the empty identifier
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.code == 0
    }

    /// Text representation; never fails
    pub fn decode(self) -> String {
        if self.is_lossy() {
            lossy::decode(self.code)
        } else {
            exact::decode(self.code)
        }
    }
}

/// Encode an identifier, see [`Symbol::new`]
#[inline]
pub fn encode(identifier: &str) -> SymbolResult<Symbol> {
    Symbol::new(identifier)
}

/// Decode a symbol, see [`Symbol::decode`]
#[inline]
pub fn decode(symbol: Symbol) -> String {
    symbol.decode()
}

/// Check an identifier without encoding it
///
/// [`Symbol::new`] validates too; this avoids building the error.
#[inline]
pub fn validate(identifier: &str) -> bool {
    letter::validate(identifier)
}

// ============================================================================
// TRAIT IMPLEMENTATIONS
// ============================================================================

impl FromStr for Symbol {
    type Err = SymbolError;

    fn from_str(s: &str) -> SymbolResult<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Symbol {
    type Error = SymbolError;

    fn try_from(s: &str) -> SymbolResult<Self> {
        Self::new(s)
    }
}

impl From<Symbol> for u64 {
    fn from(symbol: Symbol) -> u64 {
        symbol.code
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.decode())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.decode())
    }
}

static_assertions::assert_impl_all!(Symbol: Send, Sync, Copy);
static_assertions::assert_eq_size!(Symbol, u64);

#[cfg(test)]
mod tests;
