//! Letter codec - the 6-bit character alphabet.
//!
//! Every symbol is built from 6-bit letter codes. The alphabet is ordered so
//! that code order matches ASCII order:
//!
//! | characters | codes  |
//! |------------|--------|
//! | `0`-`9`    | 1-10   |
//! | `A`-`Z`    | 11-36  |
//! | `_`        | 37     |
//! | `a`-`z`    | 38-63  |
//!
//! Code 0 is reserved. It marks "not in the alphabet" when encoding and acts as
//! the terminator of an exact symbol when decoding.
//!
//! Both lookup tables are `const` data built at compile time.

use crate::error::{SymbolError, SymbolResult};

/// Number of bits used to encode each letter
pub const LETTER_BITS: u32 = 6;

/// Mask selecting one letter code: binary `111111`
pub const LETTER_MASK: u64 = (1 << LETTER_BITS) - 1;

/// Highest valid letter code
pub const MAX_CODE: u8 = 63;

/// Character produced when decoding code 0 or an out-of-range code
pub const TERMINATOR: char = '\0';

/// Code -> ASCII byte. Index 0 is the terminator.
const DECODE_TABLE: &[u8; 64] =
    b"\x000123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";

/// ASCII byte -> code, 0 for bytes outside the alphabet
const ENCODE_TABLE: [u8; 128] = {
    let mut table = [0u8; 128];
    let mut code = 1;
    while code < DECODE_TABLE.len() {
        table[DECODE_TABLE[code] as usize] = code as u8;
        code += 1;
    }
    table
};

/// Encode a single byte, returning 0 for anything outside the alphabet
#[inline]
pub(crate) fn encode_byte(byte: u8) -> u8 {
    ENCODE_TABLE.get(byte as usize).copied().unwrap_or(0)
}

/// Represent a single character (`[0-9A-Za-z_]`) in 6 bits
///
/// Returns zero for any other character. Never fails.
///
/// # Examples
///
/// ```
/// use symc_core::letter::encode_letter;
///
/// assert_eq!(encode_letter('0'), 1);
/// assert_eq!(encode_letter('_'), 37);
/// assert_eq!(encode_letter('z'), 63);
/// assert_eq!(encode_letter('!'), 0);
/// ```
#[inline]
pub fn encode_letter(character: char) -> u8 {
    if character.is_ascii() {
        encode_byte(character as u8)
    } else {
        0
    }
}

/// Like [`encode_letter`], but fails instead of returning 0
///
/// `position` is only used to build the error.
#[inline]
pub fn encode_letter_or_fail(character: char, position: usize) -> SymbolResult<u8> {
    match encode_letter(character) {
        0 => Err(SymbolError::InvalidCharacter {
            character,
            position,
        }),
        code => Ok(code),
    }
}

/// Return the character for a 6-bit code
///
/// Returns [`TERMINATOR`] for 0 and for codes wider than 6 bits.
///
/// # Examples
///
/// ```
/// use symc_core::letter::{decode_letter, TERMINATOR};
///
/// assert_eq!(decode_letter(11), 'A');
/// assert_eq!(decode_letter(0), TERMINATOR);
/// assert_eq!(decode_letter(64), TERMINATOR);
/// ```
#[inline]
pub fn decode_letter(code: u8) -> char {
    if code > MAX_CODE {
        return TERMINATOR;
    }
    DECODE_TABLE[code as usize] as char
}

/// Check that an identifier consists only of alphabet characters
///
/// The empty identifier is valid.
pub fn validate(identifier: &str) -> bool {
    identifier.chars().all(|c| encode_letter(c) != 0)
}

/// Like [`validate`], but reports the first offending character
pub fn check(identifier: &str) -> SymbolResult<()> {
    identifier
        .char_indices()
        .try_for_each(|(position, character)| {
            encode_letter_or_fail(character, position).map(drop)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_alphabet_ranges() {
        for (offset, c) in ('0'..='9').enumerate() {
            assert_eq!(encode_letter(c), 1 + offset as u8);
        }
        for (offset, c) in ('A'..='Z').enumerate() {
            assert_eq!(encode_letter(c), 11 + offset as u8);
        }
        assert_eq!(encode_letter('_'), 37);
        for (offset, c) in ('a'..='z').enumerate() {
            assert_eq!(encode_letter(c), 38 + offset as u8);
        }
    }

    #[test]
    fn test_gaps_are_zero() {
        for c in [':', '@', '[', '`', '{', '/', ' ', '-', '\0', '\x7f'] {
            assert_eq!(encode_letter(c), 0, "{c:?}");
        }
        assert_eq!(encode_letter('é'), 0);
        assert_eq!(encode_letter('🦀'), 0);
    }

    #[test]
    fn test_decode_inverts_encode() {
        for code in 1..=MAX_CODE {
            assert_eq!(encode_letter(decode_letter(code)), code);
        }
    }

    #[test]
    fn test_decode_out_of_range() {
        assert_eq!(decode_letter(0), TERMINATOR);
        assert_eq!(decode_letter(64), TERMINATOR);
        assert_eq!(decode_letter(u8::MAX), TERMINATOR);
    }

    #[test]
    fn test_encode_letter_or_fail() {
        assert_eq!(encode_letter_or_fail('a', 0), Ok(38));
        assert_eq!(
            encode_letter_or_fail('$', 4),
            Err(SymbolError::InvalidCharacter {
                character: '$',
                position: 4
            })
        );
    }

    #[test]
    fn test_validate() {
        assert!(validate(""));
        assert!(validate("abyz019_AZ"));
        assert!(!validate("hi there"));
        assert!(!validate("Mwahaha!!!"));
        assert!(!validate("naïve"));
    }

    #[test]
    fn test_check_reports_first_offender() {
        assert_eq!(check("hello"), Ok(()));
        let err = check("ab-c d").unwrap_err();
        assert_eq!(err.character(), '-');
        assert_eq!(err.position(), 2);
    }

    #[quickcheck]
    fn prop_validate_matches_check(s: String) -> bool {
        validate(&s) == check(&s).is_ok()
    }

    #[quickcheck]
    fn prop_codes_fit_six_bits(c: char) -> bool {
        u64::from(encode_letter(c)) <= LETTER_MASK
    }
}
