//! Exact layout: up to ten letters packed from bit 0 upward.

use super::MAX_EXACT_LEN;
use crate::letter::{decode_letter, encode_byte, LETTER_BITS, LETTER_MASK};

/// Pack a validated identifier of at most [`MAX_EXACT_LEN`] bytes
///
/// Letter `i` lands in bits `[6i, 6i + 6)`. Bits 60-63 stay clear.
pub(super) fn encode(identifier: &str) -> u64 {
    debug_assert!(identifier.len() <= MAX_EXACT_LEN);

    identifier
        .bytes()
        .enumerate()
        .fold(0, |code, (i, byte)| {
            code | u64::from(encode_byte(byte)) << (LETTER_BITS * i as u32)
        })
}

/// Unpack letters until the first zero field or the tenth letter
pub(super) fn decode(code: u64) -> String {
    (0..MAX_EXACT_LEN as u32)
        .map(|i| ((code >> (LETTER_BITS * i)) & LETTER_MASK) as u8)
        .take_while(|&letter| letter != 0)
        .map(decode_letter)
        .collect()
}
