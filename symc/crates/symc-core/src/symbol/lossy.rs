//! Lossy layout for identifiers longer than ten characters.
//!
//! ```text
//!  63 62 61    56 55    50 49    44 43    38 37    32 31            0
//! ┌──┬──┬────────┬────────┬────────┬────────┬────────┬───────────────┐
//! │1 │0 │ last   │ last-1 │ char 2 │ char 1 │ char 0 │  fingerprint  │
//! └──┴──┴────────┴────────┴────────┴────────┴────────┴───────────────┘
//! ```
//!
//! The fingerprint hashes every character except the first three and the last
//! two. Decoding renders the canonical text `abc_1f2e3d___yz`: the kept
//! characters around the fingerprint in lowercase hex, right-padded with `_`
//! to eight slots. Encoding recognises that exact shape and parses the hex
//! back instead of hashing, so decode followed by encode is the identity.

use log::debug;
use xxhash_rust::xxh32::xxh32;

use super::{LOSSY_FLAG, MAX_EXACT_LEN};
use crate::letter::{decode_letter, encode_byte, LETTER_BITS, LETTER_MASK};

/// Length of the canonical text produced by decoding a lossy symbol
pub const LOSSY_TEXT_LEN: usize = 15;

/// Leading characters kept verbatim
const PREFIX_LEN: usize = 3;

/// Trailing characters kept verbatim
const SUFFIX_LEN: usize = 2;

/// Hex slots in the canonical text
const HEX_SLOTS: usize = 8;

/// First hex slot, right after the prefix and its `_` separator
const HEX_START: usize = PREFIX_LEN + 1;

/// Separator before the suffix
const HEX_END: usize = HEX_START + HEX_SLOTS;

const FINGERPRINT_MASK: u64 = u32::MAX as u64;

/// Bit offset of the first prefix letter
const PREFIX_SHIFT: u32 = 32;

/// Bit offset of the first suffix letter
const SUFFIX_SHIFT: u32 = PREFIX_SHIFT + LETTER_BITS * PREFIX_LEN as u32;

/// Seed for [`fingerprint`]. Changing it changes every stored lossy code.
const FINGERPRINT_SEED: u32 = 0;

/// 32-bit order-dependent fingerprint of the middle of an identifier
///
/// XXH32 with a fixed seed, so the value is the same on every target and
/// pointer width. Not cryptographic; distinct middles can collide.
pub fn fingerprint(middle: &[u8]) -> u32 {
    xxh32(middle, FINGERPRINT_SEED)
}

/// Does `text` look exactly like the decoded form of a lossy symbol?
///
/// Never fails. Case-sensitive: only `0-9a-f` count as hex digits, and short
/// hex values must be padded on the right with `_`.
///
/// # Examples
///
/// ```
/// use symc_core::symbol::is_lossy_format;
///
/// assert!(is_lossy_format("abc_1234abcd_de"));
/// assert!(is_lossy_format("abc_ff_______de"));
/// assert!(!is_lossy_format("abc_1234abcd_dex"));
/// assert!(!is_lossy_format("abc_1234aBcd_de"));
/// assert!(!is_lossy_format("abc_1_34abcd_de"));
/// ```
pub fn is_lossy_format(text: &str) -> bool {
    recover_fingerprint(text).is_some()
}

/// Parse the fingerprint out of canonical lossy text
fn recover_fingerprint(text: &str) -> Option<u32> {
    let bytes = text.as_bytes();
    if bytes.len() != LOSSY_TEXT_LEN {
        return None;
    }

    let in_alphabet = |b: &u8| encode_byte(*b) != 0;
    if !bytes[..PREFIX_LEN].iter().all(in_alphabet)
        || !bytes[HEX_END + 1..].iter().all(in_alphabet)
        || bytes[PREFIX_LEN] != b'_'
        || bytes[HEX_END] != b'_'
    {
        return None;
    }

    let slots = &bytes[HEX_START..HEX_END];
    let digits = slots
        .iter()
        .take_while(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
        .count();
    if digits == 0 || !slots[digits..].iter().all(|&b| b == b'_') {
        return None;
    }

    // eight hex digits at most, so this cannot overflow
    slots[..digits].iter().try_fold(0u32, |acc, &b| {
        char::from(b).to_digit(16).map(|digit| acc << 4 | digit)
    })
}

/// Encode a validated identifier longer than [`MAX_EXACT_LEN`]
pub(super) fn encode(identifier: &str) -> u64 {
    let bytes = identifier.as_bytes();
    let len = bytes.len();
    debug_assert!(len > MAX_EXACT_LEN);

    let fingerprint = match recover_fingerprint(identifier) {
        Some(recovered) => {
            debug!("lossy encode of {identifier:?}: recovered fingerprint {recovered:#010x}");
            recovered
        }
        None => {
            let hashed = fingerprint(&bytes[PREFIX_LEN..len - SUFFIX_LEN]);
            debug!("lossy encode of {identifier:?}: hashed fingerprint {hashed:#010x}");
            hashed
        }
    };

    let kept = bytes[..PREFIX_LEN]
        .iter()
        .chain(&bytes[len - SUFFIX_LEN..])
        .enumerate()
        .fold(0u64, |code, (i, &byte)| {
            code | u64::from(encode_byte(byte)) << (PREFIX_SHIFT + LETTER_BITS * i as u32)
        });

    LOSSY_FLAG | kept | u64::from(fingerprint)
}

/// Render the canonical 15-character text of a lossy code
pub(super) fn decode(code: u64) -> String {
    let letter = |i: usize| {
        let shift = PREFIX_SHIFT + LETTER_BITS * i as u32;
        decode_letter(((code >> shift) & LETTER_MASK) as u8)
    };

    let prefix: String = (0..PREFIX_LEN).map(&letter).collect();
    let suffix: String = (PREFIX_LEN..PREFIX_LEN + SUFFIX_LEN).map(&letter).collect();
    let fingerprint = code & FINGERPRINT_MASK;

    format!("{prefix}_{fingerprint:_<width$x}_{suffix}", width = HEX_SLOTS)
}
