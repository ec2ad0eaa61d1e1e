//! Tests for the symbol module.

use super::*;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

const ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";

const ALPHABET_STR: &str = "abcdefghijklmnopqrstuvwxyz0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Identifier drawn from the symbol alphabet, 0 to 39 characters
#[derive(Clone, Debug)]
struct Ident(String);

impl Arbitrary for Ident {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 40;
        let text = (0..len)
            .filter_map(|_| g.choose(ALPHABET).map(|&b| char::from(b)))
            .collect();
        Ident(text)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let text = self.0.clone();
        Box::new((0..text.len()).rev().map(move |len| Ident(text[..len].to_string())))
    }
}

fn letters(codes: &[u64]) -> u64 {
    codes
        .iter()
        .enumerate()
        .fold(0, |acc, (i, code)| acc | code << (6 * i))
}

// ============================================================================
// Exact Encoding
// ============================================================================

#[test]
fn test_round_trip_short() {
    for ident in ["", "hello", "abyz019_AZ", "0123456789", "_", "Z"] {
        let sym = encode(ident).unwrap();
        assert!(!sym.is_lossy(), "{ident}");
        assert_eq!(decode(sym), ident);
    }
}

#[test]
fn test_known_codes() {
    // h=45 e=42 l=49 o=52
    assert_eq!(encode("hello").unwrap().code(), letters(&[45, 42, 49, 49, 52]));
    assert_eq!(
        encode("0123456789").unwrap().code(),
        letters(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10])
    );
    assert_eq!(encode("_").unwrap().code(), 37);
}

#[test]
fn test_empty_identifier() {
    let sym = encode("").unwrap();
    assert_eq!(sym.code(), 0);
    assert_eq!(sym, Symbol::EMPTY);
    assert!(sym.is_empty());
    assert!(!sym.is_lossy());
    assert_eq!(sym.decode(), "");
}

#[test]
fn test_ten_characters_is_exact_eleven_is_lossy() {
    assert!(!encode("abcdefghij").unwrap().is_lossy());
    assert!(encode("abcdefghijk").unwrap().is_lossy());
}

// ============================================================================
// Lossy Encoding
// ============================================================================

#[test]
fn test_lossy_flags() {
    for ident in [
        "0123456789A",
        "abcdefghijklmnopqrstuvwxyz",
        "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
        ALPHABET_STR,
    ] {
        let first = encode(ident).unwrap();
        let second = encode(ident).unwrap();
        assert_eq!(first, second, "unreliable encoding of {ident}");
        assert!(first.is_lossy());
        assert_ne!(first.code() & LOSSY_FLAG, 0);
        assert_eq!(first.code() & RESERVED_BIT, 0);
    }
}

#[test]
fn test_lossy_keeps_edges() {
    let text = encode(ALPHABET_STR).unwrap().decode();
    assert_eq!(text.len(), LOSSY_TEXT_LEN);
    assert!(text.starts_with("abc_"));
    assert!(text.ends_with("_YZ"));
    assert!(is_lossy_format(&text));
}

#[test]
fn test_lossy_fingerprint_hashes_middle() {
    let ident = "abcdefghijklmnop";
    let sym = encode(ident).unwrap();
    assert_eq!(sym.code() as u32, fingerprint(b"defghijklmn"));
}

#[test]
fn test_lossy_field_layout() {
    // 'a'..='e' -> 38..=42
    let sym = encode("abc_1234abcd_de").unwrap();
    let expected = LOSSY_FLAG | 0x1234_abcd | 38 << 32 | 39 << 38 | 40 << 44 | 41 << 50 | 42 << 56;
    assert_eq!(sym.code(), expected);
    assert_eq!(sym.code(), 0xaaa6_89e6_1234_abcd);
}

#[test]
fn test_lossy_known_code() {
    // 'o' -> 52, 'p' -> 53
    let sym = encode("abcdefghijklmnop").unwrap();
    let expected = LOSSY_FLAG | 0xae2f_f070 | 38 << 32 | 39 << 38 | 40 << 44 | 52 << 50 | 53 << 56;
    assert_eq!(sym.code(), expected);
    assert_eq!(sym.code(), 0xb5d2_89e6_ae2f_f070);
    assert_eq!(sym.decode(), "abc_ae2ff070_op");
}

#[test]
fn test_decode_then_encode_is_identity() {
    let sym = encode(ALPHABET_STR).unwrap();
    let text = sym.decode();
    assert_eq!(encode(&text).unwrap(), sym);
    assert_eq!(encode(&text).unwrap().decode(), text);
}

#[test]
fn test_canonical_text_recovers_fingerprint() {
    let sym = encode("abc_1234abcd_de").unwrap();
    assert!(sym.is_lossy());
    assert_eq!(sym.code() as u32, 0x1234_abcd);
    assert_eq!(sym.decode(), "abc_1234abcd_de");

    let short = encode("abc_ab_______de").unwrap();
    assert_eq!(short.code() as u32, 0xab);
    assert_eq!(short.decode(), "abc_ab_______de");
}

#[test]
fn test_near_miss_text_is_hashed() {
    for ident in ["abc_1234abcd_dex", "abc_1_34abcd_de", "abc_1234aBcd_de"] {
        assert!(!is_lossy_format(ident), "{ident}");
        let sym = encode(ident).unwrap();
        let middle = &ident.as_bytes()[3..ident.len() - 2];
        assert_eq!(sym.code() as u32, fingerprint(middle), "{ident}");
    }
}

#[test]
fn test_lossy_orders_after_exact() {
    let exact = encode("zzzzzzzzzz").unwrap();
    let lossy = encode("00000000000").unwrap();
    assert!(exact < lossy);
    assert!(Symbol::EMPTY < exact);
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_invalid_characters() {
    for ident in ["!@#$#%", "hi there", "Mwahaha!!!", "long_identifier_with space"] {
        assert!(!validate(ident));
        assert!(matches!(
            encode(ident),
            Err(SymbolError::InvalidCharacter { .. })
        ));
    }
}

#[test]
fn test_invalid_character_position() {
    let err = encode("hi there").unwrap_err();
    assert_eq!(err.character(), ' ');
    assert_eq!(err.position(), 2);

    let err = encode("abcdefghijklmn-op").unwrap_err();
    assert_eq!(err.character(), '-');
    assert_eq!(err.position(), 14);
}

#[test]
fn test_non_ascii_rejected() {
    assert!(encode("café").is_err());
    assert!(encode("identifier_ünicode").is_err());
}

// ============================================================================
// Raw Codes
// ============================================================================

#[test]
fn test_from_code_accepts_any_bits() {
    let sym = Symbol::from_code(u64::MAX);
    assert!(sym.is_lossy());
    assert_eq!(sym.decode(), "zzz_ffffffff_zz");

    let sym = Symbol::from_code(RESERVED_BIT);
    assert!(!sym.is_lossy());
    assert_eq!(sym.decode(), "");
}

#[test]
fn test_lossy_raw_code_with_empty_letters() {
    let text = Symbol::from_code(LOSSY_FLAG).decode();
    assert_eq!(text, "\0\0\0_0________\0\0");
    assert!(encode(&text).is_err());
}

#[test]
fn test_conversions() {
    let sym: Symbol = "main".parse().unwrap();
    assert_eq!(Symbol::try_from("main").unwrap(), sym);
    assert_eq!(u64::from(sym), sym.code());
    assert_eq!(Symbol::from_code(sym.code()), sym);
    assert_eq!(sym.to_string(), "main");
    assert_eq!(format!("{:?}", sym), "Symbol(main)");
    assert!("no way".parse::<Symbol>().is_err());
}

// ============================================================================
// Properties
// ============================================================================

#[quickcheck]
fn prop_short_round_trip(ident: Ident) -> bool {
    let sym = encode(&ident.0).unwrap();
    if ident.0.len() <= MAX_EXACT_LEN {
        !sym.is_lossy() && sym.decode() == ident.0
    } else {
        sym.is_lossy()
    }
}

#[quickcheck]
fn prop_reserved_bit_clear(ident: Ident) -> bool {
    encode(&ident.0).unwrap().code() & RESERVED_BIT == 0
}

#[quickcheck]
fn prop_deterministic(ident: Ident) -> bool {
    encode(&ident.0).unwrap() == encode(&ident.0).unwrap()
}

#[quickcheck]
fn prop_reencode_is_identity(ident: Ident) -> bool {
    let sym = encode(&ident.0).unwrap();
    encode(&sym.decode()) == Ok(sym)
}

#[quickcheck]
fn prop_decode_never_panics(code: u64) -> bool {
    let text = Symbol::from_code(code).decode();
    text.len() <= LOSSY_TEXT_LEN
}

#[quickcheck]
fn prop_order_follows_code(a: u64, b: u64) -> bool {
    Symbol::from_code(a).cmp(&Symbol::from_code(b)) == a.cmp(&b)
}
