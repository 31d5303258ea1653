//! Property-based tests for ISBN validation and conversion.

use bookland::{
    IsbnError, check_digit_isbn10, check_digit_isbn13, convert_to_isbn10, convert_to_isbn13,
    validate,
};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────────

/// Generate a valid ISBN-10 (9-digit payload plus computed check character).
fn arb_isbn10() -> impl Strategy<Value = String> {
    "[0-9]{9}".prop_map(|payload| {
        let check = check_digit_isbn10(&payload).unwrap();
        format!("{payload}{check}")
    })
}

/// Generate a valid ISBN-13 with the given Bookland prefix.
fn arb_isbn13(prefix: &'static str) -> impl Strategy<Value = String> {
    "[0-9]{9}".prop_map(move |payload| {
        let body = format!("{prefix}{payload}");
        let check = check_digit_isbn13(&body).unwrap();
        format!("{body}{check}")
    })
}

// ── Properties ──────────────────────────────────────────────────────────────

proptest! {
    /// Every generated ISBN-10 passes validation.
    #[test]
    fn generated_isbn10_validates(isbn in arb_isbn10()) {
        prop_assert!(validate(&isbn));
    }

    /// Every generated ISBN-13 passes validation, for both prefixes.
    #[test]
    fn generated_isbn13_validates(isbn978 in arb_isbn13("978"), isbn979 in arb_isbn13("979")) {
        prop_assert!(validate(&isbn978));
        prop_assert!(validate(&isbn979));
    }

    /// convert_to_isbn10(convert_to_isbn13(x)) == x for every valid ISBN-10.
    #[test]
    fn conversion_roundtrip(isbn10 in arb_isbn10()) {
        let isbn13 = convert_to_isbn13(&isbn10).unwrap();
        prop_assert!(isbn13.starts_with("978"));
        prop_assert!(validate(&isbn13));
        prop_assert_eq!(convert_to_isbn10(&isbn13).unwrap(), isbn10);
    }

    /// Converting any valid 978-prefixed ISBN-13 yields a valid ISBN-10
    /// that converts back to the same ISBN-13.
    #[test]
    fn reverse_roundtrip(isbn13 in arb_isbn13("978")) {
        let isbn10 = convert_to_isbn10(&isbn13).unwrap();
        prop_assert!(validate(&isbn10));
        prop_assert_eq!(convert_to_isbn13(&isbn10).unwrap(), isbn13);
    }

    /// 979-prefixed ISBN-13s are always rejected with UnconvertiblePrefix.
    #[test]
    fn prefix_979_never_converts(isbn13 in arb_isbn13("979")) {
        prop_assert_eq!(
            convert_to_isbn10(&isbn13),
            Err(IsbnError::UnconvertiblePrefix(isbn13))
        );
    }

    /// Corrupting any single payload digit of an ISBN-10 breaks validation.
    /// The mod-11 weighting guarantees detection of every single-digit error.
    #[test]
    fn isbn10_single_digit_corruption_detected(
        isbn in arb_isbn10(),
        pos in 0usize..9,
        delta in 1u8..10,
    ) {
        let mut bytes = isbn.into_bytes();
        bytes[pos] = b'0' + (bytes[pos] - b'0' + delta) % 10;
        let corrupted = String::from_utf8(bytes).unwrap();
        prop_assert!(!validate(&corrupted));
    }

    /// Corrupting any single payload digit of an ISBN-13 breaks validation.
    #[test]
    fn isbn13_single_digit_corruption_detected(
        isbn in arb_isbn13("978"),
        pos in 3usize..12,
        delta in 1u8..10,
    ) {
        // Positions 0..3 are skipped so the prefix stays "978"
        let mut bytes = isbn.into_bytes();
        bytes[pos] = b'0' + (bytes[pos] - b'0' + delta) % 10;
        let corrupted = String::from_utf8(bytes).unwrap();
        prop_assert!(!validate(&corrupted));
    }

    /// Any string that is not exactly 10 or 13 bytes long is invalid.
    #[test]
    fn wrong_length_never_validates(s in ".{0,20}") {
        prop_assume!(s.len() != 10 && s.len() != 13);
        prop_assert!(!validate(&s));
    }

    /// An invalid ISBN-10 never converts; the error is InvalidIsbn.
    #[test]
    fn corrupted_isbn10_never_converts(
        isbn in arb_isbn10(),
        pos in 0usize..9,
        delta in 1u8..10,
    ) {
        let mut bytes = isbn.into_bytes();
        bytes[pos] = b'0' + (bytes[pos] - b'0' + delta) % 10;
        let corrupted = String::from_utf8(bytes).unwrap();
        prop_assert_eq!(
            convert_to_isbn13(&corrupted),
            Err(IsbnError::InvalidIsbn(corrupted))
        );
    }

    /// validate never panics, whatever the input.
    #[test]
    fn validate_total_on_arbitrary_input(s in "\\PC{0,32}") {
        let _ = validate(&s);
    }
}
