//! ISBN validation for both the 10- and 13-character forms.

use crate::checksum::{check_digit_isbn10, check_digit_isbn13};

/// Check whether `isbn` is a valid ISBN-10 or ISBN-13.
///
/// The input must be a clean identifier — exactly 10 characters (nine
/// digits plus a digit or 'X' check character) or exactly 13 decimal
/// digits starting with the Bookland prefix "978" or "979". Hyphens are
/// not stripped. Any malformed input simply yields `false`; this predicate
/// does not distinguish a bad checksum from a bad format.
pub fn validate(isbn: &str) -> bool {
    let computed = match isbn.len() {
        13 => {
            if !isbn.starts_with("978") && !isbn.starts_with("979") {
                return false;
            }
            check_digit_isbn13(isbn)
        }
        10 => check_digit_isbn10(isbn),
        _ => return false,
    };

    match computed {
        Ok(check) => isbn.as_bytes()[isbn.len() - 1] == check as u8,
        Err(_) => false,
    }
}
