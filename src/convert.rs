//! Conversion between the ISBN-10 and ISBN-13 forms.

use crate::checksum::{check_digit_isbn10, check_digit_isbn13};
use crate::error::IsbnError;
use crate::validate::validate;

/// Convert a valid ISBN-10 to its "978"-prefixed ISBN-13 form.
///
/// Only the 9-digit payload is reused; the original ISBN-10 check
/// character is discarded and a fresh ISBN-13 check digit is computed.
///
/// Fails with [`IsbnError::Length`] when the input is not exactly 10
/// characters, and with [`IsbnError::InvalidIsbn`] when it is not a valid
/// ISBN-10.
pub fn convert_to_isbn13(isbn10: &str) -> Result<String, IsbnError> {
    if isbn10.len() != 10 {
        return Err(IsbnError::Length {
            expected: 10,
            actual: isbn10.len(),
        });
    }
    if !validate(isbn10) {
        return Err(IsbnError::InvalidIsbn(isbn10.into()));
    }

    // validate() guarantees the first 9 bytes are ASCII digits
    let mut isbn13 = format!("978{}", &isbn10[..9]);
    let check = check_digit_isbn13(&isbn13)?;
    isbn13.push(check);
    Ok(isbn13)
}

/// Convert a valid "978"-prefixed ISBN-13 to its ISBN-10 form.
///
/// Fails with [`IsbnError::Length`] when the input is not exactly 13
/// characters, with [`IsbnError::UnconvertiblePrefix`] for a 979-prefixed
/// ISBN-13 (those have no ISBN-10 equivalent), and with
/// [`IsbnError::InvalidIsbn`] when the input is not a valid ISBN-13.
pub fn convert_to_isbn10(isbn13: &str) -> Result<String, IsbnError> {
    if isbn13.len() != 13 {
        return Err(IsbnError::Length {
            expected: 13,
            actual: isbn13.len(),
        });
    }
    if !isbn13.starts_with("978") {
        return Err(IsbnError::UnconvertiblePrefix(isbn13.into()));
    }
    if !validate(isbn13) {
        return Err(IsbnError::InvalidIsbn(isbn13.into()));
    }

    let payload = &isbn13[3..12];
    let check = check_digit_isbn10(payload)?;
    Ok(format!("{payload}{check}"))
}
