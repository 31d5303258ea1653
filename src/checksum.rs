//! Check digit computation for both ISBN forms.
//!
//! ISBN-13 weights the 12 payload digits alternately 1 and 3; ISBN-10
//! weights position `i` by `10 - i` and works modulo 11, so the check
//! value 10 renders as the letter 'X'.

use crate::error::IsbnError;

/// Compute the ISBN-13 check digit over the first 12 characters of `payload`.
///
/// Returns the check character (`'0'..='9'`). Fails with
/// [`IsbnError::InvalidDigit`] on any non-decimal character and with
/// [`IsbnError::Length`] when the payload is shorter than 12 characters.
pub fn check_digit_isbn13(payload: &str) -> Result<char, IsbnError> {
    let bytes = payload.as_bytes();
    if bytes.len() < 12 {
        return Err(IsbnError::Length {
            expected: 12,
            actual: bytes.len(),
        });
    }

    let mut sum = 0u32;
    for (idx, &byte) in bytes[..12].iter().enumerate() {
        let weight = if idx % 2 == 0 { 1 } else { 3 };
        sum += digit_value(byte)? * weight;
    }

    Ok(digit_char((10 - sum % 10) % 10))
}

/// Compute the ISBN-10 check character over the first 9 characters of `payload`.
///
/// Returns a decimal digit or `'X'` for the check value 10. Fails with
/// [`IsbnError::InvalidDigit`] on any non-decimal character and with
/// [`IsbnError::Length`] when the payload is shorter than 9 characters.
pub fn check_digit_isbn10(payload: &str) -> Result<char, IsbnError> {
    let bytes = payload.as_bytes();
    if bytes.len() < 9 {
        return Err(IsbnError::Length {
            expected: 9,
            actual: bytes.len(),
        });
    }

    let mut sum = 0u32;
    for (idx, &byte) in bytes[..9].iter().enumerate() {
        sum += digit_value(byte)? * (10 - idx as u32);
    }

    match (11 - sum % 11) % 11 {
        10 => Ok('X'),
        value => Ok(digit_char(value)),
    }
}

fn digit_value(byte: u8) -> Result<u32, IsbnError> {
    (byte as char)
        .to_digit(10)
        .ok_or(IsbnError::InvalidDigit(byte as char))
}

/// `value` must be in 0..=9.
fn digit_char(value: u32) -> char {
    (b'0' + value as u8) as char
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isbn13_check_digit() {
        assert_eq!(check_digit_isbn13("978753273655").unwrap(), '3');
        assert_eq!(check_digit_isbn13("978043942089").unwrap(), '1');
    }

    #[test]
    fn isbn13_ignores_trailing_characters() {
        // Only the first 12 characters participate in the sum
        assert_eq!(check_digit_isbn13("9787532736559").unwrap(), '3');
    }

    #[test]
    fn isbn10_check_digit() {
        assert_eq!(check_digit_isbn10("753273655").unwrap(), '5');
    }

    #[test]
    fn isbn10_check_value_ten_is_x() {
        assert_eq!(check_digit_isbn10("043942089").unwrap(), 'X');
    }

    #[test]
    fn non_digit_rejected() {
        assert_eq!(
            check_digit_isbn13("97875327365a"),
            Err(IsbnError::InvalidDigit('a'))
        );
        assert_eq!(
            check_digit_isbn10("75327x655"),
            Err(IsbnError::InvalidDigit('x'))
        );
    }

    #[test]
    fn short_payload_rejected() {
        assert_eq!(
            check_digit_isbn13("978"),
            Err(IsbnError::Length {
                expected: 12,
                actual: 3
            })
        );
        assert_eq!(
            check_digit_isbn10(""),
            Err(IsbnError::Length {
                expected: 9,
                actual: 0
            })
        );
    }
}
