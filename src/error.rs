use thiserror::Error;

/// Errors returned by ISBN checksum computation and conversion.
///
/// [`validate`](crate::validate) never surfaces these — it collapses every
/// failure to `false`. The conversion functions propagate the specific
/// variant so callers can tell a bad length from a bad checksum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum IsbnError {
    /// Input does not have the required fixed length.
    #[error("expected {expected} characters, got {actual}")]
    Length { expected: usize, actual: usize },

    /// Checksum mismatch or bad Bookland prefix.
    #[error("not a valid ISBN: '{0}'")]
    InvalidIsbn(String),

    /// 979-prefixed ISBN-13s have no ISBN-10 form.
    #[error("ISBN-13 '{0}' is not convertible to ISBN-10")]
    UnconvertiblePrefix(String),

    /// Non-digit character encountered during checksum computation.
    #[error("invalid digit character '{0}'")]
    InvalidDigit(char),
}
