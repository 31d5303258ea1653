//! Validated ISBN value types.
//!
//! [`Isbn10`] and [`Isbn13`] wrap strings that have already passed
//! checksum validation, so downstream code can hold and convert them
//! without re-checking.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::convert::{convert_to_isbn10, convert_to_isbn13};
use crate::error::IsbnError;
use crate::validate::validate;

/// A checksum-validated ISBN-10.
///
/// Construct via [`FromStr`]: `"043942089X".parse::<Isbn10>()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Isbn10(String);

/// A checksum-validated ISBN-13 with a "978" or "979" Bookland prefix.
///
/// Construct via [`FromStr`]: `"9787532736553".parse::<Isbn13>()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Isbn13(String);

impl Isbn10 {
    /// The identifier as a 10-character string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the owned string.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Convert to the "978"-prefixed ISBN-13 form.
    ///
    /// Infallible: the value was validated on construction.
    pub fn to_isbn13(&self) -> Isbn13 {
        match convert_to_isbn13(&self.0) {
            Ok(s) => Isbn13(s),
            Err(_) => unreachable!("validated ISBN-10 failed conversion"),
        }
    }
}

impl Isbn13 {
    /// The identifier as a 13-character string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the owned string.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Convert to the ISBN-10 form.
    ///
    /// Fails with [`IsbnError::UnconvertiblePrefix`] for 979-prefixed
    /// values, which have no ISBN-10 equivalent.
    pub fn to_isbn10(&self) -> Result<Isbn10, IsbnError> {
        convert_to_isbn10(&self.0).map(Isbn10)
    }
}

impl FromStr for Isbn10 {
    type Err = IsbnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 10 {
            return Err(IsbnError::Length {
                expected: 10,
                actual: s.len(),
            });
        }
        if !validate(s) {
            return Err(IsbnError::InvalidIsbn(s.into()));
        }
        Ok(Self(s.to_owned()))
    }
}

impl FromStr for Isbn13 {
    type Err = IsbnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 13 {
            return Err(IsbnError::Length {
                expected: 13,
                actual: s.len(),
            });
        }
        if !validate(s) {
            return Err(IsbnError::InvalidIsbn(s.into()));
        }
        Ok(Self(s.to_owned()))
    }
}

impl fmt::Display for Isbn10 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Isbn13 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Isbn10 {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Isbn13 {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Serialize as the plain string; deserialize through FromStr so an
// invalid identifier can never enter through serde.

#[cfg(feature = "serde")]
impl Serialize for Isbn10 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Isbn10 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Isbn13 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Isbn13 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
