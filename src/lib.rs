//! # bookland
//!
//! ISBN-10 and ISBN-13 validation, check digit computation, and
//! interconversion.
//!
//! Inputs are expected as clean 10- or 13-character strings — hyphens and
//! whitespace are not stripped, and no registry lookup is performed. An
//! ISBN-13 must carry one of the GS1 Bookland prefixes ("978" or "979");
//! only "978"-prefixed ISBN-13s have an ISBN-10 equivalent.
//!
//! ## Quick Start
//!
//! ```rust
//! use bookland::{convert_to_isbn10, convert_to_isbn13, validate};
//!
//! assert!(validate("9787532736553"));
//! assert!(validate("043942089X")); // check value 10 renders as 'X'
//!
//! assert_eq!(convert_to_isbn13("7532736555").unwrap(), "9787532736553");
//! assert_eq!(convert_to_isbn10("9787532736553").unwrap(), "7532736555");
//! ```
//!
//! For code that passes ISBNs around, the validated [`Isbn10`] and
//! [`Isbn13`] wrappers guarantee the checksum holds by construction:
//!
//! ```rust
//! use bookland::Isbn10;
//!
//! let isbn: Isbn10 = "043942089X".parse().unwrap();
//! assert_eq!(isbn.to_isbn13().as_str(), "9780439420891");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | `Serialize`/`Deserialize` for [`Isbn10`] and [`Isbn13`] |

mod checksum;
mod convert;
mod error;
mod types;
mod validate;

pub use checksum::{check_digit_isbn10, check_digit_isbn13};
pub use convert::{convert_to_isbn10, convert_to_isbn13};
pub use error::IsbnError;
pub use types::{Isbn10, Isbn13};
pub use validate::validate;
