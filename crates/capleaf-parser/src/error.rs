//! Error reporting for the capleaf parser.
//!
//! A diagram either parses into an element tree or fails with exactly one
//! [`ParseError`]. Each error carries an [`ErrorCode`] for searchability, the
//! byte [`Span`](crate::Span) where the XML reader gave up, and optional help
//! text.
//!
//! # Example
//!
//! ```
//! # use capleaf_parser::error::{ErrorCode, ParseError};
//! # use capleaf_parser::Span;
//! let err = ParseError::new(ErrorCode::E103, "expected `</object>`", Span::new(40..41));
//! assert_eq!(err.code(), ErrorCode::E103);
//! assert_eq!(err.to_string(), "error[E103]: expected `</object>`");
//! ```

mod error_code;
mod parse_error;

pub use error_code::ErrorCode;
pub use parse_error::ParseError;
