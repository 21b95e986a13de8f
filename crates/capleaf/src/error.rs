//! Error types for capleaf operations.
//!
//! This module provides the main error type [`CapleafError`] which wraps
//! the error conditions of extraction, emission and Markdown updates.

use std::{io, path::PathBuf};

use thiserror::Error;

use capleaf_parser::error::ParseError;

use crate::{fs::WriteError, markdown::MarkdownError};

/// The main error type for capleaf operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the diagram source next to the structured
/// [`ParseError`], so callers can render a labelled snippet of the offending
/// XML.
#[derive(Debug, Error)]
pub enum CapleafError {
    #[error("Error reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{err}")]
    Parse {
        err: ParseError,
        src: String,
        origin: String,
    },

    #[error(transparent)]
    Write(#[from] WriteError),

    #[error(transparent)]
    Markdown(#[from] MarkdownError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CapleafError {
    /// Create a new `Parse` error with the associated source and its origin
    /// (usually the file path).
    pub fn new_parse_error(err: ParseError, src: impl Into<String>, origin: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
            origin: origin.into(),
        }
    }

    /// Returns `true` for failures to obtain a label list: unreadable input
    /// or malformed XML.
    pub fn is_parse_failure(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::Parse { .. })
    }
}

#[cfg(test)]
mod tests {
    use capleaf_parser::{Span, error::ErrorCode};

    use super::*;

    #[test]
    fn test_parse_failure_classification() {
        let read = CapleafError::Read {
            path: PathBuf::from("missing.xml"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        let parse = CapleafError::new_parse_error(
            ParseError::new(ErrorCode::E100, "bad", Span::default()),
            "<",
            "input.xml",
        );
        let config = CapleafError::Config("bad name".to_string());

        assert!(read.is_parse_failure());
        assert!(parse.is_parse_failure());
        assert!(!config.is_parse_failure());
    }

    #[test]
    fn test_display() {
        let read = CapleafError::Read {
            path: PathBuf::from("missing.xml"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(read.to_string(), "Error reading missing.xml: not found");

        let parse = CapleafError::new_parse_error(
            ParseError::new(ErrorCode::E103, "unexpected close tag", Span::default()),
            "",
            "<input>",
        );
        assert_eq!(parse.to_string(), "error[E103]: unexpected close tag");
    }
}
