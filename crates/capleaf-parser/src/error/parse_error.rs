//! The ParseError type for diagram parse failures.

use std::fmt;

use crate::{error::ErrorCode, span::Span};

/// Error type for turning diagram text into an element tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    code: ErrorCode,
    message: String,
    span: Span,
    help: Option<String>,
}

impl ParseError {
    /// Create a new parse error. Help text defaults to the code's hint.
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        Self {
            code,
            message: message.into(),
            span,
            help: code.help().map(str::to_string),
        }
    }

    /// Replace the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Build an error from an XML reader failure over `source`.
    pub(crate) fn from_xml(err: &roxmltree::Error, source: &str) -> Self {
        use roxmltree::Error as XmlError;

        let code = match err {
            XmlError::UnexpectedEndOfStream | XmlError::UnclosedRootNode => ErrorCode::E101,
            XmlError::NoRootNode => ErrorCode::E102,
            XmlError::UnexpectedCloseTag(..) => ErrorCode::E103,
            XmlError::UnknownEntityReference(..) | XmlError::MalformedEntityReference(..) => {
                ErrorCode::E104
            }
            XmlError::DuplicatedAttribute(..) => ErrorCode::E105,
            _ => ErrorCode::E100,
        };
        let pos = err.pos();

        Self::new(code, err.to_string(), Span::at_position(source, pos.row, pos.col))
    }

    /// The error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Where in the source the failure was detected.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Optional remediation hint.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::new(ErrorCode::E100, "invalid name token", Span::new(0..1));
        assert_eq!(err.to_string(), "error[E100]: invalid name token");
    }

    #[test]
    fn test_parse_error_default_help_from_code() {
        let err = ParseError::new(ErrorCode::E104, "unknown entity", Span::default());
        assert!(err.help().is_some_and(|h| h.contains("&amp;")));
    }

    #[test]
    fn test_parse_error_with_help() {
        let err = ParseError::new(ErrorCode::E100, "bad", Span::default()).with_help("try again");
        assert_eq!(err.help(), Some("try again"));
    }

    #[test]
    fn test_from_xml_mismatched_tag() {
        let source = "<mxfile><object></mxfile>";
        let xml_err = roxmltree::Document::parse(source).unwrap_err();
        let err = ParseError::from_xml(&xml_err, source);

        assert_eq!(err.code(), ErrorCode::E103);
        assert!(err.span().start() < source.len());
    }

    #[test]
    fn test_from_xml_truncated_document() {
        let source = "<mxfile><diagram>";
        let xml_err = roxmltree::Document::parse(source).unwrap_err();
        let err = ParseError::from_xml(&xml_err, source);

        assert_eq!(err.code(), ErrorCode::E101);
    }
}
