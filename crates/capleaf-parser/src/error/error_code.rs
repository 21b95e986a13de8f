//! Error codes for the capleaf diagnostic system.
//!
//! All codes belong to the document phase (`E1xx`): the diagram text could not
//! be turned into an element tree.

use std::fmt;

/// Error codes for categorizing parse failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Malformed XML.
    ///
    /// The document violates XML well-formedness in a way not covered by a
    /// more specific code (invalid names, characters, comments and so on).
    E100,

    /// Unexpected end of document.
    ///
    /// The input ended while an element was still open.
    E101,

    /// Missing root element.
    ///
    /// The document contains no element at all.
    E102,

    /// Mismatched closing tag.
    ///
    /// A closing tag does not match the element it is supposed to close.
    E103,

    /// Invalid entity reference.
    ///
    /// An `&name;` reference is unknown or malformed.
    E104,

    /// Duplicate attribute.
    ///
    /// The same attribute appears twice on one element.
    E105,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E100").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            ErrorCode::E104 => "E104",
            ErrorCode::E105 => "E105",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "malformed XML",
            ErrorCode::E101 => "unexpected end of document",
            ErrorCode::E102 => "missing root element",
            ErrorCode::E103 => "mismatched closing tag",
            ErrorCode::E104 => "invalid entity reference",
            ErrorCode::E105 => "duplicate attribute",
        }
    }

    /// Returns a remediation hint, if one applies.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ErrorCode::E101 => Some("check that every opened element is closed"),
            ErrorCode::E104 => Some("escape literal ampersands in labels as `&amp;`"),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
