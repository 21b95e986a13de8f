//! Error adapter for converting CapleafError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Parse errors are
//! rendered with a labelled snippet of the offending XML.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, NamedSource, SourceSpan};

use capleaf::{CapleafError, ParseError};

/// Adapter for a [`ParseError`] together with the diagram it came from.
pub struct ParseErrorAdapter<'a> {
    /// The wrapped parse error
    err: &'a ParseError,
    /// Source code for displaying snippets
    src: NamedSource<String>,
}

impl<'a> ParseErrorAdapter<'a> {
    /// Create a new parse error adapter.
    pub fn new(err: &'a ParseError, src: &str, origin: &str) -> Self {
        Self {
            err,
            src: NamedSource::new(origin, src.to_string()),
        }
    }
}

impl fmt::Debug for ParseErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseErrorAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for ParseErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.err.message())
    }
}

impl std::error::Error for ParseErrorAdapter<'_> {}

impl MietteDiagnostic for ParseErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.err.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.err
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_primary_with_span(
            Some(self.err.code().description().to_string()),
            span_to_miette(self.err.span()),
        );
        Some(Box::new(std::iter::once(label)))
    }
}

/// Adapter for non-parse [`CapleafError`] variants.
///
/// This adapter handles errors that don't carry source locations, such as
/// read failures, write failures, Markdown failures and configuration errors.
pub struct ErrorAdapter<'a>(pub &'a CapleafError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            CapleafError::Read { .. } => "capleaf::read",
            CapleafError::Parse { .. } => "capleaf::parse",
            CapleafError::Write(_) => "capleaf::write",
            CapleafError::Markdown(_) => "capleaf::markdown",
            CapleafError::Config(_) => "capleaf::config",
            CapleafError::Io(_) => "capleaf::io",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            CapleafError::Markdown(capleaf::markdown::MarkdownError::SectionNotFound { .. }) => {
                "add a `## Valid Capabilities` heading or a <!--capabilities:start--> / <!--capabilities:end--> block"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }
}

/// A reportable error that can be rendered by miette.
///
/// This enum wraps either a parse diagnostic or a non-diagnostic error,
/// providing a uniform interface for error rendering.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A parse error with source location information.
    Diagnostic(ParseErrorAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic(_) => None,
            Reportable::Error(e) => std::error::Error::source(e),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Diagnostic(d) => d.source_code(),
            Reportable::Error(_) => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Diagnostic(d) => d.labels(),
            Reportable::Error(_) => None,
        }
    }
}

/// Convert a capleaf [`Span`](capleaf_parser::Span) to a miette [`SourceSpan`].
fn span_to_miette(span: capleaf_parser::Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Convert a [`CapleafError`] into a reportable error.
pub fn to_reportable(err: &CapleafError) -> Reportable<'_> {
    match err {
        CapleafError::Parse { err, src, origin } => {
            Reportable::Diagnostic(ParseErrorAdapter::new(err, src, origin))
        }
        _ => Reportable::Error(ErrorAdapter(err)),
    }
}

#[cfg(test)]
mod tests {
    use std::{io, path::PathBuf};

    use capleaf_parser::{Span, error::ErrorCode};

    use super::*;

    #[test]
    fn test_parse_error_has_label_and_source() {
        let parse_err = ParseError::new(ErrorCode::E103, "unexpected close tag", Span::new(9..17));
        let err = CapleafError::new_parse_error(parse_err, "<mxfile></diagram>", "input.xml");

        let reportable = to_reportable(&err);
        assert_eq!(reportable.to_string(), "unexpected close tag");
        assert_eq!(
            reportable.code().map(|c| c.to_string()),
            Some("E103".to_string())
        );
        assert!(reportable.source_code().is_some());

        let labels: Vec<_> = reportable.labels().expect("labelled").collect();
        assert_eq!(labels.len(), 1);
        assert!(labels[0].primary());
        assert_eq!(labels[0].offset(), 9);
        assert_eq!(labels[0].len(), 8);
    }

    #[test]
    fn test_non_parse_error_codes() {
        let read = CapleafError::Read {
            path: PathBuf::from("missing.xml"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        let config = CapleafError::Config("bad".to_string());

        for (err, expected) in [(&read, "capleaf::read"), (&config, "capleaf::config")] {
            let reportable = to_reportable(err);
            assert!(matches!(reportable, Reportable::Error(_)));
            assert_eq!(reportable.code().map(|c| c.to_string()), Some(expected.to_string()));
            assert!(reportable.labels().is_none());
        }
    }

    #[test]
    fn test_renders_with_graphical_handler() {
        let parse_err = ParseError::new(ErrorCode::E100, "malformed", Span::new(0..1));
        let err = CapleafError::new_parse_error(parse_err, "<", "broken.xml");

        let mut out = String::new();
        miette::GraphicalReportHandler::new()
            .render_report(&mut out, &to_reportable(&err))
            .expect("Writing to String buffer is infallible");

        assert!(out.contains("malformed"));
        assert!(out.contains("broken.xml"));
    }
}
