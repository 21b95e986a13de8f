//! Byte spans into the diagram source text.

use std::ops::Range;

/// A half-open byte range into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a new span from a byte range
    pub fn new(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end.max(range.start),
        }
    }

    /// Get the start offset of the span
    pub fn start(&self) -> usize {
        self.start
    }

    /// Get the end offset of the span
    pub fn end(&self) -> usize {
        self.end
    }

    /// Get the length of the span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Build a span covering the character at a 1-based row/column position.
    ///
    /// Columns count characters, not bytes. Positions past the end of a line
    /// or of the source are clamped.
    pub fn at_position(source: &str, row: u32, col: u32) -> Self {
        let mut offset = 0;
        for line in source.split_inclusive('\n').take(row.saturating_sub(1) as usize) {
            offset += line.len();
        }

        let line = source[offset..].split('\n').next().unwrap_or_default();
        let start = line
            .char_indices()
            .nth(col.saturating_sub(1) as usize)
            .map_or(offset + line.len(), |(idx, _)| offset + idx);
        let width = source[start..].chars().next().map_or(0, char::len_utf8);

        Self::new(start..start + width)
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range)
    }
}
