//! Core types for sitefl

use serde::{Deserialize, Serialize};

/// Represents a position in the source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Line number (0-indexed)
    pub line: usize,
    /// Column number in bytes (0-indexed)
    pub column: usize,
    /// Byte offset from start
    pub offset: usize,
}

impl Position {
    /// Locate a byte offset inside `source`.
    ///
    /// Offsets past the end are clamped to the end of the source.
    ///
    /// # Example
    ///
    /// ```
    /// use sitefl_core::Position;
    /// let pos = Position::locate(b"ab\ncd", 4);
    /// assert_eq!((pos.line, pos.column), (1, 1));
    /// ```
    pub fn locate(source: &[u8], offset: usize) -> Self {
        let offset = offset.min(source.len());
        let before = &source[..offset];
        let line = before.iter().filter(|&&b| b == b'\n').count();
        let line_start = before
            .iter()
            .rposition(|&b| b == b'\n')
            .map(|i| i + 1)
            .unwrap_or(0);
        Self {
            line,
            column: offset - line_start,
            offset,
        }
    }
}

/// Displays as 1-indexed `line:column`, the way editors count.
impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Represents a span in the source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start position
    pub start: Position,
    /// End position
    pub end: Position,
}

impl Span {
    /// Create a new span from start and end positions
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// A non-fatal problem found while compiling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Warning {
    /// An included file could not be opened or read; its code block was
    /// emitted empty.
    ResourceUnavailable {
        /// Path as written in the source
        path: String,
        /// Span of the path in the source
        span: Span,
        /// The underlying I/O error message
        reason: String,
    },
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::ResourceUnavailable { path, span, reason } => {
                write!(f, "unable to open file '{}' at {}: {}", path, span.start, reason)
            }
        }
    }
}
