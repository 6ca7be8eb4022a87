//! Line/column positions and spans.

/// Unit in which columns are counted.
///
/// The scanner and the diagnostics filter measure columns in the same unit, so spans produced
/// for tokens and diagnostics always agree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ColumnEncoding {
    /// Unicode scalar values (`char`), the kernel's native unit.
    #[default]
    Char,
    /// UTF-16 code units, as expected by LSP clients.
    Utf16,
}

impl ColumnEncoding {
    /// Length of `text` in this unit.
    pub fn measure(self, text: &str) -> usize {
        match self {
            Self::Char => text.chars().count(),
            Self::Utf16 => text.encode_utf16().count(),
        }
    }
}

/// A 0-based line/column position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Line number (0-based).
    pub line: usize,
    /// Column (0-based), in the producer's [`ColumnEncoding`].
    pub column: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A half-open range between two positions.
///
/// Name matches never cross a line break, so spans produced by the scanner always satisfy
/// `start.line == end.line`. The type itself does not enforce that: presentation adapters
/// receive spans from elsewhere and validate them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start position (inclusive).
    pub start: Position,
    /// End position (exclusive).
    pub end: Position,
}

impl Span {
    /// Create a span from two positions.
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Create a span `[start_column, end_column)` on a single line.
    pub fn on_line(line: usize, start_column: usize, end_column: usize) -> Self {
        Self {
            start: Position::new(line, start_column),
            end: Position::new(line, end_column),
        }
    }

    /// Returns `true` if both ends are on the same line.
    pub fn is_single_line(&self) -> bool {
        self.start.line == self.end.line
    }

    /// Returns `true` if the span covers nothing (or is reversed).
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Width in columns of a single-line span; `0` for multi-line or reversed spans.
    pub fn width(&self) -> usize {
        if self.is_single_line() {
            self.end.column.saturating_sub(self.start.column)
        } else {
            0
        }
    }
}
