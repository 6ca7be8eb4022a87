//! LSP positions and ranges.
//!
//! LSP counts characters in UTF-16 code units. Spans converted here are expected to come from a
//! `proze-core` engine configured with [`proze_core::ColumnEncoding::Utf16`]; the conversion
//! itself only changes the integer width.

use proze_core::{Position, Span};
use serde_json::{Value, json};

fn clamp_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// LSP Position (based on UTF-16 code units)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LspPosition {
    /// Line number (0-based)
    pub line: u32,
    /// Character offset (UTF-16 code units, 0-based)
    pub character: u32,
}

impl LspPosition {
    /// Create a new LSP position.
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }

    /// Parse a `{ "line": .., "character": .. }` object.
    pub fn from_value(value: &Value) -> Option<Self> {
        Some(Self {
            line: value.get("line")?.as_u64()? as u32,
            character: value.get("character")?.as_u64()? as u32,
        })
    }

    /// Encode as a JSON object.
    pub fn to_value(self) -> Value {
        json!({ "line": self.line, "character": self.character })
    }
}

impl From<Position> for LspPosition {
    fn from(pos: Position) -> Self {
        Self::new(clamp_u32(pos.line), clamp_u32(pos.column))
    }
}

/// LSP Range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LspRange {
    /// Range start position (inclusive).
    pub start: LspPosition,
    /// Range end position (exclusive).
    pub end: LspPosition,
}

impl LspRange {
    /// Create a new LSP range.
    pub fn new(start: LspPosition, end: LspPosition) -> Self {
        Self { start, end }
    }

    /// Parse a `{ "start": .., "end": .. }` object.
    pub fn from_value(value: &Value) -> Option<Self> {
        Some(Self {
            start: LspPosition::from_value(value.get("start")?)?,
            end: LspPosition::from_value(value.get("end")?)?,
        })
    }

    /// Encode as a JSON object.
    pub fn to_value(self) -> Value {
        json!({ "start": self.start.to_value(), "end": self.end.to_value() })
    }
}

impl From<Span> for LspRange {
    fn from(span: Span) -> Self {
        Self::new(span.start.into(), span.end.into())
    }
}
