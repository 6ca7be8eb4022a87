//! Semantic tokens for name highlighting.
//!
//! Classified name tokens are encoded in LSP's relative 5-tuple form
//! `(deltaLine, deltaStart, length, tokenType, tokenModifiers)` against a fixed legend:
//!
//! | kind        | token type  | modifiers    |
//! |-------------|-------------|--------------|
//! | character   | `keyword`   |              |
//! | place       | `variable`  |              |
//! | thing       | `regexp`    |              |
//! | invalid     | `decorator` | `deprecated` |
//!
//! A malformed token (multi-line, empty, reversed) is rejected by
//! [`SemanticTokensBuilder::push`]; [`encode_semantic_tokens`] logs and drops it and keeps
//! encoding the rest.

use proze_core::{ClassifiedToken, TokenKind};
use serde_json::{Value, json};
use thiserror::Error;

/// The modifier set on invalid-name tokens.
pub const DEPRECATED_MODIFIER: &str = "deprecated";

const DEPRECATED_MODIFIER_BIT: u32 = 1 << 0;

/// LSP token type name for a presentation kind.
pub fn token_type_name(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Keyword => "keyword",
        TokenKind::Variable => "variable",
        TokenKind::Regexp => "regexp",
        TokenKind::Decorator => "decorator",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Semantic tokens legend advertised in the server capabilities.
pub struct SemanticTokensLegend {
    /// Token type names, indexed by `tokenType` in the encoded data.
    pub token_types: Vec<String>,
    /// Token modifier names, indexed by bit position in `tokenModifiers`.
    pub token_modifiers: Vec<String>,
}

impl SemanticTokensLegend {
    /// The legend matching [`TokenKind`] indices.
    pub fn proze() -> Self {
        Self {
            token_types: TokenKind::ALL
                .iter()
                .map(|kind| token_type_name(*kind).to_string())
                .collect(),
            token_modifiers: vec![DEPRECATED_MODIFIER.to_string()],
        }
    }

    /// Encode as an LSP `SemanticTokensLegend` object.
    pub fn to_value(&self) -> Value {
        json!({
            "tokenTypes": self.token_types,
            "tokenModifiers": self.token_modifiers,
        })
    }
}

impl Default for SemanticTokensLegend {
    fn default() -> Self {
        Self::proze()
    }
}

/// Reasons a token cannot be encoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemanticTokensError {
    /// Semantic tokens must start and end on the same line.
    #[error("semantic token spans lines {start_line}..={end_line}")]
    MultiLine {
        /// Start line.
        start_line: usize,
        /// End line.
        end_line: usize,
    },
    /// The end column precedes the start column.
    #[error("semantic token on line {line} ends before it starts ({start}..{end})")]
    Reversed {
        /// Line.
        line: usize,
        /// Start column.
        start: usize,
        /// End column.
        end: usize,
    },
    /// Zero-width tokens are not representable.
    #[error("semantic token on line {line} at column {column} is empty")]
    Empty {
        /// Line.
        line: usize,
        /// Column.
        column: usize,
    },
    /// A coordinate does not fit in `u32`.
    #[error("semantic token coordinate out of range")]
    Overflow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AbsoluteToken {
    line: u32,
    start: u32,
    length: u32,
    token_type: u32,
    token_modifiers: u32,
}

fn to_u32(value: usize) -> Result<u32, SemanticTokensError> {
    u32::try_from(value).map_err(|_| SemanticTokensError::Overflow)
}

/// Collects tokens in any order and encodes them sorted by position.
#[derive(Debug, Clone, Default)]
pub struct SemanticTokensBuilder {
    tokens: Vec<AbsoluteToken>,
}

impl SemanticTokensBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of accepted tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if no token has been accepted.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Validate and add a token.
    pub fn push(&mut self, token: &ClassifiedToken) -> Result<(), SemanticTokensError> {
        let span = token.span;
        if !span.is_single_line() {
            return Err(SemanticTokensError::MultiLine {
                start_line: span.start.line,
                end_line: span.end.line,
            });
        }
        if span.end.column < span.start.column {
            return Err(SemanticTokensError::Reversed {
                line: span.start.line,
                start: span.start.column,
                end: span.end.column,
            });
        }
        if span.end.column == span.start.column {
            return Err(SemanticTokensError::Empty {
                line: span.start.line,
                column: span.start.column,
            });
        }

        let token_modifiers = if token.kind.is_deprecated() {
            DEPRECATED_MODIFIER_BIT
        } else {
            0
        };
        self.tokens.push(AbsoluteToken {
            line: to_u32(span.start.line)?,
            start: to_u32(span.start.column)?,
            length: to_u32(span.width())?,
            token_type: token.kind.index(),
            token_modifiers,
        });
        Ok(())
    }

    /// Encode the accepted tokens as LSP `data`.
    pub fn build(mut self) -> Vec<u32> {
        self.tokens.sort_by_key(|t| (t.line, t.start));

        let mut data = Vec::with_capacity(self.tokens.len() * 5);
        let mut prev_line = 0u32;
        let mut prev_start = 0u32;
        for token in &self.tokens {
            let delta_line = token.line - prev_line;
            let delta_start = if delta_line == 0 {
                token.start - prev_start
            } else {
                token.start
            };
            data.extend_from_slice(&[
                delta_line,
                delta_start,
                token.length,
                token.token_type,
                token.token_modifiers,
            ]);
            prev_line = token.line;
            prev_start = token.start;
        }
        data
    }
}

/// Encode classified tokens, dropping (and logging) any malformed token.
pub fn encode_semantic_tokens<'a, I>(tokens: I) -> Vec<u32>
where
    I: IntoIterator<Item = &'a ClassifiedToken>,
{
    let mut builder = SemanticTokensBuilder::new();
    for token in tokens {
        if let Err(err) = builder.push(token) {
            tracing::warn!(%err, kind = ?token.kind, "dropping malformed semantic token");
        }
    }
    builder.build()
}

/// Wrap encoded data as an LSP `SemanticTokens` result.
pub fn semantic_tokens_result(data: Vec<u32>) -> Value {
    json!({ "data": data })
}
