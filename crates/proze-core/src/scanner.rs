//! Occurrence scanning.
//!
//! The scanner locates declared names in a document by exact, case-sensitive substring search,
//! line by line. There is no word-boundary check: `"Gary"` matches inside `"Garyson"`.
//!
//! Only the **first** occurrence of a given name on a given line is reported. Later
//! occurrences on the same line are not found. Diagnostics and highlighting both depend on
//! this rule, so it must change in both places at once (see [`crate::diagnostics`]).
//!
//! Results are grouped by name (catalogue order), then by line (document order). Consumers
//! that need position order sort the output themselves.

use crate::lines::lines;
use crate::names::{Category, NamedEntity, TokenKind};
use crate::span::{ColumnEncoding, Span};

/// One located match of a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Occurrence {
    /// Where the name was found (single line, half-open).
    pub span: Span,
    /// The matched entity's category.
    pub category: Category,
}

impl Occurrence {
    /// Presentation kind of this occurrence.
    pub fn kind(&self) -> TokenKind {
        self.category.token_kind()
    }
}

/// An occurrence mapped to its presentation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassifiedToken {
    /// Token span.
    pub span: Span,
    /// Presentation kind.
    pub kind: TokenKind,
}

impl From<Occurrence> for ClassifiedToken {
    fn from(occurrence: Occurrence) -> Self {
        Self {
            span: occurrence.span,
            kind: occurrence.kind(),
        }
    }
}

/// Stateless name scanner.
///
/// The only configuration is the unit columns are measured in. Scanning is a pure function of
/// `(text, names)`: scanning the same input twice yields identical output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OccurrenceScanner {
    encoding: ColumnEncoding,
}

impl OccurrenceScanner {
    /// Create a scanner that reports columns in `encoding`.
    pub fn new(encoding: ColumnEncoding) -> Self {
        Self { encoding }
    }

    /// The column unit used for spans.
    pub fn encoding(&self) -> ColumnEncoding {
        self.encoding
    }

    /// Find every occurrence of every name in `text`.
    ///
    /// Returns an empty list for empty text or an empty catalogue.
    pub fn scan(&self, text: &str, names: &[NamedEntity]) -> Vec<Occurrence> {
        if text.is_empty() || names.is_empty() {
            return Vec::new();
        }

        let lines: Vec<&str> = lines(text).collect();
        let mut out = Vec::new();
        for entity in names {
            if !entity.is_matchable() {
                continue;
            }
            for (line_no, line) in lines.iter().enumerate() {
                if let Some(span) = self.first_match(line_no, line, &entity.text) {
                    out.push(Occurrence {
                        span,
                        category: entity.category,
                    });
                }
            }
        }

        out
    }

    /// Scan and map every occurrence to its presentation kind.
    pub fn classify(&self, text: &str, names: &[NamedEntity]) -> Vec<ClassifiedToken> {
        self.scan(text, names)
            .into_iter()
            .map(ClassifiedToken::from)
            .collect()
    }

    /// Span of the first occurrence of `needle` in `line`, if any.
    pub(crate) fn first_match(&self, line_no: usize, line: &str, needle: &str) -> Option<Span> {
        if needle.is_empty() {
            return None;
        }

        let byte = line.find(needle)?;
        let start = self.encoding.measure(&line[..byte]);
        let end = start + self.encoding.measure(needle);
        Some(Span::on_line(line_no, start, end))
    }
}

/// Scan with the default scanner (columns in `char`s).
pub fn scan(text: &str, names: &[NamedEntity]) -> Vec<Occurrence> {
    OccurrenceScanner::default().scan(text, names)
}
