//! Invalid-name diagnostics.
//!
//! Names declared under [`Category::Invalid`] must not appear in a manuscript. This module turns
//! each appearance into an error-severity [`DiagnosticRecord`].
//!
//! The filter walks the document's lines directly instead of reusing token output, but applies
//! the same rules as [`crate::scanner`]: exact substring search, half-open
//! `[column, column + len)` spans, and only the first match of a name per line.

use crate::document::DocumentId;
use crate::lines::lines;
use crate::names::{Category, NamedEntity};
use crate::scanner::OccurrenceScanner;
use crate::span::Span;

/// Message prefix for invalid-name diagnostics; the name follows after `": "`.
pub const INVALID_NAME_MESSAGE: &str = "Invalid character name found";

/// Diagnostic severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticSeverity {
    /// Error diagnostics.
    Error,
    /// Warning diagnostics.
    Warning,
    /// Informational diagnostics.
    Information,
    /// Hint diagnostics.
    Hint,
}

/// A single diagnostic for one document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiagnosticRecord {
    /// The document the diagnostic belongs to.
    pub document: DocumentId,
    /// Human-readable message.
    pub message: String,
    /// Location of the offending text.
    pub span: Span,
    /// Severity (always [`DiagnosticSeverity::Error`] for invalid names).
    pub severity: DiagnosticSeverity,
}

impl DiagnosticRecord {
    /// Build the diagnostic reported for an invalid name.
    pub fn invalid_name(document: DocumentId, name: &str, span: Span) -> Self {
        Self {
            document,
            message: format!("{INVALID_NAME_MESSAGE}: {name}"),
            span,
            severity: DiagnosticSeverity::Error,
        }
    }
}

impl OccurrenceScanner {
    /// Diagnostics for every invalid name found in `text`.
    ///
    /// Records are ordered by line, then by catalogue order within a line. Entities in other
    /// categories, and empty names, are ignored.
    pub fn filter_invalid(
        &self,
        document: &DocumentId,
        text: &str,
        names: &[NamedEntity],
    ) -> Vec<DiagnosticRecord> {
        let invalid: Vec<&NamedEntity> = names
            .iter()
            .filter(|entity| entity.category == Category::Invalid && entity.is_matchable())
            .collect();
        if invalid.is_empty() || text.is_empty() {
            return Vec::new();
        }

        let mut records = Vec::new();
        for (line_no, line) in lines(text).enumerate() {
            for entity in &invalid {
                if let Some(span) = self.first_match(line_no, line, &entity.text) {
                    records.push(DiagnosticRecord::invalid_name(
                        document.clone(),
                        &entity.text,
                        span,
                    ));
                }
            }
        }

        records
    }
}

/// Filter with the default scanner (columns in `char`s).
pub fn filter_invalid(
    document: &DocumentId,
    text: &str,
    names: &[NamedEntity],
) -> Vec<DiagnosticRecord> {
    OccurrenceScanner::default().filter_invalid(document, text, names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_record_per_line() {
        let doc = DocumentId::new("file:///chapter1.proze");
        let names = vec![NamedEntity::invalid("Gary")];
        let records = filter_invalid(&doc, "Gary left.\nGary returned.", &names);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].span, Span::on_line(0, 0, 4));
        assert_eq!(records[1].span, Span::on_line(1, 0, 4));
        for record in &records {
            assert_eq!(record.message, "Invalid character name found: Gary");
            assert_eq!(record.severity, DiagnosticSeverity::Error);
            assert_eq!(record.document, doc);
        }
    }

    #[test]
    fn test_other_categories_are_ignored() {
        let doc = DocumentId::new("a");
        let names = vec![
            NamedEntity::character("Gary"),
            NamedEntity::place("Gary"),
            NamedEntity::thing("Gary"),
        ];
        assert!(filter_invalid(&doc, "Gary", &names).is_empty());
    }

    #[test]
    fn test_first_match_only_and_line_order() {
        let doc = DocumentId::new("a");
        let names = vec![NamedEntity::invalid("x"), NamedEntity::invalid("Gary")];
        let records = filter_invalid(&doc, "Gary Gary x\r\nx x", &names);

        let spans: Vec<Span> = records.iter().map(|r| r.span).collect();
        assert_eq!(
            spans,
            vec![
                Span::on_line(0, 10, 11),
                Span::on_line(0, 0, 4),
                Span::on_line(1, 0, 1),
            ]
        );
    }

    #[test]
    fn test_empty_and_guarded_inputs() {
        let doc = DocumentId::new("a");
        assert!(filter_invalid(&doc, "", &[NamedEntity::invalid("Gary")]).is_empty());
        assert!(filter_invalid(&doc, "Gary", &[]).is_empty());
        assert!(filter_invalid(&doc, "anything at all", &[NamedEntity::invalid("")]).is_empty());
    }
}
