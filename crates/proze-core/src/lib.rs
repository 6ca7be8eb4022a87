#![warn(missing_docs)]
//! Proze Core - name annotation and invalid-name diagnostics for prose manuscripts
//!
//! # Overview
//!
//! `proze-core` annotates manuscripts with the proper names (characters, places, things) a
//! project declares, and flags names that the project marks as invalid. It is headless: the
//! host supplies document text and the project's name catalogue, and receives classified
//! tokens and diagnostics back.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  NameEngine (DocumentEvents)                │  ← Host notifications
//! ├─────────────────────────────────────────────┤
//! │  DiagnosticsTracker + DiagnosticsStore      │  ← Per-document diagnostics
//! ├─────────────────────────────────────────────┤
//! │  OccurrenceScanner / invalid-name filter    │  ← Matching
//! ├─────────────────────────────────────────────┤
//! │  Catalogue (NamedEntity, Category)          │  ← Configuration input
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use proze_core::{DocumentEvents, DocumentId, NameEngine, NamedEntity, DiagnosticRecord};
//!
//! let names = vec![NamedEntity::character("Jessica"), NamedEntity::invalid("Gary")];
//! let mut published = Vec::new();
//! let publisher = |doc: &DocumentId, records: &[DiagnosticRecord]| {
//!     published.push((doc.clone(), records.len()));
//! };
//!
//! let mut engine = NameEngine::new(names, publisher);
//! let doc = DocumentId::new("file:///chapter1.proze");
//! engine.document_opened(doc.clone(), "Jessica met Gary.".to_string());
//!
//! assert_eq!(engine.diagnostics(&doc)[0].message, "Invalid character name found: Gary");
//! assert_eq!(engine.provide_tokens(&doc).len(), 2);
//! ```
//!
//! # Matching Rules
//!
//! - exact, case-sensitive substring search; no word boundaries
//! - lines end at `\n`, `\r\n` or `\r`; matches never span lines
//! - only the first occurrence of a name per line is reported
//! - empty names never match
//!
//! # Module Description
//!
//! - [`names`] - categories, named entities, configuration name lists
//! - [`lines`] - line splitting
//! - [`span`] - positions, spans, column encodings
//! - [`scanner`] - occurrence scanning and classification
//! - [`diagnostics`] - invalid-name diagnostics
//! - [`catalogue`] - catalogue trait and per-project catalogue
//! - [`tracker`] - diagnostics store, tracker and publisher interface
//! - [`documents`] - open document set
//! - [`events`] - host notification interface
//! - [`engine`] - the event-driven engine

pub mod catalogue;
pub mod diagnostics;
pub mod document;
pub mod documents;
pub mod engine;
pub mod events;
pub mod lines;
pub mod names;
pub mod scanner;
pub mod span;
pub mod tracker;

pub use catalogue::{Catalogue, ProjectCatalogue};
pub use diagnostics::{DiagnosticRecord, DiagnosticSeverity, INVALID_NAME_MESSAGE, filter_invalid};
pub use document::DocumentId;
pub use documents::OpenDocuments;
pub use engine::NameEngine;
pub use events::DocumentEvents;
pub use names::{Category, NameLists, NamedEntity, TokenKind};
pub use scanner::{ClassifiedToken, Occurrence, OccurrenceScanner, scan};
pub use span::{ColumnEncoding, Position, Span};
pub use tracker::{
    DiagnosticsPublisher, DiagnosticsStore, DiagnosticsTracker, RepublishPolicy, TrackerOptions,
};
