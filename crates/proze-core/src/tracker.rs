//! Per-document diagnostics tracking.
//!
//! [`DiagnosticsTracker`] keeps the latest invalid-name diagnostics of every document it has
//! scanned, in a [`DiagnosticsStore`], and pushes them to a [`DiagnosticsPublisher`].
//!
//! Each `update` replaces that document's entry wholesale (no diffing) and then, under the
//! default [`RepublishPolicy::All`], re-publishes **every** entry in the store. The presentation
//! layer therefore always mirrors the store exactly, at the price of `O(documents)` publishes
//! per edit. [`RepublishPolicy::ChangedOnly`] publishes just the updated document; since
//! publishers replace a document's set idempotently, the final published state is the same.
//!
//! Entries are never removed individually, not even when a document closes. The store is only
//! cleared by [`DiagnosticsTracker::reset`], which rebuilds it empty.

use crate::catalogue::Catalogue;
use crate::diagnostics::DiagnosticRecord;
use crate::document::DocumentId;
use crate::names::NamedEntity;
use crate::scanner::OccurrenceScanner;
use crate::span::ColumnEncoding;
use std::collections::BTreeMap;

/// Receiver of per-document diagnostic sets (e.g. an editor's problems panel).
///
/// Each call replaces everything previously published for `document`.
pub trait DiagnosticsPublisher {
    /// Publish the complete diagnostic set for `document`.
    fn publish(&mut self, document: &DocumentId, records: &[DiagnosticRecord]);
}

impl<F> DiagnosticsPublisher for F
where
    F: FnMut(&DocumentId, &[DiagnosticRecord]),
{
    fn publish(&mut self, document: &DocumentId, records: &[DiagnosticRecord]) {
        self(document, records)
    }
}

/// Which documents are re-published after an update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RepublishPolicy {
    /// Re-publish every tracked document after each update.
    #[default]
    All,
    /// Publish only the document that was just updated.
    ChangedOnly,
}

/// Options for [`DiagnosticsTracker`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackerOptions {
    /// Unit for diagnostic columns.
    pub column_encoding: ColumnEncoding,
    /// Republish behavior after an update.
    pub republish: RepublishPolicy,
}

/// Latest diagnostics per document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticsStore {
    entries: BTreeMap<DocumentId, Vec<DiagnosticRecord>>,
}

impl DiagnosticsStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tracked documents (including documents with no diagnostics).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no document has been scanned.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if `document` has an entry.
    pub fn contains(&self, document: &DocumentId) -> bool {
        self.entries.contains_key(document)
    }

    /// Diagnostics for `document`, if it has been scanned.
    pub fn get(&self, document: &DocumentId) -> Option<&[DiagnosticRecord]> {
        self.entries.get(document).map(Vec::as_slice)
    }

    /// Iterate entries in document-id order.
    pub fn iter(&self) -> impl Iterator<Item = (&DocumentId, &[DiagnosticRecord])> {
        self.entries.iter().map(|(id, records)| (id, records.as_slice()))
    }

    /// Total number of records across all documents.
    pub fn record_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    fn replace(&mut self, document: DocumentId, records: Vec<DiagnosticRecord>) {
        self.entries.insert(document, records);
    }
}

/// Computes and publishes invalid-name diagnostics.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticsTracker {
    scanner: OccurrenceScanner,
    options: TrackerOptions,
    store: DiagnosticsStore,
}

impl DiagnosticsTracker {
    /// Create a tracker with an empty store.
    pub fn new(options: TrackerOptions) -> Self {
        Self {
            scanner: OccurrenceScanner::new(options.column_encoding),
            options,
            store: DiagnosticsStore::new(),
        }
    }

    /// Tracker options.
    pub fn options(&self) -> TrackerOptions {
        self.options
    }

    /// The scanner used for filtering (shares the tracker's column encoding).
    pub fn scanner(&self) -> &OccurrenceScanner {
        &self.scanner
    }

    /// Current store contents.
    pub fn store(&self) -> &DiagnosticsStore {
        &self.store
    }

    /// Diagnostics for `document` (empty if it was never scanned).
    pub fn diagnostics(&self, document: &DocumentId) -> &[DiagnosticRecord] {
        self.store.get(document).unwrap_or(&[])
    }

    /// Rescan `document`, replace its entry, and republish.
    ///
    /// Returns the number of diagnostics now recorded for `document`.
    pub fn update<P>(
        &mut self,
        document: &DocumentId,
        text: &str,
        names: &[NamedEntity],
        publisher: &mut P,
    ) -> usize
    where
        P: DiagnosticsPublisher + ?Sized,
    {
        let records = self.scanner.filter_invalid(document, text, names);
        let count = records.len();
        tracing::debug!(
            document = %document,
            names = names.len(),
            diagnostics = count,
            "rescanned document for invalid names"
        );
        self.store.replace(document.clone(), records);

        match self.options.republish {
            RepublishPolicy::All => self.republish_all(publisher),
            RepublishPolicy::ChangedOnly => {
                publisher.publish(document, self.diagnostics(document));
            }
        }

        count
    }

    /// [`update`](Self::update) every given document against its catalogue names.
    ///
    /// Used after a configuration reload, so every open document reflects the new catalogue
    /// even if its own names did not change.
    pub fn update_all<'a, I, C, P>(&mut self, documents: I, catalogue: &C, publisher: &mut P)
    where
        I: IntoIterator<Item = (&'a DocumentId, &'a str)>,
        C: Catalogue + ?Sized,
        P: DiagnosticsPublisher + ?Sized,
    {
        let mut updated = 0usize;
        for (document, text) in documents {
            self.update(document, text, catalogue.names(document), publisher);
            updated += 1;
        }
        tracing::debug!(documents = updated, "rescanned all open documents");
    }

    /// Publish every entry in the store.
    pub fn republish_all<P>(&self, publisher: &mut P)
    where
        P: DiagnosticsPublisher + ?Sized,
    {
        for (document, records) in self.store.iter() {
            tracing::trace!(document = %document, diagnostics = records.len(), "publishing");
            publisher.publish(document, records);
        }
    }

    /// Drop all tracked diagnostics by rebuilding the store empty.
    pub fn reset(&mut self) {
        self.store = DiagnosticsStore::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Span;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(String, usize)>,
    }

    impl DiagnosticsPublisher for Recorder {
        fn publish(&mut self, document: &DocumentId, records: &[DiagnosticRecord]) {
            self.calls.push((document.to_string(), records.len()));
        }
    }

    #[test]
    fn test_update_replaces_and_republishes_everything() {
        let names = vec![NamedEntity::invalid("Gary")];
        let a = DocumentId::new("a");
        let b = DocumentId::new("b");
        let mut tracker = DiagnosticsTracker::default();
        let mut recorder = Recorder::default();

        assert_eq!(tracker.update(&a, "Gary", &names, &mut recorder), 1);
        assert_eq!(recorder.calls, vec![("a".to_string(), 1)]);

        recorder.calls.clear();
        assert_eq!(tracker.update(&b, "no names here", &names, &mut recorder), 0);
        assert_eq!(
            recorder.calls,
            vec![("a".to_string(), 1), ("b".to_string(), 0)]
        );

        recorder.calls.clear();
        tracker.update(&a, "clean now", &names, &mut recorder);
        assert_eq!(
            recorder.calls,
            vec![("a".to_string(), 0), ("b".to_string(), 0)]
        );
        assert_eq!(tracker.store().len(), 2);
        assert_eq!(tracker.store().record_count(), 0);
    }

    #[test]
    fn test_changed_only_policy() {
        let names = vec![NamedEntity::invalid("Gary")];
        let mut tracker = DiagnosticsTracker::new(TrackerOptions {
            republish: RepublishPolicy::ChangedOnly,
            ..TrackerOptions::default()
        });
        let mut recorder = Recorder::default();

        tracker.update(&DocumentId::new("a"), "Gary", &names, &mut recorder);
        tracker.update(&DocumentId::new("b"), "Gary\nGary", &names, &mut recorder);
        assert_eq!(
            recorder.calls,
            vec![("a".to_string(), 1), ("b".to_string(), 2)]
        );
    }

    #[test]
    fn test_closure_publisher_and_encoding() {
        let names = vec![NamedEntity::invalid("Gary")];
        let mut tracker = DiagnosticsTracker::new(TrackerOptions {
            column_encoding: ColumnEncoding::Utf16,
            ..TrackerOptions::default()
        });

        let mut seen = Vec::new();
        let mut publisher = |document: &DocumentId, records: &[DiagnosticRecord]| {
            seen.push((document.clone(), records.to_vec()));
        };
        tracker.update(&DocumentId::new("a"), "👋 Gary", &names, &mut publisher);

        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].1[0].span, Span::on_line(0, 3, 7));
    }

    #[test]
    fn test_reset_rebuilds_empty_store() {
        let names = vec![NamedEntity::invalid("Gary")];
        let mut tracker = DiagnosticsTracker::default();
        let mut recorder = Recorder::default();
        tracker.update(&DocumentId::new("a"), "Gary", &names, &mut recorder);
        assert!(tracker.store().contains(&DocumentId::new("a")));

        tracker.reset();
        assert!(tracker.store().is_empty());
        assert!(tracker.diagnostics(&DocumentId::new("a")).is_empty());
    }
}
