//! The set of open documents.
//!
//! Hosts report document contents through the notification interface; the engine keeps the
//! latest text of each open document here so a configuration reload can rescan all of them.

use crate::document::DocumentId;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
struct DocumentEntry {
    text: String,
    version: u64,
}

/// Latest text and version of each open document.
///
/// Versions start at `0` when a document is opened and increase by one on every change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenDocuments {
    documents: BTreeMap<DocumentId, DocumentEntry>,
}

impl OpenDocuments {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of open documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns `true` if no document is open.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Returns `true` if `document` is open.
    pub fn contains(&self, document: &DocumentId) -> bool {
        self.documents.contains_key(document)
    }

    /// Open `document` (or reopen it, resetting its version). Returns the new version.
    pub fn open(&mut self, document: DocumentId, text: impl Into<String>) -> u64 {
        self.documents.insert(
            document,
            DocumentEntry {
                text: text.into(),
                version: 0,
            },
        );
        0
    }

    /// Replace the text of `document`. Returns the new version.
    ///
    /// A change for a document that was never opened opens it.
    pub fn set_text(&mut self, document: DocumentId, text: impl Into<String>) -> u64 {
        let text = text.into();
        match self.documents.get_mut(&document) {
            Some(entry) => {
                entry.text = text;
                entry.version = entry.version.saturating_add(1);
                entry.version
            }
            None => self.open(document, text),
        }
    }

    /// Close `document`. Returns `false` if it was not open.
    pub fn close(&mut self, document: &DocumentId) -> bool {
        self.documents.remove(document).is_some()
    }

    /// Current text of `document`.
    pub fn text(&self, document: &DocumentId) -> Option<&str> {
        self.documents.get(document).map(|e| e.text.as_str())
    }

    /// Current version of `document`.
    pub fn version(&self, document: &DocumentId) -> Option<u64> {
        self.documents.get(document).map(|e| e.version)
    }

    /// Iterate `(id, text)` pairs in document-id order.
    pub fn iter(&self) -> impl Iterator<Item = (&DocumentId, &str)> {
        self.documents.iter().map(|(id, e)| (id, e.text.as_str()))
    }
}
