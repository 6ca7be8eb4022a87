//! The name engine.
//!
//! [`NameEngine`] owns the pieces a host needs to annotate manuscripts:
//!
//! - a [`Catalogue`] handle (input from the configuration layer)
//! - a [`DiagnosticsPublisher`] handle (output to the problems panel)
//! - the [`OpenDocuments`] set
//! - a [`DiagnosticsTracker`]
//!
//! It implements [`DocumentEvents`]. Opening or editing a document rescans that document and
//! republishes diagnostics; a configuration reload rescans every open document. Syntax
//! classification is pulled on demand through [`NameEngine::provide_tokens`].

use crate::catalogue::Catalogue;
use crate::diagnostics::DiagnosticRecord;
use crate::document::DocumentId;
use crate::documents::OpenDocuments;
use crate::events::DocumentEvents;
use crate::scanner::ClassifiedToken;
use crate::tracker::{DiagnosticsPublisher, DiagnosticsTracker, TrackerOptions};

/// Event-driven annotation engine for a set of open documents.
#[derive(Debug)]
pub struct NameEngine<C, P> {
    catalogue: C,
    publisher: P,
    documents: OpenDocuments,
    tracker: DiagnosticsTracker,
}

impl<C, P> NameEngine<C, P>
where
    C: Catalogue,
    P: DiagnosticsPublisher,
{
    /// Create an engine with default [`TrackerOptions`].
    pub fn new(catalogue: C, publisher: P) -> Self {
        Self::with_options(catalogue, publisher, TrackerOptions::default())
    }

    /// Create an engine with explicit tracker options.
    pub fn with_options(catalogue: C, publisher: P, options: TrackerOptions) -> Self {
        Self {
            catalogue,
            publisher,
            documents: OpenDocuments::new(),
            tracker: DiagnosticsTracker::new(options),
        }
    }

    /// The current catalogue.
    pub fn catalogue(&self) -> &C {
        &self.catalogue
    }

    /// The diagnostics publisher.
    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    /// Mutable access to the diagnostics publisher.
    pub fn publisher_mut(&mut self) -> &mut P {
        &mut self.publisher
    }

    /// The open documents.
    pub fn documents(&self) -> &OpenDocuments {
        &self.documents
    }

    /// The diagnostics tracker.
    pub fn tracker(&self) -> &DiagnosticsTracker {
        &self.tracker
    }

    /// Latest diagnostics for `document`.
    pub fn diagnostics(&self, document: &DocumentId) -> &[DiagnosticRecord] {
        self.tracker.diagnostics(document)
    }

    /// Swap in a freshly loaded catalogue and rescan every open document.
    pub fn reload_catalogue(&mut self, catalogue: C) {
        self.catalogue = catalogue;
        self.configuration_reloaded();
    }

    /// Classified name tokens for an open document.
    ///
    /// Returns an empty list for documents that are not open or have no applicable names.
    pub fn provide_tokens(&self, document: &DocumentId) -> Vec<ClassifiedToken> {
        let Some(text) = self.documents.text(document) else {
            return Vec::new();
        };
        self.tracker
            .scanner()
            .classify(text, self.catalogue.names(document))
    }

    /// Consume the engine, returning the catalogue and publisher.
    pub fn into_parts(self) -> (C, P) {
        (self.catalogue, self.publisher)
    }

    fn update_document(&mut self, document: &DocumentId) {
        let Some(text) = self.documents.text(document) else {
            return;
        };
        self.tracker.update(
            document,
            text,
            self.catalogue.names(document),
            &mut self.publisher,
        );
    }
}

impl<C, P> DocumentEvents for NameEngine<C, P>
where
    C: Catalogue,
    P: DiagnosticsPublisher,
{
    fn document_opened(&mut self, document: DocumentId, text: String) {
        tracing::debug!(document = %document, "document opened");
        self.documents.open(document.clone(), text);
        self.update_document(&document);
    }

    fn document_changed(&mut self, document: DocumentId, text: String) {
        let version = self.documents.set_text(document.clone(), text);
        tracing::trace!(document = %document, version, "document changed");
        self.update_document(&document);
    }

    fn document_closed(&mut self, document: &DocumentId) {
        if self.documents.close(document) {
            tracing::debug!(document = %document, "document closed");
        }
    }

    fn configuration_reloaded(&mut self) {
        tracing::info!(
            documents = self.documents.len(),
            "configuration reloaded, rescanning open documents"
        );
        self.tracker
            .update_all(self.documents.iter(), &self.catalogue, &mut self.publisher);
    }
}
