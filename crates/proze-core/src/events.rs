//! Host notification interface.
//!
//! The host wires real editor events (document opened/edited, configuration files changed) to
//! these calls. Each notification is handled to completion before the next one arrives; a
//! newer edit simply overwrites the result of an older one.

use crate::document::DocumentId;

/// Notifications the core responds to.
pub trait DocumentEvents {
    /// A document was opened with the given full text.
    fn document_opened(&mut self, document: DocumentId, text: String);

    /// A document's full text changed.
    fn document_changed(&mut self, document: DocumentId, text: String);

    /// A document was closed.
    fn document_closed(&mut self, _document: &DocumentId) {}

    /// The project configuration was reloaded; every open document must be rescanned.
    fn configuration_reloaded(&mut self);
}
