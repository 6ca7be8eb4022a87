#![warn(missing_docs)]
//! `proze-lsp` - LSP surface for `proze-core`.
//!
//! This crate turns the engine's outputs into LSP wire data: semantic tokens (legend and
//! delta encoding), `textDocument/publishDiagnostics` notifications, and Content-Length stdio
//! framing. It does not run a server loop; a host wires [`LspDiagnosticsPublisher`] into a
//! [`proze_core::NameEngine`] and forwards document events to it.
//!
//! LSP positions are UTF-16 based, so configure the engine with
//! [`proze_core::ColumnEncoding::Utf16`]:
//!
//! ```rust
//! use proze_core::{
//!     ColumnEncoding, DocumentEvents, DocumentId, NameEngine, NamedEntity, TrackerOptions,
//! };
//! use proze_lsp::{LspDiagnosticsPublisher, encode_semantic_tokens};
//!
//! let options = TrackerOptions {
//!     column_encoding: ColumnEncoding::Utf16,
//!     ..TrackerOptions::default()
//! };
//! let names = vec![NamedEntity::character("Zoë"), NamedEntity::invalid("Gary")];
//! let mut engine = NameEngine::with_options(names, LspDiagnosticsPublisher::new(Vec::new()), options);
//!
//! let doc = DocumentId::new("file:///saga/ch1.proze");
//! engine.document_opened(doc.clone(), "Zoë met Gary.".to_string());
//! assert_eq!(engine.publisher().published_count(), 1);
//!
//! let data = encode_semantic_tokens(&engine.provide_tokens(&doc));
//! assert_eq!(data.len(), 10);
//! ```

pub mod logging;
pub mod lsp_diagnostics;
pub mod lsp_range;
pub mod lsp_semantic_tokens;
pub mod lsp_transport;

pub use logging::{LoggingError, env_filter, init_stderr_logging};
pub use lsp_diagnostics::{
    DIAGNOSTIC_SOURCE, LspDiagnostic, LspDiagnosticSeverity, LspDiagnosticsPublisher,
    LspPublishDiagnosticsParams, PUBLISH_DIAGNOSTICS_METHOD,
};
pub use lsp_range::{LspPosition, LspRange};
pub use lsp_semantic_tokens::{
    DEPRECATED_MODIFIER, SemanticTokensBuilder, SemanticTokensError, SemanticTokensLegend,
    encode_semantic_tokens, semantic_tokens_result, token_type_name,
};
pub use lsp_transport::{TransportError, read_lsp_message, write_lsp_message};
