//! `textDocument/publishDiagnostics` for invalid-name findings.

use crate::lsp_range::LspRange;
use crate::lsp_transport::write_lsp_message;
use proze_core::{DiagnosticRecord, DiagnosticSeverity, DiagnosticsPublisher, DocumentId};
use serde_json::{Map, Value, json};
use std::io::Write;

/// `source` attached to every published diagnostic.
pub const DIAGNOSTIC_SOURCE: &str = "proze";

/// LSP method name of the diagnostics notification.
pub const PUBLISH_DIAGNOSTICS_METHOD: &str = "textDocument/publishDiagnostics";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// LSP diagnostic severity (1..=4 on the wire).
pub enum LspDiagnosticSeverity {
    /// Error diagnostics.
    Error,
    /// Warning diagnostics.
    Warning,
    /// Informational diagnostics.
    Information,
    /// Hint diagnostics.
    Hint,
}

impl LspDiagnosticSeverity {
    /// Convert the numeric LSP `DiagnosticSeverity` into an enum.
    pub fn from_u64(value: u64) -> Option<Self> {
        match value {
            1 => Some(Self::Error),
            2 => Some(Self::Warning),
            3 => Some(Self::Information),
            4 => Some(Self::Hint),
            _ => None,
        }
    }

    /// Numeric wire value.
    pub fn to_u64(self) -> u64 {
        match self {
            Self::Error => 1,
            Self::Warning => 2,
            Self::Information => 3,
            Self::Hint => 4,
        }
    }
}

impl From<DiagnosticSeverity> for LspDiagnosticSeverity {
    fn from(severity: DiagnosticSeverity) -> Self {
        match severity {
            DiagnosticSeverity::Error => Self::Error,
            DiagnosticSeverity::Warning => Self::Warning,
            DiagnosticSeverity::Information => Self::Information,
            DiagnosticSeverity::Hint => Self::Hint,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single LSP diagnostic item.
pub struct LspDiagnostic {
    /// Diagnostic range.
    pub range: LspRange,
    /// Optional severity.
    pub severity: Option<LspDiagnosticSeverity>,
    /// Optional diagnostic source.
    pub source: Option<String>,
    /// Diagnostic message.
    pub message: String,
}

impl LspDiagnostic {
    /// Convert an engine record. Columns are passed through unchanged.
    pub fn from_record(record: &DiagnosticRecord) -> Self {
        Self {
            range: record.span.into(),
            severity: Some(record.severity.into()),
            source: Some(DIAGNOSTIC_SOURCE.to_string()),
            message: record.message.clone(),
        }
    }

    /// Parse an LSP `Diagnostic` object.
    pub fn from_value(value: &Value) -> Option<Self> {
        Some(Self {
            range: LspRange::from_value(value.get("range")?)?,
            severity: value
                .get("severity")
                .and_then(Value::as_u64)
                .and_then(LspDiagnosticSeverity::from_u64),
            source: value
                .get("source")
                .and_then(Value::as_str)
                .map(|s| s.to_string()),
            message: value.get("message")?.as_str()?.to_string(),
        })
    }

    /// Encode as an LSP `Diagnostic` object. Absent optionals are omitted.
    pub fn to_value(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("range".to_string(), self.range.to_value());
        if let Some(severity) = self.severity {
            obj.insert("severity".to_string(), json!(severity.to_u64()));
        }
        if let Some(source) = &self.source {
            obj.insert("source".to_string(), json!(source));
        }
        obj.insert("message".to_string(), json!(self.message));
        Value::Object(obj)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Parameters for `textDocument/publishDiagnostics`.
pub struct LspPublishDiagnosticsParams {
    /// Document URI.
    pub uri: String,
    /// Diagnostics for the document.
    pub diagnostics: Vec<LspDiagnostic>,
    /// Optional document version.
    pub version: Option<i32>,
}

impl LspPublishDiagnosticsParams {
    /// Build params for `document` from its full current record set.
    ///
    /// The document id is used as the URI as-is.
    pub fn from_records(document: &DocumentId, records: &[DiagnosticRecord]) -> Self {
        Self {
            uri: document.as_str().to_string(),
            diagnostics: records.iter().map(LspDiagnostic::from_record).collect(),
            version: None,
        }
    }

    /// Parse the `params` of a diagnostics notification.
    pub fn from_value(params: &Value) -> Option<Self> {
        let uri = params.get("uri")?.as_str()?.to_string();
        let diagnostics = params
            .get("diagnostics")?
            .as_array()?
            .iter()
            .filter_map(LspDiagnostic::from_value)
            .collect();
        let version = params
            .get("version")
            .and_then(Value::as_i64)
            .and_then(|v| i32::try_from(v).ok());
        Some(Self {
            uri,
            diagnostics,
            version,
        })
    }

    /// Encode as the notification `params` object.
    pub fn to_value(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("uri".to_string(), json!(self.uri));
        obj.insert(
            "diagnostics".to_string(),
            Value::Array(self.diagnostics.iter().map(LspDiagnostic::to_value).collect()),
        );
        if let Some(version) = self.version {
            obj.insert("version".to_string(), json!(version));
        }
        Value::Object(obj)
    }

    /// Wrap as a complete JSON-RPC notification.
    pub fn to_notification(&self) -> Value {
        json!({
            "jsonrpc": "2.0",
            "method": PUBLISH_DIAGNOSTICS_METHOD,
            "params": self.to_value(),
        })
    }
}

/// Writes every published record set as a framed `publishDiagnostics` notification.
///
/// Write failures are logged and the notification is dropped; the engine's own diagnostics
/// state is unaffected and the next publish for the document carries the full set again.
#[derive(Debug)]
pub struct LspDiagnosticsPublisher<W: Write> {
    writer: W,
    published: usize,
}

impl<W: Write> LspDiagnosticsPublisher<W> {
    /// Create a publisher writing to `writer` (typically stdout).
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            published: 0,
        }
    }

    /// The underlying writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Consume the publisher, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Number of notifications successfully written.
    pub fn published_count(&self) -> usize {
        self.published
    }
}

impl<W: Write> DiagnosticsPublisher for LspDiagnosticsPublisher<W> {
    fn publish(&mut self, document: &DocumentId, records: &[DiagnosticRecord]) {
        let params = LspPublishDiagnosticsParams::from_records(document, records);
        match write_lsp_message(&mut self.writer, &params.to_notification()) {
            Ok(()) => {
                self.published += 1;
                tracing::trace!(%document, count = records.len(), "published diagnostics");
            }
            Err(err) => {
                tracing::error!(%document, %err, "failed to publish diagnostics");
            }
        }
    }
}
