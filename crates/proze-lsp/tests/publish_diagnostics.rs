use pretty_assertions::assert_eq;
use proze_core::{
    ColumnEncoding, DocumentEvents, DocumentId, NameEngine, NameLists, ProjectCatalogue,
    TrackerOptions,
};
use proze_lsp::{
    LspDiagnosticSeverity, LspDiagnosticsPublisher, LspPosition, LspPublishDiagnosticsParams,
    LspRange, PUBLISH_DIAGNOSTICS_METHOD, read_lsp_message,
};

fn utf16() -> TrackerOptions {
    TrackerOptions {
        column_encoding: ColumnEncoding::Utf16,
        ..TrackerOptions::default()
    }
}

fn drain(bytes: &[u8]) -> Vec<LspPublishDiagnosticsParams> {
    let mut reader = bytes;
    let mut out = Vec::new();
    while let Some(msg) = read_lsp_message(&mut reader).unwrap() {
        assert_eq!(msg["jsonrpc"], "2.0");
        assert_eq!(msg["method"], PUBLISH_DIAGNOSTICS_METHOD);
        out.push(LspPublishDiagnosticsParams::from_value(&msg["params"]).unwrap());
    }
    out
}

#[test]
fn test_engine_publishes_utf16_ranges() {
    let mut catalogue = ProjectCatalogue::new();
    catalogue.insert_name_lists(
        "file:///saga",
        &NameLists {
            invalid: vec!["Gary".to_string()],
            ..NameLists::default()
        },
    );
    let mut engine =
        NameEngine::with_options(catalogue, LspDiagnosticsPublisher::new(Vec::new()), utf16());

    let doc = DocumentId::new("file:///saga/ch1.proze");
    engine.document_opened(doc.clone(), "😀 Gary\nno one".to_string());

    let (_, publisher) = engine.into_parts();
    let published = drain(&publisher.into_inner());
    assert_eq!(published.len(), 1);

    let params = &published[0];
    assert_eq!(params.uri, "file:///saga/ch1.proze");
    assert_eq!(params.diagnostics.len(), 1);

    let diag = &params.diagnostics[0];
    assert_eq!(diag.message, "Invalid character name found: Gary");
    assert_eq!(diag.severity, Some(LspDiagnosticSeverity::Error));
    assert_eq!(diag.source.as_deref(), Some("proze"));
    assert_eq!(
        diag.range,
        LspRange::new(LspPosition::new(0, 3), LspPosition::new(0, 7))
    );
}

#[test]
fn test_every_open_document_is_republished_with_its_full_set() {
    let names = vec![proze_core::NamedEntity::invalid("Gary")];
    let mut engine =
        NameEngine::with_options(names, LspDiagnosticsPublisher::new(Vec::new()), utf16());
    let a = DocumentId::new("file:///a.proze");
    let b = DocumentId::new("file:///b.proze");

    engine.document_opened(a.clone(), "Gary\nGary".to_string());
    engine.document_opened(b.clone(), "clean".to_string());
    engine.document_changed(a.clone(), "clean now".to_string());
    assert_eq!(engine.publisher().published_count(), 1 + 2 + 2);

    let (_, publisher) = engine.into_parts();
    let published = drain(&publisher.into_inner());
    let last_two: Vec<(String, usize)> = published[3..]
        .iter()
        .map(|p| (p.uri.clone(), p.diagnostics.len()))
        .collect();
    assert_eq!(
        last_two,
        vec![
            ("file:///a.proze".to_string(), 0),
            ("file:///b.proze".to_string(), 0),
        ]
    );
}
