use pretty_assertions::assert_eq;
use proze_core::{
    ClassifiedToken, ColumnEncoding, NamedEntity, OccurrenceScanner, Position, Span, TokenKind,
};
use proze_lsp::{SemanticTokensLegend, encode_semantic_tokens, semantic_tokens_result};

#[test]
fn test_scanner_output_encodes_in_document_order() {
    let names = vec![
        NamedEntity::invalid("Gary"),
        NamedEntity::character("Jessica"),
        NamedEntity::place("ice cream shop"),
    ];
    let text = "Jessica went to the ice cream shop.\r\nGary followed Jessica.";
    let tokens = OccurrenceScanner::new(ColumnEncoding::Utf16).classify(text, &names);

    let data = encode_semantic_tokens(&tokens);
    assert_eq!(
        data,
        vec![
            0, 0, 7, 0, 0, // Jessica
            0, 20, 14, 1, 0, // ice cream shop
            1, 0, 4, 3, 1, // Gary
            0, 14, 7, 0, 0, // Jessica
        ]
    );
    assert_eq!(semantic_tokens_result(data)["data"][13], 3);
}

#[test]
fn test_malformed_tokens_are_dropped_not_fatal() {
    let tokens = vec![
        ClassifiedToken {
            span: Span::on_line(0, 0, 4),
            kind: TokenKind::Keyword,
        },
        ClassifiedToken {
            span: Span::new(Position::new(1, 2), Position::new(2, 0)),
            kind: TokenKind::Variable,
        },
        ClassifiedToken {
            span: Span::on_line(3, 1, 1),
            kind: TokenKind::Regexp,
        },
        ClassifiedToken {
            span: Span::on_line(4, 2, 6),
            kind: TokenKind::Decorator,
        },
    ];
    assert_eq!(
        encode_semantic_tokens(&tokens),
        vec![0, 0, 4, 0, 0, 4, 2, 4, 3, 1]
    );
}

#[test]
fn test_legend_serializes_for_capabilities() {
    let legend = SemanticTokensLegend::default().to_value();
    assert_eq!(
        legend,
        serde_json::json!({
            "tokenTypes": ["keyword", "variable", "regexp", "decorator"],
            "tokenModifiers": ["deprecated"],
        })
    );
}
