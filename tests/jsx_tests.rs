//! JSX sub-lexer integration tests (C7), covering interaction with other
//! scanners (numerics, templates, decimal entities) beyond the state-machine
//! unit tests already in `src/lexer/jsx.rs`.

use test_utils::{lex_jsx, tokens};
use tsc_lex::lexer::token::Identifier;
use tsc_lex::lexer::TokenKind;

fn ident(name: &str) -> TokenKind {
    TokenKind::Identifier(Identifier { name: name.into(), private: false })
}

#[test]
fn decimal_and_hex_numeric_entities_decode() {
    let tokens = lex_jsx("<p>&#65;&#x42;</p>");
    assert_eq!(tokens[2].kind, TokenKind::JsxText("AB".into()));
}

#[test]
fn unrecognized_entity_is_left_as_literal_ampersand() {
    let tokens = lex_jsx("<p>Q&A</p>");
    assert_eq!(tokens[2].kind, TokenKind::JsxText("Q&A".into()));
}

#[test]
fn multiple_attributes_before_self_close() {
    let tokens = lex_jsx(r#"<Input value="x" disabled />"#);
    assert_eq!(tokens[0].kind, TokenKind::JsxElementStart("Input".into()));
    assert_eq!(tokens[1].kind, TokenKind::JsxAttributeName("value".into()));
    assert_eq!(
        tokens[2].kind,
        TokenKind::JsxAttributeValue { value: "x".into(), quote: '"' }
    );
    assert_eq!(tokens[3].kind, TokenKind::JsxAttributeName("disabled".into()));
    assert_eq!(tokens[4].kind, TokenKind::JsxSelfClosing);
}

#[test]
fn element_nested_inside_an_expression_hole() {
    let tokens = lex_jsx("<a>{<b/>}</a>");
    use tsc_lex::lexer::token::TokenKind::*;
    let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        tokens!(
            JsxElementStart("a".into()),
            JsxElementEnd,
            TemplateExprStart,
            JsxElementStart("b".into()),
            JsxSelfClosing,
            TemplateExprEnd,
            JsxElementClose("a".into())
        )
    );
}

#[test]
fn attribute_name_with_hyphen() {
    let tokens = lex_jsx(r#"<div data-id="x" />"#);
    assert_eq!(tokens[1].kind, TokenKind::JsxAttributeName("data-id".into()));
}

#[test]
fn text_run_stops_at_less_than_comparison_never_applies_outside_text() {
    // Outside any JSX mode, `<` still needs the lookahead heuristic to
    // decide element-open vs comparison; ensure ordinary TS code in a JSX
    // file isn't misread.
    let tokens = lex_jsx("const ok = a < b;");
    assert!(tokens.iter().any(|t| t.kind == ident("a")));
    assert!(tokens
        .iter()
        .any(|t| t.kind == TokenKind::Punct(tsc_lex::lexer::token::Punct::LAngle)));
}
