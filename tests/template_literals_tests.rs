//! Template literal scanning (C4) beyond the scanner-local tests in
//! `src/lexer/template.rs`: nesting, CRLF normalization, and error paths.

use test_utils::{lex, lex_err, tokens};
use tsc_lex::lexer::token::Identifier;
use tsc_lex::lexer::{LexErrorKind, TokenKind};

fn ident(name: &str) -> TokenKind {
    TokenKind::Identifier(Identifier { name: name.into(), private: false })
}

#[test]
fn nested_template_literal_inside_an_interpolation() {
    let tokens = lex("`a${`b${c}d`}e`");
    use TokenKind::*;
    let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        tokens!(
            TemplateStart,
            TemplateChunk("a".into()),
            TemplateExprStart,
            TemplateStart,
            TemplateChunk("b".into()),
            TemplateExprStart,
            ident("c"),
            TemplateExprEnd,
            TemplateChunk("d".into()),
            TemplateEnd,
            TemplateExprEnd,
            TemplateChunk("e".into()),
            TemplateEnd
        )
    );
}

#[test]
fn crlf_in_a_template_chunk_normalizes_to_lf() {
    let tokens = lex("`a\r\nb`");
    assert_eq!(tokens[1].kind, TokenKind::TemplateChunk("a\nb".into()));
}

#[test]
fn escaped_backtick_inside_a_chunk() {
    let tokens = lex(r"`a\`b`");
    assert_eq!(tokens[1].kind, TokenKind::TemplateChunk("a`b".into()));
}

#[test]
fn unterminated_template_chunk_is_an_error() {
    let e = lex_err("`abc");
    assert_eq!(e.kind, LexErrorKind::UnterminatedNestedMode);
}

#[test]
fn unclosed_interpolation_hole_is_reported_at_eof() {
    let e = lex_err("`${a");
    assert_eq!(e.kind, LexErrorKind::UnterminatedNestedMode);
}

#[test]
fn empty_template_literal() {
    let tokens = lex("``");
    let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::TemplateStart, TokenKind::TemplateEnd]);
}
