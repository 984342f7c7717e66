//! General iterator-contract tests: laziness, fusing, and mixed-token
//! programs exercising several scanners together.

use test_utils::{assert_token_sequence, lex, lex_err};
use tsc_lex::lexer::token::{Identifier, IntegerLiteral, Keyword, NumericBase, NumericLiteral, Punct};
use tsc_lex::lexer::{LexErrorKind, LexResult, Lexer, TokenKind};

fn ident(name: &str) -> TokenKind {
    TokenKind::Identifier(Identifier { name: name.into(), private: false })
}

fn int(digits: &str, value: u32) -> TokenKind {
    TokenKind::Numeric(NumericLiteral::Integer(IntegerLiteral {
        value: value.into(),
        base: NumericBase::Decimal,
        digits: digits.into(),
        size: tsc_lex::lexer::token::IntegerSize::Standard,
        legacy_octal: false,
    }))
}

#[test]
fn small_function_declaration() {
    let tokens = lex("function add(a, b) {\n  return a + b;\n}");
    assert_token_sequence(
        &tokens,
        &[
            TokenKind::Keyword(Keyword::Function),
            ident("add"),
            TokenKind::Punct(Punct::LParen),
            ident("a"),
            TokenKind::Punct(Punct::Comma),
            ident("b"),
            TokenKind::Punct(Punct::RParen),
            TokenKind::Punct(Punct::LBrace),
            TokenKind::Newline,
            TokenKind::Keyword(Keyword::Return),
            ident("a"),
            TokenKind::Punct(Punct::Plus),
            ident("b"),
            TokenKind::Punct(Punct::Semicolon),
            TokenKind::Newline,
            TokenKind::Punct(Punct::RBrace),
        ],
    );
}

#[test]
fn iterator_ends_at_eof_with_none() {
    let mut lexer = Lexer::new("t", "1".as_bytes());
    assert_eq!(lexer.next(), Some(Ok(lexer_token(int("1", 1)))));
    assert_eq!(lexer.next(), None);
    assert_eq!(lexer.next(), None, "iterator must keep returning None after EOF");
}

fn lexer_token(kind: TokenKind) -> tsc_lex::lexer::Token {
    tsc_lex::lexer::Token::new(kind, dummy_location())
}

fn dummy_location() -> tsc_lex::lexer::SourceLocation {
    tsc_lex::lexer::SourceLocation::new("t".into(), tsc_lex::lexer::Position::start())
}

#[test]
fn iterator_fuses_after_an_error() {
    let mut lexer = Lexer::new("t", "'unterminated".as_bytes());
    let first = lexer.next();
    assert!(matches!(first, Some(Err(_))));
    assert_eq!(lexer.next(), None, "fused lexer must not resume scanning after an error");
}

#[test]
fn unclosed_template_expression_is_reported_at_eof() {
    // A bare top-level `{...}` isn't tracked on the mode stack at all (base
    // spec §3) — only template/JSX nesting is, so the unterminated-mode
    // error needs an actually-open template hole to surface.
    let e = lex_err("`${");
    assert_eq!(e.kind, LexErrorKind::UnterminatedNestedMode);
}

#[test]
fn mixed_numeric_and_punct_program() {
    let tokens: Vec<_> = Lexer::new("t", "let total = 1 + 2 * 3;".as_bytes())
        .collect::<LexResult<Vec<_>>>()
        .unwrap();
    assert_token_sequence(
        &tokens,
        &[
            TokenKind::Keyword(Keyword::Let),
            ident("total"),
            TokenKind::Punct(Punct::Eq),
            int("1", 1),
            TokenKind::Punct(Punct::Plus),
            int("2", 2),
            TokenKind::Punct(Punct::Star),
            int("3", 3),
            TokenKind::Punct(Punct::Semicolon),
        ],
    );
}
