//! TypeScript-specific surface: private fields, decorators, contextual
//! type-level keywords, and non-JSX `<`/`>` disambiguation for generics.

use test_utils::{assert_token_sequence, lex, tokens};
use tsc_lex::lexer::token::{Identifier, Keyword, Punct};
use tsc_lex::lexer::TokenKind;

fn ident(name: &str) -> TokenKind {
    TokenKind::Identifier(Identifier { name: name.into(), private: false })
}

fn private(name: &str) -> TokenKind {
    TokenKind::Identifier(Identifier { name: name.into(), private: true })
}

#[test]
fn private_field_access_on_this() {
    let tokens = lex("this.#count");
    assert_token_sequence(
        &tokens,
        &tokens!(TokenKind::Keyword(Keyword::This), TokenKind::Punct(Punct::Dot), private("count")),
    );
}

#[test]
fn decorator_above_a_class_member() {
    let tokens = lex("@readonly\nfield: string;");
    assert_token_sequence(
        &tokens,
        &tokens!(
            TokenKind::Punct(Punct::At),
            ident("readonly"),
            TokenKind::Newline,
            ident("field"),
            TokenKind::Punct(Punct::Colon),
            TokenKind::Keyword(Keyword::StringType),
            TokenKind::Punct(Punct::Semicolon)
        ),
    );
}

#[test]
fn generics_are_plain_angle_brackets_outside_jsx() {
    let tokens = lex("identity<T>(x)");
    assert_token_sequence(
        &tokens,
        &tokens!(
            ident("identity"),
            TokenKind::Punct(Punct::LAngle),
            ident("T"),
            TokenKind::Punct(Punct::RAngle),
            TokenKind::Punct(Punct::LParen),
            ident("x"),
            TokenKind::Punct(Punct::RParen)
        ),
    );
}

#[test]
fn non_null_assertion_is_a_bare_bang() {
    let tokens = lex("x!.y");
    assert_token_sequence(
        &tokens,
        &tokens!(ident("x"), TokenKind::Punct(Punct::Not), TokenKind::Punct(Punct::Dot), ident("y")),
    );
}

#[test]
fn keyof_typeof_and_satisfies_are_keywords() {
    let tokens = lex("type K = keyof typeof x satisfies unknown;");
    let kinds: Vec<_> = tokens.iter().map(|t| &t.kind).collect();
    assert!(kinds.contains(&&TokenKind::Keyword(Keyword::KeyOf)));
    assert!(kinds.contains(&&TokenKind::Keyword(Keyword::TypeOf)));
    assert!(kinds.contains(&&TokenKind::Keyword(Keyword::Satisfies)));
    assert!(kinds.contains(&&TokenKind::Keyword(Keyword::Unknown)));
}

#[test]
fn bigint_literal_with_separators() {
    let tokens = lex("1_000_000n");
    match &tokens[0].kind {
        TokenKind::Numeric(tsc_lex::lexer::token::NumericLiteral::Integer(i)) => {
            assert_eq!(i.size, tsc_lex::lexer::token::IntegerSize::BigInt);
            assert_eq!(i.value, num_bigint::BigInt::from(1_000_000));
        }
        other => panic!("expected a bigint literal, got {other:?}"),
    }
}

#[test]
fn optional_chaining_with_call() {
    let tokens = lex("a?.b()");
    assert_token_sequence(
        &tokens,
        &tokens!(
            ident("a"),
            TokenKind::Punct(Punct::QuestionDot),
            ident("b"),
            TokenKind::Punct(Punct::LParen),
            TokenKind::Punct(Punct::RParen)
        ),
    );
}
