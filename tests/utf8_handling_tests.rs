//! Multi-byte UTF-8 source handling: identifier classification (C2) and
//! surrogate-pair decoding in `\u` escapes (C4), exercised end-to-end
//! through the full lexer rather than the table/escape functions directly.

use test_utils::{lex, lex_all};
use tsc_lex::lexer::token::{Identifier, StringLiteral};
use tsc_lex::lexer::{LanguageVariant, LanguageVersion, TokenKind};

#[test]
fn greek_identifier_lexes_as_one_identifier() {
    let tokens = lex("let λ = 1;");
    assert_eq!(
        tokens[1].kind,
        TokenKind::Identifier(Identifier { name: "λ".into(), private: false })
    );
}

#[test]
fn cjk_identifier_round_trips() {
    let tokens = lex_all("变量", LanguageVersion::LATEST, LanguageVariant::TypeScript);
    assert_eq!(
        tokens[0].kind,
        TokenKind::Identifier(Identifier { name: "变量".into(), private: false })
    );
}

#[test]
fn combining_mark_cannot_start_an_identifier() {
    // U+0301 COMBINING ACUTE ACCENT continues an identifier but never starts
    // one; prefixed with an ASCII letter it's a single two-codepoint name.
    let tokens = lex("a\u{0301} ");
    assert_eq!(
        tokens[0].kind,
        TokenKind::Identifier(Identifier { name: "a\u{0301}".into(), private: false })
    );
}

#[test]
fn surrogate_pair_escape_decodes_to_astral_character() {
    // U+1F600 GRINNING FACE as a UTF-16 surrogate pair.
    let tokens = lex(r#""😀""#);
    assert_eq!(
        tokens[0].kind,
        TokenKind::StringLiteral(StringLiteral { value: "\u{1F600}".into(), quote: '"' })
    );
}

#[test]
fn lone_high_surrogate_escape_becomes_replacement_character() {
    let tokens = lex(r#""\uD83Dx""#);
    assert_eq!(
        tokens[0].kind,
        TokenKind::StringLiteral(StringLiteral { value: "\u{FFFD}x".into(), quote: '"' })
    );
}

#[test]
fn brace_delimited_unicode_escape_outside_bmp() {
    let tokens = lex(r#""\u{1F600}""#);
    assert_eq!(
        tokens[0].kind,
        TokenKind::StringLiteral(StringLiteral { value: "\u{1F600}".into(), quote: '"' })
    );
}

#[test]
fn fullwidth_digits_form_a_numeric_literal() {
    use tsc_lex::lexer::token::NumericLiteral;
    let tokens = lex("\u{FF11}\u{FF12}");
    match &tokens[0].kind {
        TokenKind::Numeric(NumericLiteral::Integer(i)) => {
            assert_eq!(i.value, num_bigint::BigInt::from(12))
        }
        other => panic!("expected a numeric literal, got {other:?}"),
    }
}
