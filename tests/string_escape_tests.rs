//! String-escape decoding (C4) end-to-end through the full lexer, beyond
//! the scanner-local unit tests in `src/lexer/strings.rs`.

use test_utils::{lex, lex_err};
use tsc_lex::lexer::token::StringLiteral;
use tsc_lex::lexer::{LexErrorKind, TokenKind};

fn string_value(src: &str) -> String {
    match &lex(src)[0].kind {
        TokenKind::StringLiteral(StringLiteral { value, .. }) => value.clone(),
        other => panic!("expected a string literal, got {other:?}"),
    }
}

#[test]
fn punctuator_escapes_pass_through_literally() {
    assert_eq!(string_value(r#"'\^\$\.\*\+\?\(\)\[\]\{\}\|'"#), "^$.*+?()[]{}|");
}

#[test]
fn quote_and_backslash_escapes() {
    assert_eq!(string_value(r#"'\'\"\\'"#), "'\"\\");
}

#[test]
fn bad_hex_escape_digit_is_an_error() {
    let e = lex_err(r#"'\xZZ'"#);
    assert_eq!(e.kind, LexErrorKind::InvalidEscapeSequence);
}

#[test]
fn unicode_value_above_max_code_point_is_an_error() {
    let e = lex_err(r#"'\u{110000}'"#);
    assert_eq!(e.kind, LexErrorKind::UnicodeValueOutOfRange);
}

#[test]
fn empty_brace_unicode_escape_is_an_error() {
    let e = lex_err(r#"'\u{}'"#);
    assert_eq!(e.kind, LexErrorKind::InvalidEscapeSequence);
}

#[test]
fn unterminated_brace_unicode_escape_is_an_error() {
    let e = lex_err(r#"'\u{41'"#);
    assert_eq!(e.kind, LexErrorKind::UnterminatedUnicodeEscapeSequence);
}

#[test]
fn octal_escape_clamps_to_a_single_byte() {
    // \377 is the highest three-digit octal escape that still fits a byte.
    assert_eq!(string_value(r#"'\377'"#), "\u{FF}");
}

#[test]
fn digit_escapes_eight_and_nine_are_literal() {
    assert_eq!(string_value(r#"'\8\9'"#), "89");
}

#[test]
fn crlf_line_continuation_collapses_to_nothing() {
    assert_eq!(string_value("'a\\\r\nb'"), "ab");
}

#[test]
fn unrecognized_alphanumeric_escape_is_an_error() {
    let e = lex_err(r#"'\q'"#);
    assert_eq!(e.kind, LexErrorKind::InvalidEscapeSequence);
}
