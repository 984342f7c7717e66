//! Numeric and string literal scanning (C3/C4), beyond the scanner-local
//! unit tests in `src/lexer/numeric.rs` / `src/lexer/strings.rs`.

use test_utils::{lex, lex_err};
use tsc_lex::lexer::token::{FloatExponent, FloatLiteral, IntegerLiteral, IntegerSize, NumericBase, NumericLiteral, StringLiteral, TokenKind};
use tsc_lex::lexer::LexErrorKind;

fn int(value: u32, base: NumericBase, digits: &str, size: IntegerSize, legacy_octal: bool) -> TokenKind {
    TokenKind::Numeric(NumericLiteral::Integer(IntegerLiteral {
        value: value.into(),
        base,
        digits: digits.into(),
        size,
        legacy_octal,
    }))
}

#[test]
fn hex_bigint_literal() {
    let tokens = lex("0xFFn");
    assert_eq!(
        tokens[0].kind,
        int(255, NumericBase::Hex, "FF", IntegerSize::BigInt, false)
    );
}

#[test]
fn legacy_octal_round_trips_without_prefix() {
    let tokens = lex("0755");
    match &tokens[0].kind {
        TokenKind::Numeric(NumericLiteral::Integer(i)) => {
            assert!(i.legacy_octal);
            assert_eq!(i.base, NumericBase::Octal);
            assert_eq!(i.kind_source_text(), "0755");
        }
        other => panic!("expected an integer literal, got {other:?}"),
    }
}

trait SourceTextExt {
    fn kind_source_text(&self) -> String;
}
impl SourceTextExt for IntegerLiteral {
    fn kind_source_text(&self) -> String {
        NumericLiteral::Integer(self.clone()).source_text()
    }
}

#[test]
fn leading_zero_eight_is_decimal_not_octal() {
    let tokens = lex("08");
    assert_eq!(tokens[0].kind, int(8, NumericBase::Decimal, "08", IntegerSize::Standard, false));
}

#[test]
fn float_with_explicit_positive_exponent() {
    let tokens = lex("1.5e+10");
    assert_eq!(
        tokens[0].kind,
        TokenKind::Numeric(NumericLiteral::Float(FloatLiteral {
            value: 1.5e10,
            integer_digits: "1".into(),
            fraction_digits: Some("5".into()),
            exponent: Some(FloatExponent {
                upper_e: false,
                negative: false,
                explicit_sign: true,
                digits: "10".into(),
            }),
        }))
    );
}

#[test]
fn numeric_separator_in_the_middle_is_fine() {
    let tokens = lex("1_000_000");
    assert_eq!(tokens[0].kind, int(1_000_000, NumericBase::Decimal, "1_000_000", IntegerSize::Standard, false));
}

#[test]
fn trailing_numeric_separator_is_an_error() {
    let e = lex_err("1_000_");
    assert_eq!(e.kind, LexErrorKind::SeparatorsNotAllowedHere);
}

#[test]
fn double_numeric_separator_is_an_error() {
    let e = lex_err("1__000");
    assert_eq!(e.kind, LexErrorKind::MultipleSeparatorsNotAllowed);
}

#[test]
fn binary_with_bad_digit_is_an_error() {
    let e = lex_err("0b2");
    assert_eq!(e.kind, LexErrorKind::InvalidNumericLiteral);
}

#[test]
fn double_quoted_string_with_mixed_escapes() {
    let tokens = lex(r#""tab:\t quote:\" unicode:\u{48}i""#);
    assert_eq!(
        tokens[0].kind,
        TokenKind::StringLiteral(StringLiteral { value: "tab:\t quote:\" unicode:Hi".into(), quote: '"' })
    );
}

#[test]
fn unterminated_string_at_newline_is_an_error() {
    let e = lex_err("'abc\ndef'");
    assert_eq!(e.kind, LexErrorKind::UnterminatedStringLiteral);
}

#[test]
fn unterminated_string_at_eof_is_an_error() {
    let e = lex_err("'abc");
    assert_eq!(e.kind, LexErrorKind::UnterminatedStringLiteral);
}
