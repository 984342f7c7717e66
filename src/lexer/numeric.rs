//! Numeric literal scanning (C3, base spec §4.3).
//!
//! Entry points: [`scan_number`] dispatches to the radix-prefixed scanners
//! (hex/binary/octal), legacy octal, or decimal (with optional fraction and
//! exponent). Values are accumulated in a [`BigInt`] as they're scanned —
//! `num-bigint`/`num-traits` are the arbitrary-precision backing the same
//! way `boa`/`oxc` use them (see `DESIGN.md`) — so a non-BigInt literal that
//! happens to overflow `u64` is still represented exactly.

use num_bigint::BigInt;

use super::error::{LexErrorKind, LexResult};
use super::position::SourceLocation;
use super::source::ByteSource;
use super::token::{
    FloatExponent, FloatLiteral, IntegerLiteral, IntegerSize, NumericBase, NumericLiteral, Token,
    TokenKind,
};
use super::Lexer;

pub(super) fn scan_number<S: ByteSource>(
    lexer: &mut Lexer<S>,
    start: SourceLocation,
) -> LexResult<Token> {
    if lexer.peek0().map(|(c, _)| c) == Some('0') {
        match lexer.peek_n(1).map(|(c, _)| c) {
            Some('x') | Some('X') => return scan_prefixed(lexer, start, NumericBase::Hex, 16),
            Some('b') | Some('B') => return scan_prefixed(lexer, start, NumericBase::Binary, 2),
            Some('o') | Some('O') => return scan_prefixed(lexer, start, NumericBase::Octal, 8),
            Some(c) if digit_value(c, 10).is_some() => {
                return scan_legacy_octal_or_decimal(lexer, start)
            }
            _ => {}
        }
    }
    scan_decimal(lexer, start)
}

fn digit_value(c: char, radix: u32) -> Option<u32> {
    let v = match c {
        '0'..='9' => c as u32 - '0' as u32,
        'a'..='z' => c as u32 - 'a' as u32 + 10,
        'A'..='Z' => c as u32 - 'A' as u32 + 10,
        '\u{FF10}'..='\u{FF19}' => c as u32 - 0xFF10,
        '\u{FF21}'..='\u{FF26}' => c as u32 - 0xFF21 + 10,
        '\u{FF41}'..='\u{FF46}' => c as u32 - 0xFF41 + 10,
        _ => return None,
    };
    (v < radix).then_some(v)
}

fn scan_prefixed<S: ByteSource>(
    lexer: &mut Lexer<S>,
    start: SourceLocation,
    base: NumericBase,
    radix: u32,
) -> LexResult<Token> {
    lexer.bump();
    lexer.bump();
    let (digits, value) = scan_digit_run(lexer, radix, true)?;
    let size = consume_bigint_suffix(lexer);
    Ok(lexer.token(
        TokenKind::Numeric(NumericLiteral::Integer(IntegerLiteral {
            value,
            base,
            digits,
            size,
            legacy_octal: false,
        })),
        start,
    ))
}

/// `0` followed immediately by more digits, no `o`. All-octal digits make it
/// a legacy octal literal; an `8`/`9` anywhere in the run demotes it to an
/// ordinary decimal integer (base spec §4.3). Numeric separators are
/// accepted and validated the same way [`scan_digit_run`] does for the
/// radix-prefixed forms.
fn scan_legacy_octal_or_decimal<S: ByteSource>(
    lexer: &mut Lexer<S>,
    start: SourceLocation,
) -> LexResult<Token> {
    let mut digits = String::new();
    let mut all_octal = true;
    let mut last_was_separator = false;
    let mut last_was_digit = false;
    loop {
        match lexer.peek0() {
            Some(('_', _)) => {
                if !last_was_digit {
                    return Err(lexer.err(LexErrorKind::SeparatorsNotAllowedHere));
                }
                if last_was_separator {
                    return Err(lexer.err(LexErrorKind::MultipleSeparatorsNotAllowed));
                }
                digits.push('_');
                lexer.bump();
                last_was_separator = true;
                last_was_digit = false;
            }
            Some((c, _)) if digit_value(c, 10).is_some() => {
                let d = digit_value(c, 10).unwrap();
                if d > 7 {
                    all_octal = false;
                }
                digits.push(c);
                lexer.bump();
                last_was_separator = false;
                last_was_digit = true;
            }
            _ => break,
        }
    }
    if last_was_separator {
        return Err(lexer.err(LexErrorKind::SeparatorsNotAllowedHere));
    }

    // A `.`, `e`/`E`, or BigInt `n` after a leading-zero run means this was
    // never an octal literal to begin with — fall through to ordinary
    // decimal/float scanning over the whole run.
    let next = lexer.peek0().map(|(c, _)| c);
    if !all_octal || matches!(next, Some('.') | Some('e') | Some('E')) {
        return finish_decimal_after_integer_run(lexer, start, digits);
    }

    let mut value = BigInt::from(0u32);
    for c in digits.chars() {
        if c == '_' {
            continue;
        }
        let d = digit_value(c, 8).expect("all_octal checked above");
        value = value * 8u32 + d;
    }
    Ok(lexer.token(
        TokenKind::Numeric(NumericLiteral::Integer(IntegerLiteral {
            value,
            base: NumericBase::Octal,
            digits,
            size: IntegerSize::Standard,
            legacy_octal: true,
        })),
        start,
    ))
}

fn scan_decimal<S: ByteSource>(lexer: &mut Lexer<S>, start: SourceLocation) -> LexResult<Token> {
    let mut integer_digits = String::new();
    if lexer.peek0().map(|(c, _)| c) != Some('.') {
        let (digits, _) = scan_digit_run(lexer, 10, true)?;
        integer_digits = digits;
    }
    finish_decimal_after_integer_run(lexer, start, integer_digits)
}

/// Shared tail for both the plain-decimal and legacy-octal-gone-decimal
/// paths: optional fraction, optional exponent, optional BigInt suffix (only
/// when neither fraction nor exponent is present).
fn finish_decimal_after_integer_run<S: ByteSource>(
    lexer: &mut Lexer<S>,
    start: SourceLocation,
    integer_digits: String,
) -> LexResult<Token> {
    let mut fraction_digits = None;
    if lexer.peek0().map(|(c, _)| c) == Some('.') {
        lexer.bump();
        let (digits, _) = scan_digit_run(lexer, 10, false)?;
        fraction_digits = Some(digits);
    }

    let mut exponent = None;
    if matches!(lexer.peek0().map(|(c, _)| c), Some('e') | Some('E')) {
        let upper_e = lexer.peek0().map(|(c, _)| c) == Some('E');
        lexer.bump();
        let mut negative = false;
        let mut explicit_sign = false;
        if matches!(lexer.peek0().map(|(c, _)| c), Some('+') | Some('-')) {
            explicit_sign = true;
            negative = lexer.peek0().map(|(c, _)| c) == Some('-');
            lexer.bump();
        }
        let (digits, _) = scan_digit_run(lexer, 10, true)?;
        exponent = Some(FloatExponent { upper_e, negative, explicit_sign, digits });
    }

    if fraction_digits.is_none() && exponent.is_none() {
        let mut value = BigInt::from(0u32);
        for c in integer_digits.chars() {
            if c == '_' {
                continue;
            }
            let d = digit_value(c, 10).expect("decimal digit run");
            value = value * 10u32 + d;
        }
        let size = consume_bigint_suffix(lexer);
        return Ok(lexer.token(
            TokenKind::Numeric(NumericLiteral::Integer(IntegerLiteral {
                value,
                base: NumericBase::Decimal,
                digits: integer_digits,
                size,
                legacy_octal: false,
            })),
            start,
        ));
    }

    let mut repr = integer_digits.replace('_', "");
    if repr.is_empty() {
        repr.push('0');
    }
    if let Some(frac) = &fraction_digits {
        repr.push('.');
        let cleaned = frac.replace('_', "");
        repr.push_str(if cleaned.is_empty() { "0" } else { &cleaned });
    }
    if let Some(exp) = &exponent {
        repr.push('e');
        if exp.explicit_sign {
            repr.push(if exp.negative { '-' } else { '+' });
        }
        repr.push_str(&exp.digits.replace('_', ""));
    }
    let value: f64 = repr
        .parse()
        .map_err(|_| lexer.err(LexErrorKind::InvalidNumericLiteral))?;
    Ok(lexer.token(
        TokenKind::Numeric(NumericLiteral::Float(FloatLiteral {
            value,
            integer_digits,
            fraction_digits,
            exponent,
        })),
        start,
    ))
}

/// Consumes a trailing BigInt `n` suffix if present. Legal only directly
/// after the last significant digit — callers only invoke this where the
/// digit run has already been confirmed not to end in a separator.
fn consume_bigint_suffix<S: ByteSource>(lexer: &mut Lexer<S>) -> IntegerSize {
    if lexer.peek0().map(|(c, _)| c) == Some('n') {
        lexer.bump();
        IntegerSize::BigInt
    } else {
        IntegerSize::Standard
    }
}

/// Consumes a run of digits in `radix`, interleaved with `_` separators.
/// Separators may not open or close the run, nor repeat consecutively
/// (base spec §4.3); both are reported relative to the cursor at the
/// offending character. When `require_nonempty` is false, a run with zero
/// digits is accepted (the decimal point's fractional half may be empty, as
/// in `1.`).
fn scan_digit_run<S: ByteSource>(
    lexer: &mut Lexer<S>,
    radix: u32,
    require_nonempty: bool,
) -> LexResult<(String, BigInt)> {
    let mut raw = String::new();
    let mut value = BigInt::from(0u32);
    let mut last_was_separator = false;
    let mut last_was_digit = false;
    loop {
        match lexer.peek0() {
            Some(('_', _)) => {
                if !last_was_digit {
                    return Err(lexer.err(LexErrorKind::SeparatorsNotAllowedHere));
                }
                if last_was_separator {
                    return Err(lexer.err(LexErrorKind::MultipleSeparatorsNotAllowed));
                }
                raw.push('_');
                lexer.bump();
                last_was_separator = true;
                last_was_digit = false;
            }
            Some((c, _)) if digit_value(c, radix).is_some() => {
                let d = digit_value(c, radix).unwrap();
                value = value * radix + d;
                raw.push(c);
                lexer.bump();
                last_was_separator = false;
                last_was_digit = true;
            }
            _ => break,
        }
    }
    if last_was_separator {
        return Err(lexer.err(LexErrorKind::SeparatorsNotAllowedHere));
    }
    if require_nonempty && raw.is_empty() {
        return Err(lexer.err(LexErrorKind::InvalidNumericLiteral));
    }
    Ok((raw, value))
}

#[cfg(test)]
mod tests {
    use super::super::{LanguageVariant, LanguageVersion};
    use super::*;
    use crate::lexer::Lexer;

    fn scan(src: &str) -> NumericLiteral {
        let mut lexer = Lexer::with_options(
            "t",
            src.as_bytes(),
            LanguageVersion::LATEST,
            LanguageVariant::TypeScript,
        );
        match lexer.next().unwrap().unwrap().kind {
            TokenKind::Numeric(n) => n,
            other => panic!("expected a numeric literal, got {other:?}"),
        }
    }

    #[test]
    fn decimal_integer() {
        let n = scan("42");
        assert_eq!(n.source_text(), "42");
    }

    #[test]
    fn hex_bigint() {
        let n = scan("0x1Fn");
        match n {
            NumericLiteral::Integer(i) => {
                assert_eq!(i.size, IntegerSize::BigInt);
                assert_eq!(i.value, BigInt::from(31));
                assert_eq!(i.base, NumericBase::Hex);
            }
            _ => panic!("expected an integer"),
        }
    }

    #[test]
    fn binary_with_separators() {
        let n = scan("0b1010_1010");
        match n {
            NumericLiteral::Integer(i) => assert_eq!(i.value, BigInt::from(0b1010_1010)),
            _ => panic!("expected an integer"),
        }
    }

    #[test]
    fn legacy_octal() {
        let n = scan("0755");
        match n {
            NumericLiteral::Integer(i) => {
                assert!(i.legacy_octal);
                assert_eq!(i.base, NumericBase::Octal);
                assert_eq!(i.value, BigInt::from(0o755));
                assert_eq!(i.source_text(), "0755");
            }
            _ => panic!("expected an integer"),
        }
    }

    #[test]
    fn legacy_octal_with_separator() {
        let n = scan("07_5");
        match n {
            NumericLiteral::Integer(i) => {
                assert!(i.legacy_octal);
                assert_eq!(i.base, NumericBase::Octal);
                assert_eq!(i.value, BigInt::from(0o75));
            }
            _ => panic!("expected an integer"),
        }
    }

    #[test]
    fn leading_zero_with_eight_is_decimal() {
        let n = scan("0789");
        match n {
            NumericLiteral::Integer(i) => {
                assert!(!i.legacy_octal);
                assert_eq!(i.base, NumericBase::Decimal);
                assert_eq!(i.value, BigInt::from(789));
            }
            _ => panic!("expected an integer"),
        }
    }

    #[test]
    fn float_with_exponent() {
        let n = scan("1.5e10");
        match n {
            NumericLiteral::Float(f) => assert_eq!(f.value, 1.5e10),
            _ => panic!("expected a float"),
        }
    }

    #[test]
    fn trailing_dot_has_no_fraction_digits() {
        let n = scan("1.");
        match n {
            NumericLiteral::Float(f) => assert_eq!(f.fraction_digits, Some(String::new())),
            _ => panic!("expected a float"),
        }
    }

    #[test]
    fn leading_dot_has_no_integer_digits() {
        let n = scan(".5");
        match n {
            NumericLiteral::Float(f) => {
                assert_eq!(f.integer_digits, "");
                assert_eq!(f.value, 0.5);
            }
            _ => panic!("expected a float"),
        }
    }

    #[test]
    fn separator_adjacent_to_decimal_point_is_an_error() {
        let mut lexer = Lexer::with_options(
            "t",
            "1_.5".as_bytes(),
            LanguageVersion::LATEST,
            LanguageVariant::TypeScript,
        );
        let err = lexer.next().unwrap().unwrap_err();
        assert_eq!(err.kind, LexErrorKind::SeparatorsNotAllowedHere);
    }

    #[test]
    fn fullwidth_digits_are_accepted() {
        let n = scan("\u{FF11}\u{FF12}");
        match n {
            NumericLiteral::Integer(i) => assert_eq!(i.value, BigInt::from(12)),
            _ => panic!("expected an integer"),
        }
    }
}
