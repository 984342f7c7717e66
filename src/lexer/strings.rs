//! Plain string literal scanning (C4, base spec §4.4).
//!
//! The escape decoder here (`read_escape`/`read_unicode_escape_value`) is
//! shared with [`super::template`], which accumulates the same escapes
//! inside a template chunk between `` ` `` / `${` boundaries.

use super::error::{LexErrorKind, LexResult};
use super::escape::simple_escape;
use super::position::SourceLocation;
use super::source::ByteSource;
use super::token::{StringLiteral, Token, TokenKind};
use super::Lexer;

pub(super) fn scan_string<S: ByteSource>(
    lexer: &mut Lexer<S>,
    start: SourceLocation,
) -> LexResult<Token> {
    let quote = lexer.bump().expect("caller peeked a quote");
    let mut value = String::new();
    loop {
        match lexer.peek0() {
            None => return Err(lexer.err(LexErrorKind::UnterminatedStringLiteral)),
            Some((c, _)) if c == quote => {
                lexer.bump();
                break;
            }
            Some(('\n', _)) | Some(('\r', _)) => {
                return Err(lexer.err(LexErrorKind::UnterminatedStringLiteral))
            }
            Some(('\\', _)) => {
                lexer.bump();
                if let Some(decoded) = read_escape(lexer)? {
                    value.push(decoded);
                }
            }
            Some((c, _)) => {
                value.push(c);
                lexer.bump();
            }
        }
    }
    Ok(lexer.token(TokenKind::StringLiteral(StringLiteral { value, quote }), start))
}

/// Decodes one escape sequence, the backslash already consumed. `None`
/// signals a line continuation (the escape produces no character).
pub(super) fn read_escape<S: ByteSource>(lexer: &mut Lexer<S>) -> LexResult<Option<char>> {
    let Some((c, _)) = lexer.peek0() else {
        return Err(lexer.err(LexErrorKind::UnterminatedStringLiteral));
    };
    match c {
        '\r' => {
            lexer.bump();
            if let Some(('\n', _)) = lexer.peek0() {
                lexer.bump();
            }
            Ok(None)
        }
        '\n' => {
            lexer.bump();
            Ok(None)
        }
        'x' => {
            lexer.bump();
            let mut value = 0u32;
            for _ in 0..2 {
                let Some((d, _)) = lexer.peek0() else {
                    return Err(lexer.err(LexErrorKind::InvalidEscapeSequence));
                };
                let digit = d
                    .to_digit(16)
                    .ok_or_else(|| lexer.err(LexErrorKind::InvalidEscapeSequence))?;
                value = value * 16 + digit;
                lexer.bump();
            }
            Ok(Some(char::from_u32(value).unwrap_or('\u{FFFD}')))
        }
        'u' => {
            lexer.bump();
            Ok(Some(read_unicode_escape(lexer)?))
        }
        '0'..='7' => Ok(Some(read_octal_escape(lexer)?)),
        '8' | '9' => {
            lexer.bump();
            Ok(Some(c))
        }
        c => {
            if let Some(decoded) = simple_escape(c) {
                lexer.bump();
                Ok(Some(decoded))
            } else if c.is_ascii_alphanumeric() {
                Err(lexer.err(LexErrorKind::InvalidEscapeSequence))
            } else {
                lexer.bump();
                Ok(Some(c))
            }
        }
    }
}

/// Reads a `\u` escape (the `u` already consumed), combining a high/low
/// surrogate pair spread across two consecutive `\uHHHH` escapes into one
/// code point, per base spec §4.4. A high surrogate not followed by a low
/// one has no Unicode scalar value of its own; this lexer represents it as
/// U+FFFD rather than rejecting the literal outright (resolved open
/// question, see `DESIGN.md`).
fn read_unicode_escape<S: ByteSource>(lexer: &mut Lexer<S>) -> LexResult<char> {
    let value = read_unicode_escape_value(lexer)?;
    if let Some(c) = char::from_u32(value) {
        return Ok(c);
    }
    if (0xD800..=0xDBFF).contains(&value) {
        if lexer.peek_n(0) == Some(('\\', 1)) && lexer.peek_n(1) == Some(('u', 1)) {
            lexer.bump();
            lexer.bump();
            let low = read_unicode_escape_value(lexer)?;
            if (0xDC00..=0xDFFF).contains(&low) {
                let cp = 0x10000 + (value - 0xD800) * 0x400 + (low - 0xDC00);
                return Ok(char::from_u32(cp).unwrap_or('\u{FFFD}'));
            }
            // The second `\uHHHH` wasn't a low surrogate; it has already been
            // consumed as its own escape value and is simply dropped here,
            // same as the lone-surrogate case below.
        }
    }
    Ok('\u{FFFD}')
}

pub(super) fn read_unicode_escape_value<S: ByteSource>(lexer: &mut Lexer<S>) -> LexResult<u32> {
    if lexer.peek0().map(|(c, _)| c) == Some('{') {
        lexer.bump();
        let mut value: u32 = 0;
        let mut digits = 0;
        loop {
            match lexer.peek0() {
                Some(('}', _)) => break,
                Some((c, _)) => {
                    let digit = c
                        .to_digit(16)
                        .ok_or_else(|| lexer.err(LexErrorKind::InvalidEscapeSequence))?;
                    value = value
                        .checked_mul(16)
                        .and_then(|v| v.checked_add(digit))
                        .ok_or_else(|| lexer.err(LexErrorKind::UnicodeValueOutOfRange))?;
                    digits += 1;
                    lexer.bump();
                }
                None => return Err(lexer.err(LexErrorKind::UnterminatedUnicodeEscapeSequence)),
            }
        }
        if digits == 0 {
            return Err(lexer.err(LexErrorKind::InvalidEscapeSequence));
        }
        lexer.bump();
        if value > 0x10FFFF {
            return Err(lexer.err(LexErrorKind::UnicodeValueOutOfRange));
        }
        Ok(value)
    } else {
        let mut value = 0u32;
        for _ in 0..4 {
            let Some((c, _)) = lexer.peek0() else {
                return Err(lexer.err(LexErrorKind::UnterminatedUnicodeEscapeSequence));
            };
            let digit = c
                .to_digit(16)
                .ok_or_else(|| lexer.err(LexErrorKind::InvalidEscapeSequence))?;
            value = value * 16 + digit;
            lexer.bump();
        }
        Ok(value)
    }
}

/// Legacy octal escape: `\0`..`\377`, one to three octal digits, clamped so
/// the value always fits in a byte (base spec §4.4).
fn read_octal_escape<S: ByteSource>(lexer: &mut Lexer<S>) -> LexResult<char> {
    let mut value = 0u32;
    let mut count = 0;
    while count < 3 {
        let Some((d, _)) = lexer.peek0() else { break };
        if !('0'..='7').contains(&d) {
            break;
        }
        let next_value = value * 8 + d.to_digit(8).unwrap();
        if next_value > 0xFF {
            break;
        }
        value = next_value;
        lexer.bump();
        count += 1;
    }
    Ok(char::from_u32(value).unwrap_or('\u{FFFD}'))
}
