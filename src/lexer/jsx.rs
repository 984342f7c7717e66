//! JSX sub-lexer (C7, base spec §4.7).
//!
//! Activated only under [`super::LanguageVariant::Jsx`]. The mode-stack
//! frames this module drives (`Mode::JsxElement`, `Mode::JsxAttribute`,
//! `Mode::JsxText`, `Mode::JsxExpression`) are declared in [`super`]; this
//! module supplies the state-machine transitions the top-level dispatcher
//! delegates to once one of them is on top. `Mode::JsxExpression` closing
//! (the `}` that ends an attribute or child expression hole) is handled by
//! [`super::Lexer::scan_close_brace`] instead, since it is shared with
//! `${...}` template-hole bookkeeping.

use super::error::{LexError, LexErrorKind, LexResult};
use super::position::SourceLocation;
use super::source::ByteSource;
use super::token::{Token, TokenKind};
use super::{is_unicode_whitespace, unicode_tables, Lexer, Mode};

/// Non-consuming lookahead from a `<` at the cursor: does it look like a
/// JSX element opener rather than a comparison or shift operator? Only the
/// shape is checked here; [`scan_open`] does the actual consuming.
pub(super) fn looks_like_jsx_open<S: ByteSource>(lexer: &mut Lexer<S>) -> bool {
    let Some((c1, _)) = lexer.peek_n(1) else { return false };
    if c1 == '>' {
        return true;
    }
    let profile = lexer.version().identifier_profile();
    if !unicode_tables::is_identifier_start(c1 as u32, profile) {
        return false;
    }
    let mut k = 2;
    loop {
        match lexer.peek_n(k) {
            Some((c, _)) if unicode_tables::is_identifier_part(c as u32, profile, true) => k += 1,
            Some((c, _)) => return matches!(c, ' ' | '\t' | '\n' | '\r' | '>' | '/'),
            None => return false,
        }
    }
}

/// Consumes `<` and an optional element name (empty for a fragment `<>`),
/// pushing `Mode::JsxElement` so the next call dispatches into
/// [`scan_element_body`].
pub(super) fn scan_open<S: ByteSource>(
    lexer: &mut Lexer<S>,
    start: SourceLocation,
) -> LexResult<Token> {
    lexer.bump_expect('<');
    let name = if lexer.peek0().map(|(c, _)| c) == Some('>') {
        String::new()
    } else {
        lexer.consume_identifier_body(true)
    };
    lexer.push_mode(Mode::JsxElement, start.clone(), Some(name.clone()));
    Ok(lexer.token(TokenKind::JsxElementStart(name), start))
}

/// Called while `Mode::JsxElement` is on top: scans an attribute name, the
/// `>`/`/>` that ends the opening tag, or the `=` that opens an attribute
/// value.
pub(super) fn scan_element_body<S: ByteSource>(lexer: &mut Lexer<S>) -> LexResult<Token> {
    skip_jsx_whitespace(lexer);
    let start = lexer.here();
    match lexer.peek0() {
        None => Err(lexer.err(LexErrorKind::UnexpectedEndOfJsxText)),
        Some(('/', _)) if lexer.peek_n(1).map(|(c, _)| c) == Some('>') => {
            lexer.bump();
            lexer.bump();
            lexer.pop_mode();
            Ok(lexer.token(TokenKind::JsxSelfClosing, start))
        }
        Some(('>', _)) => {
            lexer.bump();
            lexer.push_mode(Mode::JsxText, start.clone(), None);
            Ok(lexer.token(TokenKind::JsxElementEnd, start))
        }
        Some(('=', _)) => {
            lexer.bump();
            lexer.push_mode(Mode::JsxAttribute, start.clone(), None);
            scan_attribute_body(lexer)
        }
        Some((c, _)) if unicode_tables::is_identifier_start(c as u32, lexer.version().identifier_profile()) => {
            let name = lexer.consume_identifier_body(true);
            Ok(lexer.token(TokenKind::JsxAttributeName(name), start))
        }
        Some(_) => Err(lexer.err(LexErrorKind::InvalidCharacter)),
    }
}

/// Called while `Mode::JsxAttribute` is on top: a quoted, raw (no escape
/// decoding — JSX attribute strings are plain text, same as HTML) value, or
/// a `{` opening an attribute expression hole.
pub(super) fn scan_attribute_body<S: ByteSource>(lexer: &mut Lexer<S>) -> LexResult<Token> {
    let start = lexer.here();
    match lexer.peek0() {
        Some((quote @ ('"' | '\''), _)) => {
            lexer.bump();
            let mut value = String::new();
            loop {
                match lexer.peek0() {
                    None => return Err(lexer.err(LexErrorKind::UnexpectedEndOfJsxText)),
                    Some((c, _)) if c == quote => {
                        lexer.bump();
                        break;
                    }
                    Some((c, _)) => {
                        value.push(c);
                        lexer.bump();
                    }
                }
            }
            lexer.pop_mode();
            Ok(lexer.token(TokenKind::JsxAttributeValue { value, quote }, start))
        }
        Some(('{', _)) => {
            lexer.bump();
            lexer.push_mode(Mode::JsxExpression, start.clone(), None);
            Ok(lexer.token(TokenKind::JsxAttributeValueStart, start))
        }
        _ => Err(lexer.err(LexErrorKind::InvalidCharacter)),
    }
}

/// Called while `Mode::JsxText` is on top: accumulates XML-entity-decoded
/// text until a `{` (expression hole) or `<` (nested element / closing
/// tag).
pub(super) fn scan_text<S: ByteSource>(lexer: &mut Lexer<S>) -> LexResult<Token> {
    let start = lexer.here();
    match lexer.peek0() {
        None => return Err(lexer.err(LexErrorKind::UnexpectedEndOfJsxText)),
        Some(('{', _)) => {
            lexer.bump();
            lexer.push_mode(Mode::JsxExpression, start.clone(), None);
            return Ok(lexer.token(TokenKind::TemplateExprStart, start));
        }
        Some(('<', _)) if lexer.peek_n(1).map(|(c, _)| c) == Some('/') => {
            return scan_close_tag(lexer, start);
        }
        Some(('<', _)) => return scan_open(lexer, start),
        _ => {}
    }

    let mut text = String::new();
    loop {
        match lexer.peek0() {
            None => return Err(lexer.err(LexErrorKind::UnexpectedEndOfJsxText)),
            Some(('{', _)) | Some(('<', _)) => break,
            Some(('&', _)) => {
                if let Some(decoded) = try_decode_entity(lexer) {
                    text.push(decoded);
                } else {
                    text.push('&');
                    lexer.bump();
                }
            }
            Some((c, _)) => {
                text.push(c);
                lexer.bump();
            }
        }
    }
    Ok(lexer.token(TokenKind::JsxText(text), start))
}

/// Consumes `</name>`, pops the `JsxText` and `JsxElement` frames it closes,
/// and checks the name against the opener's (base spec §4.7; mismatch is
/// `NoJsxClosingTag`, TS17008, anchored at the closing tag).
fn scan_close_tag<S: ByteSource>(lexer: &mut Lexer<S>, start: SourceLocation) -> LexResult<Token> {
    lexer.bump_expect('<');
    lexer.bump_expect('/');
    let name = lexer.consume_identifier_body(true);
    skip_jsx_whitespace(lexer);
    match lexer.peek0() {
        Some(('>', _)) => lexer.bump(),
        _ => return Err(lexer.err(LexErrorKind::UnexpectedEndOfJsxText)),
    };
    lexer.pop_mode();
    let opener = lexer.pop_mode();
    let expected = opener.and_then(|f| f.text).unwrap_or_default();
    if expected != name {
        return Err(LexError::new(LexErrorKind::NoJsxClosingTag { element: expected }, start));
    }
    Ok(lexer.token(TokenKind::JsxElementClose(name), start))
}

fn skip_jsx_whitespace<S: ByteSource>(lexer: &mut Lexer<S>) {
    while let Some((c, _)) = lexer.peek0() {
        if c == '\n' || c == '\r' || is_unicode_whitespace(c) {
            lexer.bump();
        } else {
            break;
        }
    }
}

/// Decodes one `&name;`/`&#NNN;`/`&#xHHHH;` entity at the cursor (the `&`
/// not yet consumed). Returns `None`, consuming nothing, if what follows
/// isn't a well-formed, recognized entity — the caller then treats `&` as a
/// literal character, matching how browsers parse stray ampersands in text.
fn try_decode_entity<S: ByteSource>(lexer: &mut Lexer<S>) -> Option<char> {
    let mut name = String::new();
    let mut k = 1;
    loop {
        match lexer.peek_n(k) {
            Some((';', _)) => break,
            Some((c, _)) if name.len() < 32 && (c.is_ascii_alphanumeric() || c == '#') => {
                name.push(c);
                k += 1;
            }
            _ => return None,
        }
    }
    let decoded = decode_entity_name(&name)?;
    for _ in 0..=k {
        lexer.bump();
    }
    Some(decoded)
}

fn decode_entity_name(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{A0}'),
        _ if name.starts_with("#x") || name.starts_with("#X") => {
            u32::from_str_radix(&name[2..], 16).ok().and_then(char::from_u32)
        }
        _ if name.starts_with('#') => name[1..].parse::<u32>().ok().and_then(char::from_u32),
        _ => None,
    }
}
