//! Comment, shebang, and conflict-marker trivia scanning (C6, base spec
//! §4.6). Also the home of the `/` dispatch: deciding between a comment
//! opener, a regex literal (C5), and the division/`/=`-assignment
//! punctuators, since all three start the same way.

use super::error::{LexError, LexErrorKind, LexResult};
use super::position::SourceLocation;
use super::regex::parse_regex_literal;
use super::source::ByteSource;
use super::token::{
    self, ConflictMarker, ConflictMarkerLine, JsDocPart, LineComment, MultilineComment, Token,
    TokenKind,
};
use super::Lexer;

/// Called by the dispatcher on seeing `/`: routes to a line comment, a block
/// comment, a regex literal, or an ordinary `/`/`/=` punctuator.
pub(super) fn scan_slash<S: ByteSource>(
    lexer: &mut Lexer<S>,
    start: SourceLocation,
) -> LexResult<Token> {
    match lexer.peek_n(1).map(|(c, _)| c) {
        Some('/') => scan_line_comment(lexer, start),
        Some('*') => scan_block_comment(lexer, start),
        _ if lexer.regex_allowed() => scan_regex(lexer, start),
        _ => scan_slash_punct(lexer, start),
    }
}

fn scan_slash_punct<S: ByteSource>(
    lexer: &mut Lexer<S>,
    start: SourceLocation,
) -> LexResult<Token> {
    lexer.bump();
    if lexer.peek0().map(|(c, _)| c) == Some('=') {
        lexer.bump();
        Ok(lexer.token(TokenKind::Punct(token::Punct::SlashEq), start))
    } else {
        Ok(lexer.token(TokenKind::Punct(token::Punct::Slash), start))
    }
}

fn scan_line_comment<S: ByteSource>(
    lexer: &mut Lexer<S>,
    start: SourceLocation,
) -> LexResult<Token> {
    lexer.bump();
    lexer.bump();
    let mut text = String::new();
    while let Some((c, _)) = lexer.peek0() {
        if c == '\n' || c == '\r' {
            break;
        }
        text.push(c);
        lexer.bump();
    }
    let text = text.trim_end().to_string();
    Ok(lexer.token(TokenKind::Comment(LineComment { text }), start))
}

fn scan_block_comment<S: ByteSource>(
    lexer: &mut Lexer<S>,
    start: SourceLocation,
) -> LexResult<Token> {
    lexer.bump();
    lexer.bump();
    let mut is_jsdoc = false;
    if lexer.peek0().map(|(c, _)| c) == Some('*')
        && lexer.peek_n(1).map(|(c, _)| c) != Some('*')
    {
        is_jsdoc = true;
        lexer.bump();
    }

    let mut body = String::new();
    loop {
        match lexer.peek0() {
            None => {
                return Err(LexError::new(
                    LexErrorKind::UnterminatedMultilineComment,
                    start,
                ))
            }
            Some(('*', _)) if lexer.peek_n(1).map(|(c, _)| c) == Some('/') => {
                lexer.bump();
                lexer.bump();
                break;
            }
            Some((c, _)) => {
                body.push(c);
                lexer.bump();
            }
        }
    }

    let lines: Vec<String> = body
        .split('\n')
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect();
    let jsdoc_parts = if is_jsdoc {
        lines.iter().map(|line| parse_jsdoc_line(line)).collect()
    } else {
        Vec::new()
    };
    Ok(lexer.token(
        TokenKind::MultilineComment(MultilineComment { lines, is_jsdoc, jsdoc_parts }),
        start,
    ))
}

/// Decomposes one line of a JSDoc body into text, block-tag, and inline-tag
/// parts, grounded on the block/inline tag tables base spec §4.6 cites from
/// `original_source/tsclex/tsclex/tokens/jsdoc_token.cpp`.
///
/// Mirrors that file's trim-whitespace, strip-leading-`*`-run,
/// trim-whitespace-again sequence before looking for a `@tag` — a
/// continuation line's leading `*` would otherwise hide the tag from the
/// block-tag check entirely.
fn parse_jsdoc_line(line: &str) -> Vec<JsDocPart> {
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;
    while i < chars.len() && chars[i].is_whitespace() {
        i += 1;
    }
    while i < chars.len() && chars[i] == '*' {
        i += 1;
    }
    while i < chars.len() && chars[i].is_whitespace() {
        i += 1;
    }
    if chars.get(i) == Some(&'@') {
        let name_start = i + 1;
        let mut j = name_start;
        while j < chars.len() && (chars[j].is_alphanumeric() || chars[j] == '_') {
            j += 1;
        }
        if j > name_start {
            let name: String = chars[name_start..j].iter().collect();
            let mut k = j;
            while k < chars.len() && chars[k] == ' ' {
                k += 1;
            }
            let mut type_annotation = None;
            if chars.get(k) == Some(&'{') {
                let mut end = k + 1;
                while end < chars.len() && chars[end] != '}' {
                    end += 1;
                }
                if end < chars.len() {
                    type_annotation = Some(chars[k + 1..end].iter().collect());
                    k = end + 1;
                }
            }
            let mut parts = vec![JsDocPart::BlockTag { name, type_annotation }];
            parts.extend(scan_text_and_inline_tags(&chars, k));
            return parts;
        }
    }
    scan_text_and_inline_tags(&chars, i)
}

const INLINE_TAGS: &[&str] = &["link", "tutorial"];

fn scan_text_and_inline_tags(chars: &[char], mut i: usize) -> Vec<JsDocPart> {
    let mut parts = Vec::new();
    let mut text = String::new();
    while i < chars.len() {
        if chars[i] == '{' {
            if let Some((name, content, end)) = try_parse_inline_tag(chars, i) {
                if !text.is_empty() {
                    parts.push(JsDocPart::Text(std::mem::take(&mut text)));
                }
                parts.push(JsDocPart::InlineTag { name, content });
                i = end;
                continue;
            }
        }
        text.push(chars[i]);
        i += 1;
    }
    if !text.is_empty() {
        parts.push(JsDocPart::Text(text));
    }
    parts
}

fn try_parse_inline_tag(chars: &[char], start: usize) -> Option<(String, String, usize)> {
    let mut i = start + 1;
    if chars.get(i) != Some(&'@') {
        return None;
    }
    i += 1;
    let name_start = i;
    while i < chars.len() && chars[i].is_alphanumeric() {
        i += 1;
    }
    let name: String = chars[name_start..i].iter().collect();
    if !INLINE_TAGS.contains(&name.as_str()) {
        return None;
    }
    while i < chars.len() && chars[i] == ' ' {
        i += 1;
    }
    let content_start = i;
    while i < chars.len() && chars[i] != '}' {
        i += 1;
    }
    if i >= chars.len() {
        return None;
    }
    let content: String = chars[content_start..i].iter().collect::<String>().trim_end().to_string();
    Some((name, content, i + 1))
}

/// Scans a regex literal once the dispatcher has already decided `/` opens
/// one: walks the pattern to find the unescaped closing `/` (a `[...]`
/// character class makes an interior `/` literal), then hands the isolated
/// pattern and flag text to the recursive-descent parser (C5).
fn scan_regex<S: ByteSource>(lexer: &mut Lexer<S>, start: SourceLocation) -> LexResult<Token> {
    lexer.bump();
    let pattern_start = lexer.here();
    let mut pattern = String::new();
    let mut in_class = false;
    loop {
        match lexer.peek0() {
            None => {
                return Err(LexError::new(
                    LexErrorKind::Regex(super::regex::RegexError::new(
                        super::regex::RegexErrorKind::UnterminatedRegularExpressionLiteral,
                        start,
                    )),
                    lexer.here(),
                ))
            }
            Some(('\n', _)) | Some(('\r', _)) => {
                return Err(LexError::new(
                    LexErrorKind::Regex(super::regex::RegexError::new(
                        super::regex::RegexErrorKind::UnterminatedRegularExpressionLiteral,
                        start,
                    )),
                    lexer.here(),
                ))
            }
            Some(('\\', _)) => {
                pattern.push('\\');
                lexer.bump();
                if let Some((c, _)) = lexer.peek0() {
                    pattern.push(c);
                    lexer.bump();
                }
            }
            Some(('[', _)) => {
                in_class = true;
                pattern.push('[');
                lexer.bump();
            }
            Some((']', _)) if in_class => {
                in_class = false;
                pattern.push(']');
                lexer.bump();
            }
            Some(('/', _)) if !in_class => {
                lexer.bump();
                break;
            }
            Some((c, _)) => {
                pattern.push(c);
                lexer.bump();
            }
        }
    }
    let flags_start = lexer.here();
    let mut flags = String::new();
    while let Some((c, _)) = lexer.peek0() {
        if !(c.is_alphabetic()) {
            break;
        }
        flags.push(c);
        lexer.bump();
    }
    let literal = parse_regex_literal(&pattern, &flags, pattern_start, flags_start, lexer.version())
        .map_err(|e| LexError::new(LexErrorKind::Regex(e.clone()), e.location))?;
    Ok(lexer.token(TokenKind::Regex(literal), start))
}

/// Called only when the cursor is at byte offset 0 and the next two code
/// points are `#!` (base spec §4.6). A newline immediately after the
/// shebang's text terminates it without itself becoming a newline token.
pub(super) fn scan_shebang<S: ByteSource>(lexer: &mut Lexer<S>) -> LexResult<Token> {
    let start = lexer.here();
    lexer.bump();
    lexer.bump();
    let mut text = String::new();
    while let Some((c, _)) = lexer.peek0() {
        if c == '\n' || c == '\r' {
            break;
        }
        text.push(c);
        lexer.bump();
    }
    if matches!(lexer.peek0().map(|(c, _)| c), Some('\n') | Some('\r')) {
        lexer.bump();
    }
    Ok(lexer.token(TokenKind::Shebang(text), start))
}

/// Checked only at the start of a line (base spec §4.6): a run of exactly
/// seven `<`, `=`, `|`, or `>` characters, the conventional Git conflict
/// marker shapes. Scanning resumes on the next line without any mode
/// change.
pub(super) fn try_scan_conflict_marker<S: ByteSource>(
    lexer: &mut Lexer<S>,
) -> LexResult<Option<Token>> {
    let Some((marker_char, _)) = lexer.peek0() else {
        return Ok(None);
    };
    if !matches!(marker_char, '<' | '=' | '|' | '>') {
        return Ok(None);
    }
    for i in 0..7 {
        if lexer.peek_n(i).map(|(c, _)| c) != Some(marker_char) {
            return Ok(None);
        }
    }
    match lexer.peek_n(7).map(|(c, _)| c) {
        Some(' ') | Some('\n') | Some('\r') | None => {}
        _ => return Ok(None),
    }

    let start = lexer.here();
    for _ in 0..7 {
        lexer.bump();
    }
    if lexer.peek0().map(|(c, _)| c) == Some(' ') {
        lexer.bump();
    }
    let mut remainder = String::new();
    while let Some((c, _)) = lexer.peek0() {
        if c == '\n' || c == '\r' {
            break;
        }
        remainder.push(c);
        lexer.bump();
    }
    Ok(Some(lexer.token(
        TokenKind::ConflictMarker(ConflictMarkerLine {
            marker: ConflictMarker { marker: marker_char },
            run_length: 7,
            remainder,
        }),
        start,
    )))
}
