//! Template literal body scanning (C4, base spec §4.4).
//!
//! The opening backtick and the `TemplateStart` token are produced by the
//! top-level dispatcher ([`super::Lexer::dispatch`]); this module only
//! scans what comes *after* that, once `Mode::TemplateLiteral` is the top of
//! the mode stack. `${`/`}` nesting back into ordinary expression scanning
//! is handled by the dispatcher's brace bookkeeping, not here.

use super::error::LexErrorKind;
use super::source::ByteSource;
use super::strings::read_escape;
use super::token::{Token, TokenKind};
use super::{LexResult, Lexer, Mode};

/// Called when `Mode::TemplateLiteral` is on top of the mode stack: decides
/// between closing the template, opening a `${...}` hole, or accumulating a
/// literal chunk.
pub(super) fn scan_literal_body<S: ByteSource>(lexer: &mut Lexer<S>) -> LexResult<Token> {
    let start = lexer.here();

    if lexer.peek0().map(|(c, _)| c) == Some('`') {
        lexer.bump();
        lexer.pop_mode();
        return Ok(lexer.token(TokenKind::TemplateEnd, start));
    }
    if lexer.peek_n(0) == Some(('$', 1)) && lexer.peek_n(1) == Some(('{', 1)) {
        lexer.bump();
        lexer.bump();
        lexer.push_mode(Mode::TemplateExpression, start.clone(), None);
        return Ok(lexer.token(TokenKind::TemplateExprStart, start));
    }

    let mut text = String::new();
    loop {
        match lexer.peek0() {
            None => return Err(lexer.err(LexErrorKind::UnterminatedTemplateLiteral)),
            Some(('`', _)) => break,
            Some(('$', _)) if lexer.peek_n(1) == Some(('{', 1)) => break,
            Some(('\\', _)) => {
                lexer.bump();
                if let Some(decoded) = read_escape(lexer)? {
                    text.push(decoded);
                }
            }
            Some(('\r', _)) => {
                // CRLF/lone-CR normalize to LF inside template chunks (base
                // spec §4.4); `bump` already collapses the pair, we only
                // need to record a single `\n`.
                lexer.bump();
                text.push('\n');
            }
            Some((c, _)) => {
                text.push(c);
                lexer.bump();
            }
        }
    }
    Ok(lexer.token(TokenKind::TemplateChunk(text), start))
}
