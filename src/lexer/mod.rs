//! The context-sensitive tokenizer (C8) and the mode stack that drives it.
//!
//! [`Lexer`] ties together every other component in this module: it owns the
//! [`LookaheadBuffer`] (C1), consults [`keywords`]/[`unicode_tables`] (C2) on
//! identifier characters, and delegates to [`numeric`] (C3),
//! [`strings`]/[`template`] (C4), [`regex`] (C5), [`comments`] (C6), and
//! [`jsx`] (C7) once it has recognized which sub-scanner a code point starts.
//!
//! `Lexer` implements `Iterator<Item = LexResult<Token>>` directly (base spec
//! §6): each call to `next()` advances the cursor by exactly one token. The
//! iterator is fused once it yields an error or an unterminated-mode-stack
//! failure at end of stream, matching the teacher's `LexResult`-returning,
//! fail-fast `Lexer::lex` (see `why_lib::lexer::Lexer::lex`) generalized from
//! "lex everything up front" to "lex lazily, one token per call".

pub mod comments;
pub mod error;
pub mod escape;
pub mod jsx;
pub mod keywords;
pub mod numeric;
pub mod position;
pub mod regex;
pub mod source;
pub mod strings;
pub mod template;
pub mod token;
pub mod unicode_tables;
pub mod version;

use log::trace;

pub use error::{LexError, LexErrorKind, LexResult};
pub use position::{Position, SourceId, SourceLocation};
pub use source::ByteSource;
pub use token::{Token, TokenKind};
pub use version::{LanguageVariant, LanguageVersion};

use source::LookaheadBuffer;

/// A mode-stack frame (base spec §3). Only `Jsx*` element frames carry
/// `text`, used to validate a closing tag's name against its opener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    TemplateLiteral,
    TemplateExpression,
    NestedBrace,
    JsxElement,
    JsxAttribute,
    JsxExpression,
    JsxText,
}

#[derive(Debug, Clone)]
pub struct ModeFrame {
    pub mode: Mode,
    pub location: SourceLocation,
    pub text: Option<String>,
}

/// The TypeScript/JavaScript/JSX tokenizer.
///
/// Construct with [`Lexer::new`], then drive it as an `Iterator`.
pub struct Lexer<S> {
    buf: LookaheadBuffer<S>,
    pos: Position,
    source: SourceId,
    version: LanguageVersion,
    variant: LanguageVariant,
    modes: Vec<ModeFrame>,
    /// Whether a `/` at the cursor may start a regex literal rather than a
    /// division operator (base spec §4.5).
    regex_allowed: bool,
    /// Set by a just-emitted `@`; the very next dispatch must see an
    /// identifier-start code point (base spec §9, stray-`@` open question).
    force_identifier: bool,
    /// Set for the one identifier scan immediately following a consumed
    /// `force_identifier` check; that identifier is never looked up in the
    /// keyword table, so `@readonly` yields `@` then an identifier, not `@`
    /// then `Keyword::Readonly`.
    suppress_keyword_lookup: bool,
    /// Fused once an error has been yielded, or once EOF is reached with an
    /// unterminated mode stack (base spec §7).
    fused: bool,
}

impl<S: ByteSource> Lexer<S> {
    pub fn new(source: impl Into<SourceId>, byte_source: S) -> Self {
        Self::with_options(source, byte_source, LanguageVersion::LATEST, LanguageVariant::TypeScript)
    }

    pub fn with_options(
        source: impl Into<SourceId>,
        byte_source: S,
        version: LanguageVersion,
        variant: LanguageVariant,
    ) -> Self {
        Self {
            buf: LookaheadBuffer::new(byte_source),
            pos: Position::start(),
            source: source.into(),
            version,
            variant,
            modes: Vec::new(),
            regex_allowed: true,
            force_identifier: false,
            suppress_keyword_lookup: false,
            fused: false,
        }
    }

    pub fn version(&self) -> LanguageVersion {
        self.version
    }

    pub fn variant(&self) -> LanguageVariant {
        self.variant
    }

    fn identifier_profile(&self) -> version::IdentifierProfile {
        self.version.identifier_profile()
    }

    // ---- cursor primitives (C1 glue) -----------------------------------

    /// The code point `n` positions ahead of the cursor, with its encoded
    /// byte length. `n == 0` is the code point at the cursor itself.
    pub(crate) fn peek_n(&mut self, n: usize) -> Option<(char, usize)> {
        let mut byte_offset = 0usize;
        for i in 0..=n {
            let (cp, len) = self.buf.peek_at_offset(byte_offset);
            if len == 0 {
                return None;
            }
            if i == n {
                return Some((char::from_u32(cp).unwrap_or('\u{FFFD}'), len));
            }
            byte_offset += len;
        }
        None
    }

    pub(crate) fn peek0(&mut self) -> Option<(char, usize)> {
        self.peek_n(0)
    }

    pub(crate) fn is_eof(&mut self) -> bool {
        self.peek0().is_none()
    }

    /// Consumes and returns the code point at the cursor, updating line,
    /// column, and byte offset. A `\r` greedily swallows a following `\n`
    /// (CRLF collapses to a single logical newline, base spec §3).
    pub(crate) fn bump(&mut self) -> Option<char> {
        let (c, len) = self.peek0()?;
        self.buf.advance(len);
        match c {
            '\n' => self.pos.advance_line(len),
            '\r' => {
                let mut total = len;
                if let Some(('\n', nlen)) = self.peek0() {
                    self.buf.advance(nlen);
                    total += nlen;
                }
                self.pos.advance_line(total);
            }
            _ => self.pos.advance_column(len),
        }
        Some(c)
    }

    /// Consumes the code point at the cursor, asserting it matches `expect`.
    /// Used where the caller has already peeked and branched on the value.
    pub(crate) fn bump_expect(&mut self, expect: char) {
        let c = self.bump();
        debug_assert_eq!(c, Some(expect));
    }

    pub(crate) fn here(&self) -> SourceLocation {
        SourceLocation::new(self.source.clone(), self.pos)
    }

    pub(crate) fn err(&self, kind: LexErrorKind) -> LexError {
        LexError::new(kind, self.here())
    }

    pub(crate) fn token(&self, kind: TokenKind, start: SourceLocation) -> Token {
        Token::new(kind, start)
    }

    // ---- mode stack ------------------------------------------------------

    pub(crate) fn push_mode(&mut self, mode: Mode, location: SourceLocation, text: Option<String>) {
        trace!("push mode {mode:?} at {location}");
        self.modes.push(ModeFrame { mode, location, text });
    }

    pub(crate) fn pop_mode(&mut self) -> Option<ModeFrame> {
        let frame = self.modes.pop();
        if let Some(frame) = &frame {
            trace!("pop mode {:?}", frame.mode);
        }
        frame
    }

    pub(crate) fn top_mode(&self) -> Option<&Mode> {
        self.modes.last().map(|f| &f.mode)
    }

    // ---- the dispatch loop (C8) -------------------------------------------

    fn next_token(&mut self) -> LexResult<Option<Token>> {
        if let Some(mode) = self.top_mode() {
            match mode {
                Mode::TemplateLiteral => return template::scan_literal_body(self).map(Some),
                Mode::JsxElement => return jsx::scan_element_body(self).map(Some),
                Mode::JsxAttribute => return jsx::scan_attribute_body(self).map(Some),
                Mode::JsxText => return jsx::scan_text(self).map(Some),
                Mode::TemplateExpression | Mode::NestedBrace | Mode::JsxExpression => {}
            }
        }

        if let Some(tok) = self.skip_trivia_collapsing_newlines()? {
            return Ok(Some(tok));
        }

        if self.pos.byte_offset == 0 {
            if let (Some(('#', _)), Some(('!', _))) = (self.peek_n(0), self.peek_n(1)) {
                return comments::scan_shebang(self).map(Some);
            }
        }

        if self.pos.column == 0 {
            if let Some(tok) = comments::try_scan_conflict_marker(self)? {
                return Ok(Some(tok));
            }
        }

        let Some((c, _)) = self.peek0() else {
            return Ok(None);
        };

        if self.force_identifier {
            self.force_identifier = false;
            if !unicode_tables::is_identifier_start(c as u32, self.identifier_profile()) {
                return Err(self.err(LexErrorKind::InvalidCharacter));
            }
            self.suppress_keyword_lookup = true;
        }

        self.dispatch(c).map(Some)
    }

    fn dispatch(&mut self, c: char) -> LexResult<Token> {
        let start = self.here();

        if unicode_tables::is_identifier_start(c as u32, self.identifier_profile()) {
            return self.scan_identifier(start);
        }
        if c == '#' {
            return self.scan_private_identifier(start);
        }
        if c.is_ascii_digit() || is_fullwidth_digit(c) {
            return numeric::scan_number(self, start);
        }
        if c == '.' {
            if let Some((next, _)) = self.peek_n(1) {
                if next.is_ascii_digit() || is_fullwidth_digit(next) {
                    return numeric::scan_number(self, start);
                }
            }
        }
        if c == '"' || c == '\'' {
            return strings::scan_string(self, start);
        }
        if c == '`' {
            self.bump_expect('`');
            self.push_mode(Mode::TemplateLiteral, start.clone(), None);
            return Ok(self.token(TokenKind::TemplateStart, start));
        }
        if c == '/' {
            return comments::scan_slash(self, start);
        }
        if c == '<' && self.variant == LanguageVariant::Jsx && jsx::looks_like_jsx_open(self) {
            return jsx::scan_open(self, start);
        }
        if c == '@' {
            self.bump_expect('@');
            self.force_identifier = true;
            return Ok(self.token(TokenKind::Punct(token::Punct::At), start));
        }
        if c == '{' {
            self.bump_expect('{');
            if matches!(
                self.top_mode(),
                Some(Mode::TemplateExpression) | Some(Mode::NestedBrace) | Some(Mode::JsxExpression)
            ) {
                self.push_mode(Mode::NestedBrace, start.clone(), None);
            }
            return Ok(self.token(TokenKind::Punct(token::Punct::LBrace), start));
        }
        if c == '}' {
            return self.scan_close_brace(start);
        }

        self.scan_punct(start)
            .ok_or_else(|| self.err(LexErrorKind::InvalidCharacter))
    }

    fn scan_close_brace(&mut self, start: SourceLocation) -> LexResult<Token> {
        match self.top_mode() {
            Some(Mode::NestedBrace) => {
                self.bump_expect('}');
                self.pop_mode();
                Ok(self.token(TokenKind::Punct(token::Punct::RBrace), start))
            }
            Some(Mode::TemplateExpression) => {
                self.bump_expect('}');
                self.pop_mode();
                Ok(self.token(TokenKind::TemplateEnd, start))
            }
            Some(Mode::JsxExpression) => {
                self.bump_expect('}');
                self.pop_mode();
                match self.top_mode() {
                    Some(Mode::JsxAttribute) => {
                        self.pop_mode();
                        Ok(self.token(TokenKind::JsxAttributeValueEnd, start))
                    }
                    _ => Ok(self.token(TokenKind::TemplateExprEnd, start)),
                }
            }
            _ => {
                self.bump_expect('}');
                Ok(self.token(TokenKind::Punct(token::Punct::RBrace), start))
            }
        }
    }

    fn scan_private_identifier(&mut self, start: SourceLocation) -> LexResult<Token> {
        self.bump_expect('#');
        let Some((c, _)) = self.peek0() else {
            return Err(self.err(LexErrorKind::InvalidIdentifier));
        };
        if c == '!' {
            return Err(self.err(LexErrorKind::MisplacedShebang));
        }
        if !unicode_tables::is_identifier_start(c as u32, self.identifier_profile()) {
            return Err(self.err(LexErrorKind::InvalidIdentifier));
        }
        let name = self.consume_identifier_body(false);
        Ok(self.token(
            TokenKind::Identifier(token::Identifier { name, private: true }),
            start,
        ))
    }

    fn scan_identifier(&mut self, start: SourceLocation) -> LexResult<Token> {
        let name = self.consume_identifier_body(false);
        let suppress = std::mem::take(&mut self.suppress_keyword_lookup);
        if !suppress {
            if let Some(keyword) = keywords::lookup(&name, self.version) {
                return Ok(self.token(TokenKind::Keyword(keyword), start));
            }
        }
        Ok(self.token(
            TokenKind::Identifier(token::Identifier { name, private: false }),
            start,
        ))
    }

    /// Consumes an identifier body starting at the cursor (the start
    /// character has already been validated by the caller). `jsx` widens the
    /// continue-set with `-`, `:`, `.` (base spec §4.2).
    pub(crate) fn consume_identifier_body(&mut self, jsx: bool) -> String {
        let mut name = String::new();
        let profile = self.identifier_profile();
        while let Some((c, _)) = self.peek0() {
            if name.is_empty() {
                if !unicode_tables::is_identifier_start(c as u32, profile) {
                    break;
                }
            } else if !unicode_tables::is_identifier_part(c as u32, profile, jsx) {
                break;
            }
            name.push(c);
            self.bump();
        }
        name
    }

    // ---- whitespace / newline / shebang ----------------------------------

    fn skip_trivia_collapsing_newlines(&mut self) -> LexResult<Option<Token>> {
        let mut saw_newline = false;
        loop {
            let Some((c, _)) = self.peek0() else { break };
            if c == '\n' || c == '\r' {
                saw_newline = true;
                self.bump();
                continue;
            }
            if is_unicode_whitespace(c) {
                self.bump();
                continue;
            }
            break;
        }
        if saw_newline {
            let loc = self.here();
            return Ok(Some(self.token(TokenKind::Newline, loc)));
        }
        Ok(None)
    }

    // ---- punctuators (maximal munch) -------------------------------------

    fn scan_punct(&mut self, start: SourceLocation) -> Option<Token> {
        use token::Punct::*;
        const TABLE: &[(&str, token::Punct)] = &[
            (">>>=", RShift3Eq),
            ("...", DotDotDot),
            ("===", EqEqEq),
            ("!==", NotEqEq),
            (">>>", RShift3),
            ("**=", StarStarEq),
            ("<<=", LShiftEq),
            (">>=", RShiftEq),
            ("&&=", AmpAmpEq),
            ("||=", PipePipeEq),
            ("??=", QuestionQuestionEq),
            ("=>", Arrow),
            ("==", EqEq),
            ("!=", NotEq),
            ("<=", LtEq),
            (">=", GtEq),
            ("&&", AmpAmp),
            ("||", PipePipe),
            ("??", QuestionQuestion),
            ("?.", QuestionDot),
            ("++", PlusPlus),
            ("--", MinusMinus),
            ("**", StarStar),
            ("<<", LShift),
            (">>", RShift),
            ("+=", PlusEq),
            ("-=", MinusEq),
            ("*=", StarEq),
            ("%=", PercentEq),
            ("&=", AmpEq),
            ("|=", PipeEq),
            ("^=", CaretEq),
            ("(", LParen),
            (")", RParen),
            ("[", LBracket),
            ("]", RBracket),
            (".", Dot),
            (";", Semicolon),
            (",", Comma),
            ("<", LAngle),
            (">", RAngle),
            ("+", Plus),
            ("-", Minus),
            ("*", Star),
            ("%", Percent),
            ("&", Amp),
            ("|", Pipe),
            ("^", Caret),
            ("!", Not),
            ("~", Tilde),
            ("?", Question),
            ("=", Eq),
            (":", Colon),
        ];

        // `?.` followed by a digit is `?` then a number (base spec §4.8), so
        // a ternary like `a ?.5 : .5` still lexes the numeric half sanely.
        if self.peek_n(0) == Some(('?', 1)) && self.peek_n(1) == Some(('.', 1)) {
            if let Some((d, _)) = self.peek_n(2) {
                if d.is_ascii_digit() {
                    self.bump_expect('?');
                    return Some(self.token(TokenKind::Punct(Question), start));
                }
            }
        }

        for &(spelling, punct) in TABLE {
            if self.matches_ahead(spelling) {
                for _ in spelling.chars() {
                    self.bump();
                }
                return Some(self.token(TokenKind::Punct(punct), start));
            }
        }
        None
    }

    fn matches_ahead(&mut self, spelling: &str) -> bool {
        for (i, expect) in spelling.chars().enumerate() {
            match self.peek_n(i) {
                Some((c, _)) if c == expect => {}
                _ => return false,
            }
        }
        true
    }
}

impl<S: ByteSource> Iterator for Lexer<S> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.fused {
            return None;
        }
        match self.next_token() {
            Ok(Some(tok)) => {
                self.update_regex_allowed(&tok.kind);
                Some(Ok(tok))
            }
            Ok(None) => {
                if let Some(frame) = self.modes.first() {
                    let err = LexError::new(LexErrorKind::UnterminatedNestedMode, frame.location.clone());
                    self.fused = true;
                    return Some(Err(err));
                }
                self.fused = true;
                None
            }
            Err(e) => {
                self.fused = true;
                Some(Err(e))
            }
        }
    }
}

impl<S> Lexer<S> {
    /// Updates the regex-allowed-context flag (base spec §4.5) from the kind
    /// of the token just emitted.
    fn update_regex_allowed(&mut self, kind: &TokenKind) {
        use token::Punct;
        use TokenKind::*;
        self.regex_allowed = match kind {
            Identifier(_) | Numeric(_) | StringLiteral(_) | TemplateEnd | Regex(_) => false,
            Punct(p) => !matches!(
                p,
                Punct::RParen | Punct::RBracket | Punct::RBrace | Punct::PlusPlus | Punct::MinusMinus
            ),
            Keyword(_) => true,
            Newline | Comment(_) | MultilineComment(_) | ConflictMarker(_) | Shebang(_)
            | EndOfFile => self.regex_allowed,
            JsxElementEnd | JsxSelfClosing | JsxElementClose(_) | JsxText(_)
            | JsxAttributeValue { .. } | JsxAttributeName(_) => false,
            TemplateStart | TemplateChunk(_) | TemplateExprStart | TemplateExprEnd
            | JsxAttributeValueStart | JsxAttributeValueEnd | JsxElementStart(_) => true,
        };
    }

    pub(crate) fn regex_allowed(&self) -> bool {
        self.regex_allowed
    }
}

fn is_fullwidth_digit(c: char) -> bool {
    ('\u{FF10}'..='\u{FF19}').contains(&c)
}

/// The full Unicode whitespace set the dispatcher skips (base spec §4.8),
/// beyond the `\n`/`\r` newlines collapsed separately.
fn is_unicode_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\u{B}' | '\u{C}' | ' ' | '\u{A0}' | '\u{1680}'
            | '\u{2000}'..='\u{200B}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}
