//! Recursive-descent parser for a regex literal's pattern body (C5).
//!
//! Operates on a pattern already isolated by the top-level dispatcher (the
//! text strictly between the delimiting `/`s, plus the flag run after the
//! closing `/`) rather than on the shared [`LookaheadBuffer`][crate::lexer::source::LookaheadBuffer]
//! directly — the dispatcher already had to walk the pattern once to find
//! the unescaped closing `/` (respecting `[...]` classes), so handing the
//! parser a plain `&str` keeps this module free of the lexer's generic byte
//! source parameter.

use super::ast::*;
use super::error::{RegexError, RegexErrorKind, RegexResult};
use crate::lexer::escape::simple_escape;
use crate::lexer::position::{Position, SourceLocation};
use crate::lexer::version::LanguageVersion;

/// A single pattern character paired with its byte offset relative to the
/// start of the pattern (i.e. the first byte after the opening `/`).
type PatternChar = (char, usize);

pub fn parse_regex_literal(
    pattern: &str,
    flags: &str,
    pattern_start: SourceLocation,
    flags_start: SourceLocation,
    version: LanguageVersion,
) -> RegexResult<RegexLiteral> {
    let chars = index_chars(pattern);
    let total_captures = count_capturing_groups(&chars);
    let mut parser = Parser {
        chars: &chars,
        pos: 0,
        base: pattern_start,
        total_captures,
        next_capture_index: 1,
    };
    let body = parser.parse_disjunction()?;
    if parser.pos != parser.chars.len() {
        // A stray `)` with no matching `(`.
        return Err(RegexError::new(
            RegexErrorKind::InvalidRegularExpression,
            parser.loc(parser.pos),
        ));
    }
    let flag_chars = index_chars(flags);
    let flags = parse_flags(&flag_chars, flags_start, version)?;
    Ok(RegexLiteral {
        pattern: RegularExpression { body },
        flags,
    })
}

fn index_chars(s: &str) -> Vec<PatternChar> {
    let mut out = Vec::with_capacity(s.len());
    let mut offset = 0;
    for c in s.chars() {
        out.push((c, offset));
        offset += c.len_utf8();
    }
    out
}

/// Count `(` that open a capturing group (plain or `(?<name>`), ignoring
/// ones inside `[...]` classes or escaped. Used to validate backreferences
/// against the *total* group count in the pattern, since JS allows a
/// backreference that textually precedes the group it refers to.
fn count_capturing_groups(chars: &[PatternChar]) -> u32 {
    let mut count = 0;
    let mut i = 0;
    let mut in_class = false;
    while i < chars.len() {
        let (c, _) = chars[i];
        match c {
            '\\' => {
                i += 2;
                continue;
            }
            '[' if !in_class => in_class = true,
            ']' if in_class => in_class = false,
            '(' if !in_class => {
                if chars.get(i + 1).map(|&(c, _)| c) != Some('?') {
                    count += 1;
                } else if chars.get(i + 2).map(|&(c, _)| c) == Some('<')
                    && !matches!(chars.get(i + 3).map(|&(c, _)| c), Some('=') | Some('!'))
                {
                    count += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }
    count
}

struct Parser<'a> {
    chars: &'a [PatternChar],
    pos: usize,
    base: SourceLocation,
    total_captures: u32,
    next_capture_index: u32,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).map(|&(c, _)| c)
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).map(|&(c, _)| c)
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn loc(&self, idx: usize) -> SourceLocation {
        let byte_offset = self
            .chars
            .get(idx)
            .map(|&(_, off)| off)
            .unwrap_or_else(|| self.chars.last().map(|&(c, off)| off + c.len_utf8()).unwrap_or(0));
        SourceLocation::new(
            self.base.source.clone(),
            Position {
                line: self.base.position.line,
                column: self.base.position.column + idx,
                byte_offset: self.base.position.byte_offset + byte_offset,
            },
        )
    }

    fn here(&self) -> SourceLocation {
        self.loc(self.pos)
    }

    fn err(&self, kind: RegexErrorKind) -> RegexError {
        RegexError::new(kind, self.here())
    }

    fn parse_disjunction(&mut self) -> RegexResult<Disjunction> {
        let mut alternatives = vec![self.parse_alternative()?];
        while self.peek() == Some('|') {
            self.advance();
            alternatives.push(self.parse_alternative()?);
        }
        Ok(Disjunction { alternatives })
    }

    fn at_alternative_end(&self) -> bool {
        matches!(self.peek(), None | Some('|') | Some(')'))
    }

    fn parse_alternative(&mut self) -> RegexResult<Alternative> {
        let mut terms = Vec::new();
        while !self.at_alternative_end() {
            terms.push(self.parse_term()?);
        }
        Ok(Alternative { terms })
    }

    fn parse_term(&mut self) -> RegexResult<Term> {
        match self.peek() {
            Some('^') => {
                self.advance();
                Ok(Term::Assertion(Assertion::StartOfLine))
            }
            Some('$') => {
                self.advance();
                Ok(Term::Assertion(Assertion::EndOfLine))
            }
            Some('\\') if self.peek_at(1) == Some('b') => {
                self.advance();
                self.advance();
                Ok(Term::Assertion(Assertion::WordBoundary))
            }
            Some('\\') if self.peek_at(1) == Some('B') => {
                self.advance();
                self.advance();
                Ok(Term::Assertion(Assertion::NonWordBoundary))
            }
            Some('(') if self.is_lookaround_start() => {
                let atom = self.parse_atom()?;
                let quantifier = self.try_parse_quantifier()?;
                Ok(Term::Atom { atom, quantifier })
            }
            _ => {
                let atom = self.parse_atom()?;
                let quantifier = self.try_parse_quantifier()?;
                Ok(Term::Atom { atom, quantifier })
            }
        }
    }

    fn is_lookaround_start(&self) -> bool {
        self.peek_at(1) == Some('?')
            && matches!(
                self.peek_at(2),
                Some('=') | Some('!')
            )
    }

    fn parse_atom(&mut self) -> RegexResult<Atom> {
        match self.peek() {
            None => Err(self.err(RegexErrorKind::UnterminatedRegularExpressionLiteral)),
            Some('.') => {
                self.advance();
                Ok(Atom::Any)
            }
            Some('(') => self.parse_group(),
            Some('[') => self.parse_character_class(),
            Some('\\') => self.parse_atom_escape(),
            Some('*') | Some('+') | Some('?') => {
                Err(self.err(RegexErrorKind::InvalidRegularExpression))
            }
            Some(c) => {
                self.advance();
                Ok(Atom::Character(c))
            }
        }
    }

    fn parse_atom_escape(&mut self) -> RegexResult<Atom> {
        self.advance(); // consume '\\'
        match self.peek() {
            None => Err(self.err(RegexErrorKind::UnterminatedRegularExpressionLiteral)),
            Some('w') => {
                self.advance();
                Ok(Atom::BuiltinClass(BuiltinClass::Word))
            }
            Some('W') => {
                self.advance();
                Ok(Atom::BuiltinClass(BuiltinClass::NonWord))
            }
            Some('d') => {
                self.advance();
                Ok(Atom::BuiltinClass(BuiltinClass::Digit))
            }
            Some('D') => {
                self.advance();
                Ok(Atom::BuiltinClass(BuiltinClass::NonDigit))
            }
            Some('s') => {
                self.advance();
                Ok(Atom::BuiltinClass(BuiltinClass::Whitespace))
            }
            Some('S') => {
                self.advance();
                Ok(Atom::BuiltinClass(BuiltinClass::NonWhitespace))
            }
            Some('u') => self.parse_unicode_escape(),
            Some('x') => self.parse_hex_escape(),
            Some(c) if c.is_ascii_digit() && c != '0' => self.parse_backreference(),
            Some('0') if !self.peek_at(1).is_some_and(|c| c.is_ascii_digit()) => {
                self.advance();
                Ok(Atom::Character('\0'))
            }
            Some(c) => {
                if let Some(decoded) = simple_escape(c) {
                    self.advance();
                    Ok(Atom::Character(decoded))
                } else if c.is_ascii_alphanumeric() {
                    Err(self.err(RegexErrorKind::InvalidEscapeSequence))
                } else {
                    self.advance();
                    Ok(Atom::Character(c))
                }
            }
        }
    }

    fn parse_backreference(&mut self) -> RegexResult<Atom> {
        let start = self.pos;
        let mut digits = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                digits.push(c);
                self.advance();
            } else {
                break;
            }
        }
        let n: u32 = digits.parse().unwrap_or(u32::MAX);
        if n == 0 || n > self.total_captures {
            return Err(RegexError::new(
                RegexErrorKind::BackreferenceNotAvailable { group: n },
                self.loc(start),
            ));
        }
        Ok(Atom::Backreference(n))
    }

    fn parse_unicode_escape(&mut self) -> RegexResult<Atom> {
        self.advance(); // 'u'
        let value = self.parse_unicode_escape_value()?;
        match char::from_u32(value) {
            Some(c) => Ok(Atom::Character(c)),
            None => Err(self.err(RegexErrorKind::InvalidEscapeSequence)),
        }
    }

    fn parse_unicode_escape_value(&mut self) -> RegexResult<u32> {
        if self.peek() == Some('{') {
            self.advance();
            let mut value: u32 = 0;
            let mut digit_count = 0;
            while let Some(c) = self.peek() {
                if c == '}' {
                    break;
                }
                let digit = c
                    .to_digit(16)
                    .ok_or_else(|| self.err(RegexErrorKind::InvalidEscapeSequence))?;
                value = value.checked_mul(16).map(|v| v + digit).unwrap_or(u32::MAX);
                digit_count += 1;
                self.advance();
            }
            if digit_count == 0 || self.peek() != Some('}') {
                return Err(self.err(RegexErrorKind::InvalidEscapeSequence));
            }
            self.advance();
            if value > 0x10FFFF {
                return Err(self.err(RegexErrorKind::InvalidEscapeSequence));
            }
            Ok(value)
        } else {
            let mut value: u32 = 0;
            for _ in 0..4 {
                let c = self
                    .peek()
                    .ok_or_else(|| self.err(RegexErrorKind::InvalidEscapeSequence))?;
                let digit = c
                    .to_digit(16)
                    .ok_or_else(|| self.err(RegexErrorKind::InvalidEscapeSequence))?;
                value = value * 16 + digit;
                self.advance();
            }
            Ok(value)
        }
    }

    fn parse_hex_escape(&mut self) -> RegexResult<Atom> {
        self.advance(); // 'x'
        let mut value: u32 = 0;
        for _ in 0..2 {
            let c = self
                .peek()
                .ok_or_else(|| self.err(RegexErrorKind::InvalidEscapeSequence))?;
            let digit = c
                .to_digit(16)
                .ok_or_else(|| self.err(RegexErrorKind::InvalidEscapeSequence))?;
            value = value * 16 + digit;
            self.advance();
        }
        Ok(Atom::Character(char::from_u32(value).unwrap_or('\u{FFFD}')))
    }

    fn parse_character_class(&mut self) -> RegexResult<Atom> {
        let open_loc = self.here();
        self.advance(); // '['
        let negated = if self.peek() == Some('^') {
            self.advance();
            true
        } else {
            false
        };
        let mut chars = Vec::new();
        let mut ranges = Vec::new();
        let mut classes = Vec::new();
        loop {
            match self.peek() {
                None => {
                    return Err(RegexError::new(
                        RegexErrorKind::UnterminatedCharacterClass,
                        open_loc,
                    ))
                }
                Some(']') => {
                    self.advance();
                    break;
                }
                _ => {
                    let item = self.parse_class_atom()?;
                    match item {
                        ClassAtom::Builtin(b) => classes.push(b),
                        ClassAtom::Char(lo) => {
                            if self.peek() == Some('-') && self.peek_at(1) != Some(']') && self.peek_at(1).is_some() {
                                let dash_pos = self.pos;
                                self.advance(); // '-'
                                match self.parse_class_atom()? {
                                    ClassAtom::Char(hi) => {
                                        if hi < lo {
                                            return Err(RegexError::new(
                                                RegexErrorKind::InvalidCharacterClassRange,
                                                self.loc(dash_pos),
                                            ));
                                        }
                                        ranges.push((lo, hi));
                                    }
                                    ClassAtom::Builtin(b) => {
                                        // `[a-\d]` - not a real range; treat literally.
                                        chars.push(lo);
                                        chars.push('-');
                                        classes.push(b);
                                    }
                                }
                            } else {
                                chars.push(lo);
                            }
                        }
                    }
                }
            }
        }
        Ok(Atom::CharacterClass(CharacterClass {
            negated,
            chars,
            ranges,
            classes,
        }))
    }

    fn parse_class_atom(&mut self) -> RegexResult<ClassAtom> {
        match self.peek() {
            Some('\\') => {
                let start = self.pos;
                self.advance();
                match self.peek() {
                    Some('w') => {
                        self.advance();
                        Ok(ClassAtom::Builtin(BuiltinClass::Word))
                    }
                    Some('W') => {
                        self.advance();
                        Ok(ClassAtom::Builtin(BuiltinClass::NonWord))
                    }
                    Some('d') => {
                        self.advance();
                        Ok(ClassAtom::Builtin(BuiltinClass::Digit))
                    }
                    Some('D') => {
                        self.advance();
                        Ok(ClassAtom::Builtin(BuiltinClass::NonDigit))
                    }
                    Some('s') => {
                        self.advance();
                        Ok(ClassAtom::Builtin(BuiltinClass::Whitespace))
                    }
                    Some('S') => {
                        self.advance();
                        Ok(ClassAtom::Builtin(BuiltinClass::NonWhitespace))
                    }
                    Some('b') => {
                        self.advance();
                        Ok(ClassAtom::Char('\u{8}'))
                    }
                    Some('u') => {
                        self.advance();
                        let value = self.parse_unicode_escape_value()?;
                        char::from_u32(value)
                            .map(ClassAtom::Char)
                            .ok_or_else(|| self.err(RegexErrorKind::InvalidEscapeSequence))
                    }
                    Some('x') => {
                        self.advance();
                        let mut value = 0u32;
                        for _ in 0..2 {
                            let c = self
                                .peek()
                                .ok_or_else(|| self.err(RegexErrorKind::InvalidEscapeSequence))?;
                            let digit = c
                                .to_digit(16)
                                .ok_or_else(|| self.err(RegexErrorKind::InvalidEscapeSequence))?;
                            value = value * 16 + digit;
                            self.advance();
                        }
                        Ok(ClassAtom::Char(char::from_u32(value).unwrap_or('\u{FFFD}')))
                    }
                    Some('0') if !self.peek_at(1).is_some_and(|c| c.is_ascii_digit()) => {
                        self.advance();
                        Ok(ClassAtom::Char('\0'))
                    }
                    Some(c) if c.is_ascii_digit() => {
                        Err(RegexError::new(
                            RegexErrorKind::DecimalEscapeInCharacterClass,
                            self.loc(start),
                        ))
                    }
                    Some(c) => {
                        if let Some(decoded) = simple_escape(c) {
                            self.advance();
                            Ok(ClassAtom::Char(decoded))
                        } else {
                            self.advance();
                            Ok(ClassAtom::Char(c))
                        }
                    }
                    None => Err(RegexError::new(
                        RegexErrorKind::UnterminatedCharacterClass,
                        self.loc(start),
                    )),
                }
            }
            Some(c) => {
                self.advance();
                Ok(ClassAtom::Char(c))
            }
            None => Err(self.err(RegexErrorKind::UnterminatedCharacterClass)),
        }
    }

    fn parse_group(&mut self) -> RegexResult<Atom> {
        let open_loc = self.here();
        self.advance(); // '('
        let mut name = None;
        let kind = if self.peek() == Some('?') {
            self.advance();
            match self.peek() {
                Some(':') => {
                    self.advance();
                    GroupKind::NonCapturing
                }
                Some('=') => {
                    self.advance();
                    GroupKind::PositiveLookahead
                }
                Some('!') => {
                    self.advance();
                    GroupKind::NegativeLookahead
                }
                Some('<') => {
                    self.advance();
                    match self.peek() {
                        Some('=') => {
                            self.advance();
                            GroupKind::PositiveLookbehind
                        }
                        Some('!') => {
                            self.advance();
                            GroupKind::NegativeLookbehind
                        }
                        _ => {
                            let mut buf = String::new();
                            while let Some(c) = self.peek() {
                                if c == '>' {
                                    break;
                                }
                                buf.push(c);
                                self.advance();
                            }
                            if self.peek() != Some('>') {
                                return Err(self.err(RegexErrorKind::InvalidRegularExpression));
                            }
                            self.advance();
                            name = Some(buf);
                            GroupKind::Capturing
                        }
                    }
                }
                _ => return Err(self.err(RegexErrorKind::InvalidRegularExpression)),
            }
        } else {
            GroupKind::Capturing
        };
        let index = if kind == GroupKind::Capturing {
            let idx = self.next_capture_index;
            self.next_capture_index += 1;
            Some(idx)
        } else {
            None
        };
        let body = self.parse_disjunction()?;
        if self.peek() != Some(')') {
            return Err(RegexError::new(
                RegexErrorKind::UnterminatedRegularExpressionLiteral,
                open_loc,
            ));
        }
        self.advance();
        Ok(Atom::Group(Box::new(Group {
            kind,
            name,
            index,
            body,
        })))
    }

    fn try_parse_quantifier(&mut self) -> RegexResult<Option<Quantifier>> {
        let kind = match self.peek() {
            Some('*') => {
                self.advance();
                QuantifierKind::Star
            }
            Some('+') => {
                self.advance();
                QuantifierKind::Plus
            }
            Some('?') => {
                self.advance();
                QuantifierKind::Question
            }
            Some('{') => match self.try_parse_range_quantifier() {
                Some(kind) => kind,
                None => return Ok(None),
            },
            _ => return Ok(None),
        };
        let lazy = if self.peek() == Some('?') {
            self.advance();
            true
        } else {
            false
        };
        Ok(Some(Quantifier { kind, lazy }))
    }

    /// Tentatively parses `{n}` / `{n,}` / `{n,m}`. On any shape mismatch,
    /// rewinds and reports no quantifier at all so the caller falls back to
    /// treating `{` as a literal character, matching real engines' leniency.
    fn try_parse_range_quantifier(&mut self) -> Option<QuantifierKind> {
        let save = self.pos;
        self.advance(); // '{'
        let min = self.parse_digits();
        let min = match min {
            Some(m) => m,
            None => {
                self.pos = save;
                return None;
            }
        };
        let max = if self.peek() == Some(',') {
            self.advance();
            if self.peek() == Some('}') {
                None
            } else {
                match self.parse_digits() {
                    Some(m) => Some(m),
                    None => {
                        self.pos = save;
                        return None;
                    }
                }
            }
        } else {
            Some(min)
        };
        if self.peek() != Some('}') {
            self.pos = save;
            return None;
        }
        self.advance();
        Some(QuantifierKind::Range { min, max })
    }

    fn parse_digits(&mut self) -> Option<u32> {
        let mut value: u32 = 0;
        let mut any = false;
        while let Some(c) = self.peek() {
            if let Some(d) = c.to_digit(10) {
                value = value.saturating_mul(10).saturating_add(d);
                any = true;
                self.advance();
            } else {
                break;
            }
        }
        any.then_some(value)
    }
}

enum ClassAtom {
    Char(char),
    Builtin(BuiltinClass),
}

fn parse_flags(
    flags: &[PatternChar],
    base: SourceLocation,
    version: LanguageVersion,
) -> RegexResult<RegexFlags> {
    let mut seen: Vec<RegexFlag> = Vec::new();
    for &(letter, offset) in flags {
        let loc = SourceLocation::new(
            base.source.clone(),
            Position {
                line: base.position.line,
                column: base.position.column + offset,
                byte_offset: base.position.byte_offset + offset,
            },
        );
        let Some(flag) = RegexFlag::from_letter(letter) else {
            return Err(RegexError::new(
                RegexErrorKind::UnknownRegexFlag { flag: letter },
                loc,
            ));
        };
        if seen.contains(&flag) {
            return Err(RegexError::new(
                RegexErrorKind::DuplicateRegexFlag { flag: letter },
                loc,
            ));
        }
        let required = match flag {
            RegexFlag::DotAll => Some(LanguageVersion::Es2018),
            RegexFlag::Unicode | RegexFlag::Sticky => Some(LanguageVersion::Es2015),
            RegexFlag::UnicodeSets => Some(LanguageVersion::EsNext),
            _ => None,
        };
        if let Some(required) = required {
            if !version.at_least(required) {
                return Err(RegexError::new(
                    RegexErrorKind::RegexFlagUnavailable {
                        flag: letter,
                        required,
                    },
                    loc,
                ));
            }
        }
        if flag == RegexFlag::UnicodeSets && seen.contains(&RegexFlag::Unicode) {
            return Err(RegexError::new(RegexErrorKind::ConflictingRegexFlags, loc));
        }
        if flag == RegexFlag::Unicode && seen.contains(&RegexFlag::UnicodeSets) {
            return Err(RegexError::new(RegexErrorKind::ConflictingRegexFlags, loc));
        }
        seen.push(flag);
    }
    Ok(RegexFlags(seen))
}
