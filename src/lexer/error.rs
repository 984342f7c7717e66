//! Typed, fatal lexer errors.
//!
//! Every error carries a TypeScript-compatible numeric code (where the
//! original compiler publishes an equivalent one) and the [`SourceLocation`]
//! at which the fault was detected. There is no recovery: the iterator is
//! fused once it has yielded an error (see [`crate::lexer::Lexer`]).

use std::error::Error;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use super::position::SourceLocation;
use super::regex::error::RegexError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LexErrorKind {
    /// TS1002 - unterminated string literal.
    UnterminatedStringLiteral,
    /// TS1126 - unexpected end of text.
    UnexpectedEndOfText,
    /// TS1127 - invalid character.
    InvalidCharacter,
    /// TS1003 - identifier expected (after `#`).
    InvalidIdentifier,
    /// TS1198 - extended unicode escape out of range.
    UnicodeValueOutOfRange,
    /// TS1199 - unterminated unicode escape sequence.
    UnterminatedUnicodeEscapeSequence,
    /// TS6189 - numeric separator adjacent to a non-digit.
    SeparatorsNotAllowedHere,
    /// TS6189 - two numeric separators in a row.
    MultipleSeparatorsNotAllowed,
    /// TS1010 - malformed numeric literal (bad digit, double decimal point, dangling exponent).
    InvalidNumericLiteral,
    /// TS1125 - unterminated block comment.
    UnterminatedMultilineComment,
    /// TS1010 - malformed escape sequence (`\x`, `\u` with bad digits).
    InvalidEscapeSequence,
    /// TS18026 - shebang (`#!`) found somewhere other than byte offset 0.
    MisplacedShebang,
    /// TS1160 - unterminated template literal.
    UnterminatedTemplateLiteral,
    /// TS17008 - JSX element has no corresponding closing tag.
    NoJsxClosingTag { element: String },
    /// TS1161 - unexpected end of JSX text.
    UnexpectedEndOfJsxText,
    /// A mode-stack frame (template / JSX / brace) was left open at EOF.
    UnterminatedNestedMode,
    /// The embedded regex sub-parser reported an error while scanning a
    /// regex literal; wrapped here so the top-level dispatcher can surface
    /// a single error type.
    Regex(RegexError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub location: SourceLocation,
}

impl LexError {
    pub fn new(kind: LexErrorKind, location: SourceLocation) -> Self {
        Self { kind, location }
    }

    /// The TypeScript-compatible numeric error code for this error, where
    /// one exists in the published compiler diagnostics.
    pub fn code(&self) -> u32 {
        use LexErrorKind::*;
        match &self.kind {
            UnterminatedStringLiteral => 1002,
            UnexpectedEndOfText => 1126,
            InvalidCharacter => 1127,
            InvalidIdentifier => 1003,
            UnicodeValueOutOfRange => 1198,
            UnterminatedUnicodeEscapeSequence => 1199,
            SeparatorsNotAllowedHere | MultipleSeparatorsNotAllowed => 6189,
            InvalidNumericLiteral => 1010,
            UnterminatedMultilineComment => 1125,
            InvalidEscapeSequence => 1010,
            MisplacedShebang => 18026,
            UnterminatedTemplateLiteral => 1160,
            NoJsxClosingTag { .. } => 17008,
            UnexpectedEndOfJsxText => 1161,
            UnterminatedNestedMode => 1161,
            Regex(inner) => inner.code(),
        }
    }
}

impl Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use LexErrorKind::*;
        let message: std::borrow::Cow<'static, str> = match &self.kind {
            UnterminatedStringLiteral => "Unterminated string literal.".into(),
            UnexpectedEndOfText => "Unexpected end of text.".into(),
            InvalidCharacter => "Invalid character.".into(),
            InvalidIdentifier => "An identifier was expected.".into(),
            UnicodeValueOutOfRange => {
                "An extended Unicode escape value must be between 0x0 and 0x10FFFF inclusive."
                    .into()
            }
            UnterminatedUnicodeEscapeSequence => "Unterminated Unicode escape sequence.".into(),
            SeparatorsNotAllowedHere => "Numeric separators are not allowed here.".into(),
            MultipleSeparatorsNotAllowed => {
                "Multiple consecutive numeric separators are not permitted.".into()
            }
            InvalidNumericLiteral => "Invalid numeric literal.".into(),
            UnterminatedMultilineComment => "Unterminated multiline comment.".into(),
            InvalidEscapeSequence => "Invalid escape sequence.".into(),
            MisplacedShebang => "Shebang is only allowed at the start of the file.".into(),
            UnterminatedTemplateLiteral => "Unterminated template literal.".into(),
            NoJsxClosingTag { element } => format!(
                "JSX element '{element}' has no corresponding closing tag."
            )
            .into(),
            UnexpectedEndOfJsxText => "Unexpected end of text while scanning JSX.".into(),
            UnterminatedNestedMode => {
                "Unexpected end of file: an opened template, brace, or JSX element was never closed.".into()
            }
            Regex(inner) => return write!(f, "{inner}"),
        };
        write!(f, "TS{}: {} ({})", self.code(), message, self.location)
    }
}

impl Error for LexError {}

pub type LexResult<T> = Result<T, LexError>;
