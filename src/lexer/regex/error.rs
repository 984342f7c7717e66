//! Error taxonomy for the regex literal sub-parser (C5, base spec §4.5).

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::lexer::position::SourceLocation;
use crate::lexer::version::LanguageVersion;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegexErrorKind {
    /// TS1507 - malformed structure (orphaned quantifier, stray `)`...).
    InvalidRegularExpression,
    /// TS1509 - EOF before the closing `/`, or an unmatched `(`.
    UnterminatedRegularExpressionLiteral,
    /// TS1510 - `[` opened but never closed.
    UnterminatedCharacterClass,
    /// TS2301 - malformed `\` escape inside the pattern.
    InvalidEscapeSequence,
    /// TS2413 - a character class range whose start is greater than its end.
    InvalidCharacterClassRange,
    /// TS2414 - decimal back-reference to a group that doesn't exist.
    BackreferenceNotAvailable { group: u32 },
    /// TS2415 - bare decimal escape inside a character class.
    DecimalEscapeInCharacterClass,
    /// TS1501 - a flag letter not available under the active version.
    RegexFlagUnavailable { flag: char, required: LanguageVersion },
    /// TS1502 - `u` and `v` flags used together.
    ConflictingRegexFlags,
    /// TS1500 - the same flag letter twice.
    DuplicateRegexFlag { flag: char },
    /// Not part of the published table: a letter in the flag run isn't a
    /// recognized flag at all.
    UnknownRegexFlag { flag: char },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegexError {
    pub kind: RegexErrorKind,
    pub location: SourceLocation,
}

impl RegexError {
    pub fn new(kind: RegexErrorKind, location: SourceLocation) -> Self {
        Self { kind, location }
    }

    pub fn code(&self) -> u32 {
        use RegexErrorKind::*;
        match &self.kind {
            InvalidRegularExpression => 1507,
            UnterminatedRegularExpressionLiteral => 1509,
            UnterminatedCharacterClass => 1510,
            InvalidEscapeSequence => 2301,
            InvalidCharacterClassRange => 2413,
            BackreferenceNotAvailable { .. } => 2414,
            DecimalEscapeInCharacterClass => 2415,
            RegexFlagUnavailable { .. } => 1501,
            ConflictingRegexFlags => 1502,
            DuplicateRegexFlag { .. } => 1500,
            UnknownRegexFlag { .. } => 1496,
        }
    }
}

impl Display for RegexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use RegexErrorKind::*;
        let message = match &self.kind {
            InvalidRegularExpression => "Invalid regular expression.".to_string(),
            UnterminatedRegularExpressionLiteral => {
                "Unterminated regular expression literal.".to_string()
            }
            UnterminatedCharacterClass => "Unterminated character class.".to_string(),
            InvalidEscapeSequence => "Invalid escape sequence in regular expression.".to_string(),
            InvalidCharacterClassRange => {
                "Range out of order in character class.".to_string()
            }
            BackreferenceNotAvailable { group } => {
                format!("\\{group} is not a valid backreference; there is no group {group}.")
            }
            DecimalEscapeInCharacterClass => {
                "Decimal escape sequences are not allowed inside a character class.".to_string()
            }
            RegexFlagUnavailable { flag, required } => format!(
                "The regular expression flag '{flag}' is only available when targeting '{required}' or later."
            ),
            ConflictingRegexFlags => {
                "The 'u' and 'v' regular expression flags cannot be combined.".to_string()
            }
            DuplicateRegexFlag { flag } => {
                format!("Duplicate regular expression flag '{flag}'.")
            }
            UnknownRegexFlag { flag } => format!("Unknown regular expression flag '{flag}'."),
        };
        write!(f, "TS{}: {} ({})", self.code(), message, self.location)
    }
}

impl std::error::Error for RegexError {}

pub type RegexResult<T> = Result<T, RegexError>;
