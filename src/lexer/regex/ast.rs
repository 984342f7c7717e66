//! The regex literal AST (base spec §3, §4.5).
//!
//! `Disjunction` is kept as a plain `Vec<Alternative>` rather than the
//! single-alternative small-size-optimization the base spec calls out as
//! optional (§9) — most regexes really do have one alternative, but a
//! uniform list is simpler to pattern-match on everywhere else and the spec
//! explicitly allows it.

use std::fmt::{self, Display, Write as _};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegularExpression {
    pub body: Disjunction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disjunction {
    pub alternatives: Vec<Alternative>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternative {
    pub terms: Vec<Term>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Term {
    Assertion(Assertion),
    Atom {
        atom: Atom,
        quantifier: Option<Quantifier>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Assertion {
    StartOfLine,
    EndOfLine,
    WordBoundary,
    NonWordBoundary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Atom {
    Any,
    Character(char),
    BuiltinClass(BuiltinClass),
    CharacterClass(CharacterClass),
    Backreference(u32),
    Group(Box<Group>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuiltinClass {
    Word,
    NonWord,
    Digit,
    NonDigit,
    Whitespace,
    NonWhitespace,
}

impl BuiltinClass {
    pub fn escape(self) -> &'static str {
        match self {
            Self::Word => "\\w",
            Self::NonWord => "\\W",
            Self::Digit => "\\d",
            Self::NonDigit => "\\D",
            Self::Whitespace => "\\s",
            Self::NonWhitespace => "\\S",
        }
    }
}

/// `chars`/`ranges` are the data shape the base spec names explicitly;
/// `classes` (nested `\d`-style escapes inside `[...]`) is an addition to
/// cover real-world patterns like `/[\d_]/` without stretching the spec's
/// two fields to mean something they don't.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterClass {
    pub negated: bool,
    pub chars: Vec<char>,
    pub ranges: Vec<(char, char)>,
    pub classes: Vec<BuiltinClass>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub kind: GroupKind,
    pub name: Option<String>,
    /// Capture-group ordinal, assigned left-to-right; `None` for groups that
    /// don't capture. Not named by the base spec's data model but needed to
    /// validate backreferences against the groups actually seen so far.
    pub index: Option<u32>,
    pub body: Disjunction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupKind {
    Capturing,
    NonCapturing,
    PositiveLookahead,
    NegativeLookahead,
    PositiveLookbehind,
    NegativeLookbehind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quantifier {
    pub kind: QuantifierKind,
    pub lazy: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuantifierKind {
    Star,
    Plus,
    Question,
    Range { min: u32, max: Option<u32> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegexFlag {
    Global,
    IgnoreCase,
    Multiline,
    DotAll,
    Unicode,
    Sticky,
    UnicodeSets,
}

impl RegexFlag {
    pub fn letter(self) -> char {
        match self {
            Self::Global => 'g',
            Self::IgnoreCase => 'i',
            Self::Multiline => 'm',
            Self::DotAll => 's',
            Self::Unicode => 'u',
            Self::Sticky => 'y',
            Self::UnicodeSets => 'v',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'g' => Some(Self::Global),
            'i' => Some(Self::IgnoreCase),
            'm' => Some(Self::Multiline),
            's' => Some(Self::DotAll),
            'u' => Some(Self::Unicode),
            'y' => Some(Self::Sticky),
            'v' => Some(Self::UnicodeSets),
            _ => None,
        }
    }
}

/// Flags are order-insensitive and unique by construction once parsed; kept
/// sorted by letter so `Display` output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegexFlags(pub Vec<RegexFlag>);

impl RegexFlags {
    pub fn contains(&self, flag: RegexFlag) -> bool {
        self.0.contains(&flag)
    }
}

impl Display for RegexFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sorted = self.0.clone();
        sorted.sort_by_key(|flag| flag.letter());
        for flag in sorted {
            f.write_char(flag.letter())?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegexLiteral {
    pub pattern: RegularExpression,
    pub flags: RegexFlags,
}

impl Display for RegexLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.pattern.body, self.flags)
    }
}

impl Display for Disjunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, alt) in self.alternatives.iter().enumerate() {
            if i > 0 {
                f.write_char('|')?;
            }
            write!(f, "{alt}")?;
        }
        Ok(())
    }
}

impl Display for Alternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for term in &self.terms {
            write!(f, "{term}")?;
        }
        Ok(())
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Assertion(a) => write!(f, "{a}"),
            Term::Atom { atom, quantifier } => {
                write!(f, "{atom}")?;
                if let Some(q) = quantifier {
                    write!(f, "{q}")?;
                }
                Ok(())
            }
        }
    }
}

impl Display for Assertion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Assertion::StartOfLine => "^",
            Assertion::EndOfLine => "$",
            Assertion::WordBoundary => "\\b",
            Assertion::NonWordBoundary => "\\B",
        })
    }
}

impl Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Any => f.write_char('.'),
            Atom::Character(c) => write_escaped_literal(f, *c),
            Atom::BuiltinClass(b) => f.write_str(b.escape()),
            Atom::CharacterClass(c) => write!(f, "{c}"),
            Atom::Backreference(n) => write!(f, "\\{n}"),
            Atom::Group(g) => write!(f, "{g}"),
        }
    }
}

const SYNTAX_CHARACTERS: &[char] = &[
    '^', '$', '.', '*', '+', '?', '(', ')', '[', ']', '{', '}', '|', '\\', '/',
];

fn write_escaped_literal(f: &mut fmt::Formatter<'_>, c: char) -> fmt::Result {
    if SYNTAX_CHARACTERS.contains(&c) {
        write!(f, "\\{c}")
    } else {
        f.write_char(c)
    }
}

impl Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        if self.negated {
            f.write_char('^')?;
        }
        for class in &self.classes {
            f.write_str(class.escape())?;
        }
        for &c in &self.chars {
            write_class_char(f, c)?;
        }
        for &(lo, hi) in &self.ranges {
            write_class_char(f, lo)?;
            f.write_char('-')?;
            write_class_char(f, hi)?;
        }
        f.write_char(']')
    }
}

fn write_class_char(f: &mut fmt::Formatter<'_>, c: char) -> fmt::Result {
    if c == ']' || c == '\\' || c == '^' {
        write!(f, "\\{c}")
    } else {
        f.write_char(c)
    }
}

impl Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            GroupKind::Capturing => match &self.name {
                Some(name) => write!(f, "(?<{name}>{})", self.body),
                None => write!(f, "({})", self.body),
            },
            GroupKind::NonCapturing => write!(f, "(?:{})", self.body),
            GroupKind::PositiveLookahead => write!(f, "(?={})", self.body),
            GroupKind::NegativeLookahead => write!(f, "(?!{})", self.body),
            GroupKind::PositiveLookbehind => write!(f, "(?<={})", self.body),
            GroupKind::NegativeLookbehind => write!(f, "(?<!{})", self.body),
        }
    }
}

impl Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            QuantifierKind::Star => f.write_char('*')?,
            QuantifierKind::Plus => f.write_char('+')?,
            QuantifierKind::Question => f.write_char('?')?,
            QuantifierKind::Range { min, max: None } => write!(f, "{{{min},}}")?,
            QuantifierKind::Range {
                min,
                max: Some(max),
            } if min == max => write!(f, "{{{min}}}")?,
            QuantifierKind::Range {
                min,
                max: Some(max),
            } => write!(f, "{{{min},{max}}}")?,
        }
        if self.lazy {
            f.write_char('?')?;
        }
        Ok(())
    }
}
