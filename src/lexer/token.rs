//! The token value model (C9, base spec §3, §4.9).
//!
//! A single [`TokenKind`] tagged union discriminates every grammar atom; a
//! [`Token`] pairs one with the [`SourceLocation`] of its first code point.
//! Two renderings exist, deliberately kept apart:
//!
//! - [`TokenKind::source_text`] reconstructs the token's original source
//!   spelling, used by the round-trip invariant (base spec §8).
//! - `Display` renders a debug/reporting form — JSON-style quoting for
//!   strings/comments/regex, XML-escaping for JSX text/attributes, per base
//!   spec §4.9 — used by the CLI and by `test-utils`' token comparisons.
//!
//! The two can't be the same function once string quoting styles diverge
//! (`'a'` in source vs `"a"` in a JSON dump), so the base spec's single
//! `to_string` per variant is split into these two purposes here.

use std::fmt::{self, Display, Write as _};

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use super::position::SourceLocation;
use super::regex::RegexLiteral;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, location: SourceLocation) -> Self {
        Self { kind, location }
    }
}

/// Locations are deliberately excluded: base spec §4.9 mandates
/// tag-then-payload equality only.
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}
impl Eq for Token {}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.kind, f)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TokenKind {
    Keyword(Keyword),
    Punct(Punct),
    Identifier(Identifier),
    Numeric(NumericLiteral),
    StringLiteral(StringLiteral),
    Comment(LineComment),
    MultilineComment(MultilineComment),
    Newline,
    Shebang(String),
    ConflictMarker(ConflictMarkerLine),
    Regex(RegexLiteral),

    TemplateStart,
    TemplateChunk(String),
    TemplateEnd,
    TemplateExprStart,
    TemplateExprEnd,

    JsxElementStart(String),
    JsxElementEnd,
    JsxSelfClosing,
    JsxElementClose(String),
    JsxAttributeName(String),
    JsxAttributeValue { value: String, quote: char },
    JsxAttributeValueStart,
    JsxAttributeValueEnd,
    JsxText(String),

    EndOfFile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
    pub private: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NumericLiteral {
    Integer(IntegerLiteral),
    Float(FloatLiteral),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumericBase {
    Binary,
    Octal,
    Decimal,
    Hex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntegerSize {
    Standard,
    BigInt,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegerLiteral {
    pub value: BigInt,
    pub base: NumericBase,
    /// The digit run exactly as scanned (numeric separators and original
    /// digit case included, no radix prefix or `n` suffix) — preserved so
    /// `source_text` can reconstruct the literal byte-for-byte.
    ///
    /// For `legacy_octal` literals this includes the leading `0`, since that
    /// digit is part of the scanned run rather than a separate prefix token
    /// (there is no `o` in source to carry it).
    pub digits: String,
    pub size: IntegerSize,
    /// `0755`-style octal with no `0o` prefix (base §4.3). Always `false`
    /// outside `base == NumericBase::Octal`.
    pub legacy_octal: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatLiteral {
    pub value: f64,
    pub integer_digits: String,
    pub fraction_digits: Option<String>,
    pub exponent: Option<FloatExponent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloatExponent {
    pub upper_e: bool,
    pub negative: bool,
    pub explicit_sign: bool,
    pub digits: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringLiteral {
    pub value: String,
    pub quote: char,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineComment {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultilineComment {
    pub lines: Vec<String>,
    pub is_jsdoc: bool,
    pub jsdoc_parts: Vec<Vec<JsDocPart>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum JsDocPart {
    Text(String),
    BlockTag { name: String, type_annotation: Option<String> },
    InlineTag { name: String, content: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictMarker {
    pub marker: char,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictMarkerLine {
    pub marker: ConflictMarker,
    pub run_length: usize,
    pub remainder: String,
}

/// The closed set of TypeScript reserved and contextual keywords this
/// lexer recognizes. Version-gated entries are listed in
/// [`super::keywords::KEYWORD_TABLE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Keyword {
    Break, Case, Catch, Class, Const, Continue, Debugger, Default, Delete, Do,
    Else, Enum, Export, Extends, False, Finally, For, Function, If, Import,
    In, InstanceOf, New, Null, Return, Super, Switch, This, Throw, True, Try,
    TypeOf, Var, Void, While, With,
    As, Implements, Interface, Let, Package, Private, Protected, Public,
    Static, Yield,
    Any, Boolean, Constructor, Declare, Get, Infer, Is, KeyOf, Module,
    Namespace, Never, Readonly, Require, Number, Object, Set, StringType,
    Symbol, Type, Undefined, Unique, Unknown, From, Global, Bigint, Of,
    Asserts, Abstract, Async, Await, Satisfies, Using, Override, Out,
    Accessor,
}

/// The full punctuator set, longest-match tokens resolved by the top-level
/// dispatcher (base spec §4.8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Punct {
    LBrace, RBrace, LParen, RParen, LBracket, RBracket,
    Dot, DotDotDot, Semicolon, Comma,
    LAngle, RAngle, LtEq, GtEq, EqEq, NotEq, EqEqEq, NotEqEq,
    Plus, Minus, Star, StarStar, Slash, Percent,
    PlusPlus, MinusMinus,
    LShift, RShift, RShift3,
    Amp, Pipe, Caret, Not, Tilde, AmpAmp, PipePipe, Question, QuestionQuestion,
    QuestionDot,
    Eq, PlusEq, MinusEq, StarEq, StarStarEq, SlashEq, PercentEq,
    LShiftEq, RShiftEq, RShift3Eq, AmpEq, PipeEq, CaretEq, AmpAmpEq,
    PipePipeEq, QuestionQuestionEq,
    Arrow, Colon, At, Backtick,
}

impl Keyword {
    pub fn as_str(self) -> &'static str {
        use Keyword::*;
        match self {
            Break => "break", Case => "case", Catch => "catch", Class => "class",
            Const => "const", Continue => "continue", Debugger => "debugger",
            Default => "default", Delete => "delete", Do => "do", Else => "else",
            Enum => "enum", Export => "export", Extends => "extends", False => "false",
            Finally => "finally", For => "for", Function => "function", If => "if",
            Import => "import", In => "in", InstanceOf => "instanceof", New => "new",
            Null => "null", Return => "return", Super => "super", Switch => "switch",
            This => "this", Throw => "throw", True => "true", Try => "try",
            TypeOf => "typeof", Var => "var", Void => "void", While => "while",
            With => "with", As => "as", Implements => "implements",
            Interface => "interface", Let => "let", Package => "package",
            Private => "private", Protected => "protected", Public => "public",
            Static => "static", Yield => "yield", Any => "any", Boolean => "boolean",
            Constructor => "constructor", Declare => "declare", Get => "get",
            Infer => "infer", Is => "is", KeyOf => "keyof", Module => "module",
            Namespace => "namespace", Never => "never", Readonly => "readonly",
            Require => "require", Number => "number", Object => "object", Set => "set",
            StringType => "string", Symbol => "symbol", Type => "type",
            Undefined => "undefined", Unique => "unique", Unknown => "unknown",
            From => "from", Global => "global", Bigint => "bigint", Of => "of",
            Asserts => "asserts", Abstract => "abstract", Async => "async",
            Await => "await", Satisfies => "satisfies", Using => "using",
            Override => "override", Out => "out", Accessor => "accessor",
        }
    }
}

impl Punct {
    pub fn as_str(self) -> &'static str {
        use Punct::*;
        match self {
            LBrace => "{", RBrace => "}", LParen => "(", RParen => ")",
            LBracket => "[", RBracket => "]", Dot => ".", DotDotDot => "...",
            Semicolon => ";", Comma => ",", LAngle => "<", RAngle => ">",
            LtEq => "<=", GtEq => ">=", EqEq => "==", NotEq => "!=",
            EqEqEq => "===", NotEqEq => "!==", Plus => "+", Minus => "-",
            Star => "*", StarStar => "**", Slash => "/", Percent => "%",
            PlusPlus => "++", MinusMinus => "--", LShift => "<<", RShift => ">>",
            RShift3 => ">>>", Amp => "&", Pipe => "|", Caret => "^", Not => "!",
            Tilde => "~", AmpAmp => "&&", PipePipe => "||", Question => "?",
            QuestionQuestion => "??", QuestionDot => "?.", Eq => "=",
            PlusEq => "+=", MinusEq => "-=", StarEq => "*=", StarStarEq => "**=",
            SlashEq => "/=", PercentEq => "%=", LShiftEq => "<<=",
            RShiftEq => ">>=", RShift3Eq => ">>>=", AmpEq => "&=", PipeEq => "|=",
            CaretEq => "^=", AmpAmpEq => "&&=", PipePipeEq => "||=",
            QuestionQuestionEq => "??=", Arrow => "=>", Colon => ":",
            At => "@", Backtick => "`",
        }
    }
}

impl TokenKind {
    /// Reconstructs the exact source spelling of this token, for the
    /// round-trip property (base spec §8).
    pub fn source_text(&self) -> String {
        match self {
            TokenKind::Keyword(k) => k.as_str().to_string(),
            TokenKind::Punct(p) => p.as_str().to_string(),
            TokenKind::Identifier(id) => {
                if id.private {
                    format!("#{}", id.name)
                } else {
                    id.name.clone()
                }
            }
            TokenKind::Numeric(n) => n.source_text(),
            TokenKind::StringLiteral(s) => format!("{}{}{}", s.quote, escape_for_quote(&s.value, s.quote), s.quote),
            TokenKind::Comment(c) => format!("//{}", c.text),
            TokenKind::MultilineComment(c) => {
                let open = if c.is_jsdoc { "/**" } else { "/*" };
                format!("{open}{}*/", c.lines.join("\n"))
            }
            TokenKind::Newline => "\n".to_string(),
            TokenKind::Shebang(text) => format!("#!{text}"),
            TokenKind::ConflictMarker(c) => {
                format!("{}{}", c.marker.marker.to_string().repeat(c.run_length), c.remainder)
            }
            TokenKind::Regex(r) => r.to_string(),
            TokenKind::TemplateStart => "`".to_string(),
            TokenKind::TemplateChunk(text) => text.clone(),
            TokenKind::TemplateEnd => "`".to_string(),
            TokenKind::TemplateExprStart => "${".to_string(),
            TokenKind::TemplateExprEnd => "}".to_string(),
            TokenKind::JsxElementStart(name) => format!("<{name}"),
            TokenKind::JsxElementEnd => ">".to_string(),
            TokenKind::JsxSelfClosing => "/>".to_string(),
            TokenKind::JsxElementClose(name) => format!("</{name}>"),
            TokenKind::JsxAttributeName(name) => name.clone(),
            TokenKind::JsxAttributeValue { value, quote } => format!("{quote}{value}{quote}"),
            TokenKind::JsxAttributeValueStart => "{".to_string(),
            TokenKind::JsxAttributeValueEnd => "}".to_string(),
            TokenKind::JsxText(text) => text.clone(),
            TokenKind::EndOfFile => String::new(),
        }
    }
}

fn escape_for_quote(value: &str, quote: char) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out
}

impl NumericLiteral {
    pub fn source_text(&self) -> String {
        match self {
            NumericLiteral::Integer(i) => {
                let prefix = match i.base {
                    NumericBase::Binary => "0b",
                    NumericBase::Octal if i.legacy_octal => "",
                    NumericBase::Octal => "0o",
                    NumericBase::Decimal => "",
                    NumericBase::Hex => "0x",
                };
                let suffix = if i.size == IntegerSize::BigInt { "n" } else { "" };
                format!("{prefix}{}{suffix}", i.digits)
            }
            NumericLiteral::Float(fl) => {
                let mut s = fl.integer_digits.clone();
                if let Some(frac) = &fl.fraction_digits {
                    s.push('.');
                    s.push_str(frac);
                }
                if let Some(exp) = &fl.exponent {
                    s.push(if exp.upper_e { 'E' } else { 'e' });
                    if exp.explicit_sign {
                        s.push(if exp.negative { '-' } else { '+' });
                    }
                    s.push_str(&exp.digits);
                }
                s
            }
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(k) => f.write_str(k.as_str()),
            TokenKind::Punct(p) => f.write_str(p.as_str()),
            TokenKind::Identifier(id) => {
                if id.private {
                    write!(f, "#{}", id.name)
                } else {
                    f.write_str(&id.name)
                }
            }
            TokenKind::Numeric(n) => f.write_str(&n.source_text()),
            TokenKind::StringLiteral(s) => write_json_string(f, &s.value),
            TokenKind::Comment(c) => write!(f, "//{}", c.text),
            TokenKind::MultilineComment(c) => {
                write!(f, "/*{}{}*/", if c.is_jsdoc { "*" } else { "" }, c.lines.join("\n"))
            }
            TokenKind::Newline => f.write_str("\\n"),
            TokenKind::Shebang(text) => write!(f, "#!{text}"),
            TokenKind::ConflictMarker(c) => {
                write!(f, "{}{}", c.marker.marker.to_string().repeat(c.run_length), c.remainder)
            }
            TokenKind::Regex(r) => write!(f, "{r}"),
            TokenKind::TemplateStart => f.write_str("`"),
            TokenKind::TemplateChunk(text) => write_json_string(f, text),
            TokenKind::TemplateEnd => f.write_str("`"),
            TokenKind::TemplateExprStart => f.write_str("${"),
            TokenKind::TemplateExprEnd => f.write_str("}"),
            TokenKind::JsxElementStart(name) => write!(f, "<{name}"),
            TokenKind::JsxElementEnd => f.write_str(">"),
            TokenKind::JsxSelfClosing => f.write_str("/>"),
            TokenKind::JsxElementClose(name) => write!(f, "</{name}>"),
            TokenKind::JsxAttributeName(name) => f.write_str(name),
            TokenKind::JsxAttributeValue { value, .. } => write_xml_escaped(f, value),
            TokenKind::JsxAttributeValueStart => f.write_str("{"),
            TokenKind::JsxAttributeValueEnd => f.write_str("}"),
            TokenKind::JsxText(text) => write_xml_escaped(f, text),
            TokenKind::EndOfFile => f.write_str("<eof>"),
        }
    }
}

fn write_json_string(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in value.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

fn write_xml_escaped(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    for c in value.chars() {
        match c {
            '&' => f.write_str("&amp;")?,
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            '"' => f.write_str("&quot;")?,
            '\'' => f.write_str("&apos;")?,
            c => f.write_char(c)?,
        }
    }
    Ok(())
}
