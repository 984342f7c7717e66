//! The regex literal sub-parser (C5, base spec §4.5).
//!
//! Invoked by the top-level dispatcher once it has decided a `/` begins a
//! regex literal (base spec §4.8's regex-allowed-context flag) and has
//! isolated the pattern and flag text. See [`parser::parse_regex_literal`].

pub mod ast;
pub mod error;
pub mod parser;

pub use ast::{RegexFlag, RegexFlags, RegexLiteral};
pub use error::{RegexError, RegexErrorKind, RegexResult};
pub use parser::parse_regex_literal;
