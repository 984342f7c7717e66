//! Source positions and locations.
//!
//! A [`Position`] tracks where the cursor sits inside a byte stream; a
//! [`SourceLocation`] pairs a position with the opaque [`SourceId`] handle the
//! caller bound the lexer to, so that errors and tokens can be traced back to
//! a specific file without the lexer owning any notion of "files" itself.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::sync::Arc;

/// An opaque handle identifying the source a [`SourceLocation`] belongs to.
///
/// The lexer never interprets this value; it only carries it by reference
/// into every location it produces. Callers typically construct one per file
/// (a path, an interned id, a URL) and clone it cheaply.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceId(Arc<str>);

impl SourceId {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SourceId {
    fn from(value: &str) -> Self {
        Self::new(Arc::<str>::from(value))
    }
}

/// A cursor position within a byte stream: 1-based line, 0-based column, and
/// the running byte offset from the start of the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub byte_offset: usize,
}

impl Position {
    pub const fn start() -> Self {
        Self {
            line: 1,
            column: 0,
            byte_offset: 0,
        }
    }

    /// Advance within the current line by `bytes` (a code point's encoded
    /// length). Does not itself handle newlines; callers advance the line
    /// explicitly at `\n`.
    pub fn advance_column(&mut self, bytes: usize) {
        self.column += 1;
        self.byte_offset += bytes;
    }

    /// Advance past a line terminator occupying `bytes` source bytes (1 for
    /// `\n` or a lone `\r`, 2 for a `\r\n` pair collapsed into one newline).
    pub fn advance_line(&mut self, bytes: usize) {
        self.line += 1;
        self.column = 0;
        self.byte_offset += bytes;
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

/// A location bound to a source, cheap to copy and carried by every token
/// and error the lexer produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub source: SourceId,
    pub position: Position,
}

impl SourceLocation {
    pub fn new(source: SourceId, position: Position) -> Self {
        Self { source, position }
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }

    pub fn byte_offset(&self) -> usize {
        self.position.byte_offset
    }
}

impl Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.source, self.position.line, self.position.column
        )
    }
}
