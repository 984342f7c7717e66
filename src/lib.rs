//! TypeScript/JavaScript/JSX lexical analyzer: the context-sensitive
//! tokenizer and the embedded regular-expression literal sub-parser it
//! invokes.
//!
//! ```
//! use tsc_lex::lexer::Lexer;
//!
//! let mut lexer = Lexer::new("example.ts", "let x = 1;".as_bytes());
//! for token in &mut lexer {
//!     let token = token?;
//!     println!("{:?}", token.kind);
//! }
//! # Ok::<(), tsc_lex::lexer::LexError>(())
//! ```

pub mod lexer;
