//! Shebang trivia (C6): recognized only at byte offset 0, never elsewhere.

use test_utils::{lex, lex_err};
use tsc_lex::lexer::{LexErrorKind, TokenKind};

#[test]
fn shebang_at_start_of_file() {
    let tokens = lex("#!/usr/bin/env node\nconst x = 1;");
    assert_eq!(tokens[0].kind, TokenKind::Shebang("/usr/bin/env node".into()));
}

#[test]
fn shebang_with_no_trailing_newline() {
    let tokens = lex("#!/usr/bin/env node");
    assert_eq!(tokens[0].kind, TokenKind::Shebang("/usr/bin/env node".into()));
    assert_eq!(tokens.len(), 1);
}

#[test]
fn hash_bang_after_start_of_file_is_an_error() {
    let e = lex_err("x;\n#!nope");
    assert_eq!(e.kind, LexErrorKind::MisplacedShebang);
}

#[test]
fn shebang_line_does_not_itself_become_a_newline_token() {
    let tokens = lex("#!/bin/sh\nx");
    assert_ne!(tokens[1].kind, TokenKind::Newline);
}
