//! Regex-literal scanning and its embedded sub-parser (C5), plus the
//! regex-vs-division disambiguation the top-level dispatcher is responsible
//! for (base spec §4.8).

use test_utils::{lex, lex_err};
use tsc_lex::lexer::regex::{RegexErrorKind, RegexFlag};
use tsc_lex::lexer::{LanguageVariant, LanguageVersion, LexErrorKind, TokenKind};

fn only_regex(src: &str) -> tsc_lex::lexer::regex::RegexLiteral {
    let tokens = lex(src);
    match &tokens[0].kind {
        TokenKind::Regex(r) => r.clone(),
        other => panic!("expected a regex literal, got {other:?}"),
    }
}

#[test]
fn regex_at_start_of_expression() {
    let r = only_regex("/abc/g");
    assert!(r.flags.contains(RegexFlag::Global));
    assert_eq!(r.pattern.body.to_string(), "abc");
}

#[test]
fn slash_inside_character_class_does_not_close_the_literal() {
    let r = only_regex("/[a/b]/");
    assert_eq!(r.pattern.body.to_string(), "[a/b]");
}

#[test]
fn regex_after_open_paren_not_a_division() {
    let tokens = lex("if (/foo/.test(s)) {}");
    assert!(tokens.iter().any(|t| matches!(t.kind, TokenKind::Regex(_))));
}

#[test]
fn regex_after_return_keyword() {
    let tokens = lex("return /x/;");
    assert!(matches!(tokens[1].kind, TokenKind::Regex(_)));
}

#[test]
fn division_after_closing_paren_is_not_a_regex() {
    let tokens = lex("(a) / b");
    assert!(tokens.iter().all(|t| !matches!(t.kind, TokenKind::Regex(_))));
}

#[test]
fn unicode_and_sticky_flags_need_es2015() {
    let e = lex_err_versioned("/a/uy", LanguageVersion::Es5);
    match e.kind {
        LexErrorKind::Regex(re) => assert!(matches!(
            re.kind,
            RegexErrorKind::RegexFlagUnavailable { flag: 'u', .. }
        )),
        other => panic!("expected a regex error, got {other:?}"),
    }
}

fn lex_err_versioned(src: &str, version: LanguageVersion) -> tsc_lex::lexer::LexError {
    let mut lexer =
        tsc_lex::lexer::Lexer::with_options("test", src.as_bytes(), version, LanguageVariant::TypeScript);
    loop {
        match lexer.next() {
            Some(Ok(_)) => continue,
            Some(Err(e)) => return e,
            None => panic!("expected an error, lexing ran to completion"),
        }
    }
}

#[test]
fn duplicate_flag_is_an_error() {
    let e = lex_err("/a/gg");
    match e.kind {
        LexErrorKind::Regex(re) => {
            assert_eq!(re.kind, RegexErrorKind::DuplicateRegexFlag { flag: 'g' })
        }
        other => panic!("expected a regex error, got {other:?}"),
    }
}

#[test]
fn unknown_flag_letter_is_an_error() {
    let e = lex_err("/a/z");
    match e.kind {
        LexErrorKind::Regex(re) => {
            assert_eq!(re.kind, RegexErrorKind::UnknownRegexFlag { flag: 'z' })
        }
        other => panic!("expected a regex error, got {other:?}"),
    }
}

#[test]
fn capturing_group_and_backreference_round_trip() {
    let r = only_regex("/(a)\\1/");
    assert_eq!(r.pattern.body.to_string(), "(a)\\1");
}

#[test]
fn character_class_with_range_round_trips() {
    let r = only_regex("/[a-z0-9]/");
    assert_eq!(r.pattern.body.to_string(), "[a-z0-9]");
}

#[test]
fn backreference_to_nonexistent_group_is_an_error() {
    let e = lex_err("/\\1/");
    match e.kind {
        LexErrorKind::Regex(re) => assert_eq!(
            re.kind,
            RegexErrorKind::BackreferenceNotAvailable { group: 1 }
        ),
        other => panic!("expected a regex error, got {other:?}"),
    }
}
