//! Keyword recognition and its version gating (C2/C8, `src/lexer/keywords.rs`).

use test_utils::lex_all;
use tsc_lex::lexer::token::{Identifier, Keyword};
use tsc_lex::lexer::{LanguageVariant, LanguageVersion, TokenKind};

fn kinds(src: &str, version: LanguageVersion) -> Vec<TokenKind> {
    lex_all(src, version, LanguageVariant::TypeScript)
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

#[test]
fn reserved_word_recognized_since_es3() {
    let k = kinds("typeof x", LanguageVersion::Es3);
    assert_eq!(k[0], TokenKind::Keyword(Keyword::TypeOf));
}

#[test]
fn let_is_an_identifier_under_es3() {
    let k = kinds("let", LanguageVersion::Es3);
    assert_eq!(k[0], TokenKind::Identifier(Identifier { name: "let".into(), private: false }));
}

#[test]
fn let_is_a_keyword_from_es2015_onward() {
    let k = kinds("let", LanguageVersion::Es2015);
    assert_eq!(k[0], TokenKind::Keyword(Keyword::Let));
}

#[test]
fn using_is_an_identifier_before_es2022() {
    let k = kinds("using", LanguageVersion::Es2021);
    assert_eq!(k[0], TokenKind::Identifier(Identifier { name: "using".into(), private: false }));
}

#[test]
fn using_is_a_keyword_from_es2022() {
    let k = kinds("using", LanguageVersion::Es2022);
    assert_eq!(k[0], TokenKind::Keyword(Keyword::Using));
}

#[test]
fn strict_mode_future_reserved_words_require_es5() {
    let k = kinds("implements", LanguageVersion::Es3);
    assert_eq!(k[0], TokenKind::Identifier(Identifier { name: "implements".into(), private: false }));
    let k = kinds("implements", LanguageVersion::Es5);
    assert_eq!(k[0], TokenKind::Keyword(Keyword::Implements));
}

#[test]
fn typescript_type_level_keywords_are_not_version_gated() {
    let k = kinds("keyof", LanguageVersion::Es3);
    assert_eq!(k[0], TokenKind::Keyword(Keyword::KeyOf));
}

#[test]
fn unreserved_spelling_is_always_an_identifier() {
    let k = kinds("frobnicate", LanguageVersion::EsNext);
    assert_eq!(k[0], TokenKind::Identifier(Identifier { name: "frobnicate".into(), private: false }));
}

#[test]
fn every_ecma_reserved_word_lexes_as_its_keyword() {
    let words = [
        ("break", Keyword::Break), ("case", Keyword::Case), ("catch", Keyword::Catch),
        ("class", Keyword::Class), ("const", Keyword::Const), ("continue", Keyword::Continue),
        ("debugger", Keyword::Debugger), ("default", Keyword::Default), ("delete", Keyword::Delete),
        ("do", Keyword::Do), ("else", Keyword::Else), ("enum", Keyword::Enum),
        ("export", Keyword::Export), ("extends", Keyword::Extends), ("false", Keyword::False),
        ("finally", Keyword::Finally), ("for", Keyword::For), ("function", Keyword::Function),
        ("if", Keyword::If), ("import", Keyword::Import), ("in", Keyword::In),
        ("instanceof", Keyword::InstanceOf), ("new", Keyword::New), ("null", Keyword::Null),
        ("return", Keyword::Return), ("super", Keyword::Super), ("switch", Keyword::Switch),
        ("this", Keyword::This), ("throw", Keyword::Throw), ("true", Keyword::True),
        ("try", Keyword::Try), ("typeof", Keyword::TypeOf), ("var", Keyword::Var),
        ("void", Keyword::Void), ("while", Keyword::While), ("with", Keyword::With),
    ];
    for (word, expected) in words {
        let k = kinds(word, LanguageVersion::EsNext);
        assert_eq!(k[0], TokenKind::Keyword(expected), "spelling {word:?} should lex as a keyword");
    }
}
