//! Test helpers shared by the integration suites under `tests/`.
//!
//! The lexer's `Token` equality is already tag-then-payload (locations
//! excluded, see `tsc_lex::lexer::token`), so `assert_token_sequence` just
//! leans on that `PartialEq` impl directly rather than reimplementing a
//! loose-equality comparison.

use tsc_lex::lexer::{LanguageVariant, LanguageVersion, LexResult, Lexer, Token, TokenKind};

/// Lexes `src` under the given version/variant to completion, panicking
/// with the lex error (and its location) if scanning fails before EOF.
pub fn lex_all(src: &str, version: LanguageVersion, variant: LanguageVariant) -> Vec<Token> {
    Lexer::with_options("test", src.as_bytes(), version, variant)
        .collect::<LexResult<Vec<_>>>()
        .unwrap_or_else(|e| panic!("lexing failed: {e}"))
}

/// Lexes `src` under the default TypeScript/latest-version settings.
pub fn lex(src: &str) -> Vec<Token> {
    lex_all(src, LanguageVersion::LATEST, LanguageVariant::TypeScript)
}

/// Lexes `src` under the JSX variant.
pub fn lex_jsx(src: &str) -> Vec<Token> {
    lex_all(src, LanguageVersion::LATEST, LanguageVariant::Jsx)
}

/// Drives the lexer to either its first error or end-of-stream, returning
/// whichever came first. Panics if the source lexes cleanly to completion.
pub fn lex_err(src: &str) -> tsc_lex::lexer::LexError {
    let mut lexer = Lexer::new("test", src.as_bytes());
    loop {
        match lexer.next() {
            Some(Ok(_)) => continue,
            Some(Err(e)) => return e,
            None => panic!("expected an error, but lexing ran to completion"),
        }
    }
}

/// Asserts that `actual`'s tags and payloads match `expected`, ignoring
/// source locations — the same equality `Token`'s own `PartialEq` already
/// implements, surfaced here with a readable panic message on mismatch.
pub fn assert_token_sequence(actual: &[Token], expected: &[TokenKind]) {
    let actual_kinds: Vec<&TokenKind> = actual.iter().map(|t| &t.kind).collect();
    let expected_kinds: Vec<&TokenKind> = expected.iter().collect();
    assert_eq!(
        actual_kinds, expected_kinds,
        "token sequence mismatch:\n  actual:   {actual_kinds:?}\n  expected: {expected_kinds:?}"
    );
}

/// Builds the expected `Vec<TokenKind>` for a sequence assertion without the
/// caller spelling out `vec![...]` by hand at every call site.
#[macro_export]
macro_rules! tokens {
    ($($kind:expr),* $(,)?) => {
        vec![$($kind),*]
    };
}
