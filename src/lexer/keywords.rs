//! The keyword table: a compiled-in mapping from spelling to
//! `(Keyword, minimum LanguageVersion)`, consulted by the top-level dispatcher
//! (C8) once an identifier has been scanned (base spec §9 "global mutable
//! state" design note — this is a constant, not mutable state).

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::token::Keyword;
use super::version::LanguageVersion;

static KEYWORD_TABLE: Lazy<HashMap<&'static str, (Keyword, LanguageVersion)>> = Lazy::new(|| {
    use Keyword::*;
    use LanguageVersion::Es3 as E3;
    let es2015 = LanguageVersion::Es2015;
    let es2022 = LanguageVersion::Es2022;
    let mut m = HashMap::new();
    let mut add = |name: &'static str, kw: Keyword, min: LanguageVersion| {
        m.insert(name, (kw, min));
    };

    // Reserved words present since ES3.
    for (name, kw) in [
        ("break", Break),
        ("case", Case),
        ("catch", Catch),
        ("continue", Continue),
        ("debugger", Debugger),
        ("default", Default),
        ("delete", Delete),
        ("do", Do),
        ("else", Else),
        ("false", False),
        ("finally", Finally),
        ("for", For),
        ("function", Function),
        ("if", If),
        ("in", In),
        ("instanceof", InstanceOf),
        ("new", New),
        ("null", Null),
        ("return", Return),
        ("switch", Switch),
        ("this", This),
        ("throw", Throw),
        ("true", True),
        ("try", Try),
        ("typeof", TypeOf),
        ("var", Var),
        ("void", Void),
        ("while", While),
        ("with", With),
    ] {
        add(name, kw, E3);
    }

    // `enum` was a reserved (future) word from ES3 onward even before it had
    // ES3 semantics.
    add("enum", Enum, E3);

    // Strict-mode future-reserved words, usable as identifiers pre-ES5 but
    // treated as contextual keywords from ES5 onward.
    for (name, kw) in [
        ("implements", Implements),
        ("interface", Interface),
        ("package", Package),
        ("private", Private),
        ("protected", Protected),
        ("public", Public),
        ("static", Static),
        ("yield", Yield),
    ] {
        add(name, kw, LanguageVersion::Es5);
    }

    add("let", Let, es2015);
    add("of", Of, es2015);

    add("as", As, es2015);
    add("from", From, es2015);
    add("async", Async, es2015);
    add("await", Await, es2015);

    // `class`/`const`/`export`/`extends`/`import`/`super` only became
    // keywords with ES2015 class syntax and modules; pre-ES2015 they're
    // plain identifiers.
    for (name, kw) in [
        ("class", Class),
        ("const", Const),
        ("export", Export),
        ("extends", Extends),
        ("import", Import),
        ("super", Super),
    ] {
        add(name, kw, es2015);
    }

    add("using", Using, es2022);

    // TypeScript's own type-level contextual keywords: not gated by an
    // ECMAScript version, always recognized in this lexer (TypeScript itself
    // is a single evolving dialect on top of whichever ES target is chosen).
    for (name, kw) in [
        ("any", Any),
        ("boolean", Boolean),
        ("constructor", Constructor),
        ("declare", Declare),
        ("get", Get),
        ("infer", Infer),
        ("is", Is),
        ("keyof", KeyOf),
        ("module", Module),
        ("namespace", Namespace),
        ("never", Never),
        ("readonly", Readonly),
        ("require", Require),
        ("number", Number),
        ("object", Object),
        ("set", Set),
        ("string", StringType),
        ("symbol", Symbol),
        ("type", Type),
        ("undefined", Undefined),
        ("unique", Unique),
        ("unknown", Unknown),
        ("global", Global),
        ("bigint", Bigint),
        ("asserts", Asserts),
        ("abstract", Abstract),
        ("satisfies", Satisfies),
        ("override", Override),
        ("out", Out),
        ("accessor", Accessor),
    ] {
        add(name, kw, E3);
    }

    m
});

/// Look up `name` as a keyword, gated by `version`. Returns `None` both for
/// spellings that are never keywords and for ones whose minimum version
/// exceeds `version` (in which case the caller treats the spelling as a plain
/// identifier, matching TypeScript's own behavior for e.g. `let` under ES3).
pub fn lookup(name: &str, version: LanguageVersion) -> Option<Keyword> {
    let (kw, min) = KEYWORD_TABLE.get(name)?;
    version.at_least(*min).then_some(*kw)
}
