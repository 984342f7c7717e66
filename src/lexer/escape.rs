//! The single-character escape table shared by the string/template scanner
//! (C4) and the regex sub-parser's character-class escapes (C5), per base
//! spec §4.4's note that class escapes decode through "the same escape
//! table as strings".

pub(crate) fn simple_escape(c: char) -> Option<char> {
    match c {
        'b' => Some('\u{8}'),
        'f' => Some('\u{C}'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        'v' => Some('\u{B}'),
        '\\' | '/' | '\'' | '"' => Some(c),
        '^' | '$' | '.' | '*' | '+' | '?' | '(' | ')' | '[' | ']' | '{' | '}' | '|' => Some(c),
        _ => None,
    }
}
