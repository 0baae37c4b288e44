//! Character-class predicates used by `class!` terminals.

/// ASCII letter; deliberately excludes accented and non-Latin letters.
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_tab(c: char) -> bool {
    c == '\t'
}

/// The ASCII slash or U+2044 FRACTION SLASH.
pub fn is_fraction_slash(c: char) -> bool {
    c == '/' || c == '⁄'
}

/// Joiner between a percentage and the word that follows it ("1%-fat", "2% milk").
pub fn is_percentage_joiner(c: char) -> bool {
    c == '-' || c == ' '
}
