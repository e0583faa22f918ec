//! Single-character classification.
//!
//! The ASCII range is answered from a 128-entry table of [`CharClass`]
//! flags built at compile time. Non-ASCII characters never carry a flag
//! here; whether they continue an identifier depends on the configured
//! ranges in [`PatternTables`](crate::patterns::PatternTables).

bitflags::bitflags! {
    /// Classes an ASCII character belongs to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CharClass: u16 {
        /// `' '`, `\t`, `\r`, `\n`.
        const WHITESPACE = 1 << 0;
        /// `'`, `"`, `` ` ``.
        const QUOTE = 1 << 1;
        /// First character of some comment opener: `-`, `#`, `/`.
        const COMMENT_INITIAL = 1 << 2;
        /// Characters operators are spelled with.
        const PUNCTUATION = 1 << 3;
        const DIGIT = 1 << 4;
        const HEX_DIGIT = 1 << 5;
        /// ASCII part of an identifier: letters, digits, `_`, `$`.
        const IDENTIFIER = 1 << 6;
        /// Prefix letter of a hex or binary string literal: `x`, `X`, `b`, `B`.
        const BINARY_OR_HEX = 1 << 7;
        /// Quote characters that may follow a hex/binary prefix letter.
        const PREFIXED_QUOTE = 1 << 8;
    }
}

const fn classify_ascii(b: u8) -> u16 {
    let mut bits = 0;
    if matches!(b, b' ' | b'\t' | b'\r' | b'\n') {
        bits |= CharClass::WHITESPACE.bits();
    }
    if matches!(b, b'\'' | b'"' | b'`') {
        bits |= CharClass::QUOTE.bits();
    }
    if matches!(b, b'\'' | b'"') {
        bits |= CharClass::PREFIXED_QUOTE.bits();
    }
    if matches!(b, b'-' | b'#' | b'/') {
        bits |= CharClass::COMMENT_INITIAL.bits();
    }
    if matches!(
        b,
        b'-' | b':'
            | b'!'
            | b'#'
            | b'%'
            | b'&'
            | b'('
            | b')'
            | b'*'
            | b'+'
            | b','
            | b'.'
            | b'/'
            | b';'
            | b'<'
            | b'='
            | b'>'
            | b'?'
            | b'['
            | b']'
            | b'^'
            | b'{'
            | b'|'
            | b'}'
            | b'~'
    ) {
        bits |= CharClass::PUNCTUATION.bits();
    }
    if b.is_ascii_digit() {
        bits |= CharClass::DIGIT.bits();
    }
    if b.is_ascii_hexdigit() {
        bits |= CharClass::HEX_DIGIT.bits();
    }
    if b.is_ascii_alphanumeric() || b == b'_' || b == b'$' {
        bits |= CharClass::IDENTIFIER.bits();
    }
    if matches!(b, b'x' | b'X' | b'b' | b'B') {
        bits |= CharClass::BINARY_OR_HEX.bits();
    }
    bits
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "index < 128 always fits in u8"
)]
const fn build_table() -> [u16; 128] {
    let mut table = [0u16; 128];
    let mut i = 0;
    while i < 128 {
        table[i] = classify_ascii(i as u8);
        i += 1;
    }
    table
}

static ASCII_CLASSES: [u16; 128] = build_table();

/// Classes of `c`. Empty for every non-ASCII character.
#[inline]
pub fn class_of(c: char) -> CharClass {
    if c.is_ascii() {
        CharClass::from_bits_retain(ASCII_CLASSES[c as usize])
    } else {
        CharClass::empty()
    }
}

#[inline]
pub fn is_whitespace(c: char) -> bool {
    class_of(c).contains(CharClass::WHITESPACE)
}

#[inline]
pub fn is_quote(c: char) -> bool {
    class_of(c).contains(CharClass::QUOTE)
}

/// Quote characters accepted after an `x`/`b` literal prefix (`'` and `"`).
#[inline]
pub fn is_prefixed_quote(c: char) -> bool {
    class_of(c).contains(CharClass::PREFIXED_QUOTE)
}

#[inline]
pub fn is_comment_initial(c: char) -> bool {
    class_of(c).contains(CharClass::COMMENT_INITIAL)
}

#[inline]
pub fn is_punctuation(c: char) -> bool {
    class_of(c).contains(CharClass::PUNCTUATION)
}

#[inline]
pub fn is_digit(c: char) -> bool {
    class_of(c).contains(CharClass::DIGIT)
}

#[inline]
pub fn is_hex_digit(c: char) -> bool {
    class_of(c).contains(CharClass::HEX_DIGIT)
}

/// ASCII identifier character (letter, digit, `_`, `$`).
#[inline]
pub fn is_ascii_identifier(c: char) -> bool {
    class_of(c).contains(CharClass::IDENTIFIER)
}

#[inline]
pub fn is_binary_or_hex(c: char) -> bool {
    class_of(c).contains(CharClass::BINARY_OR_HEX)
}

/// Outside the Basic Multilingual Plane.
///
/// In UTF-16 such a character is a high/low surrogate pair. A `&str`
/// cannot hold an unpaired surrogate, so the pair is always complete.
#[inline]
pub fn is_supplementary(c: char) -> bool {
    u32::from(c) > 0xFFFF
}
