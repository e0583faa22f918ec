//! Multi-character recognizers.
//!
//! Each recognizer is a longest-match over the start of a `&str` and
//! returns the matched length in bytes. The only configurable parts are
//! the non-ASCII identifier ranges and the comment dialect.

use std::ops::RangeInclusive;

use crate::char_class;
use crate::token::CommentStyle;

/// Which comment openers the dialect accepts for `--`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum CommentDialect {
    /// `--` opens a comment only when followed by whitespace or end of input.
    #[default]
    MySql,
    /// `--` always opens a comment.
    Sql92,
}

/// Identifier ranges MySQL accepts in unquoted names: U+0080 to U+FFFF.
pub const MYSQL_IDENTIFIER_RANGES: &[RangeInclusive<char>] = &['\u{80}'..='\u{FFFF}'];

/// The configurable recognizer set of a dialect.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatternTables {
    identifier_ranges: Vec<RangeInclusive<char>>,
    comments: CommentDialect,
}

impl Default for PatternTables {
    fn default() -> Self {
        PatternTables {
            identifier_ranges: MYSQL_IDENTIFIER_RANGES.to_vec(),
            comments: CommentDialect::MySql,
        }
    }
}

impl PatternTables {
    pub(crate) fn new(identifier_ranges: Vec<RangeInclusive<char>>, comments: CommentDialect) -> Self {
        PatternTables {
            identifier_ranges,
            comments,
        }
    }

    #[inline]
    pub fn comment_dialect(&self) -> CommentDialect {
        self.comments
    }

    pub fn identifier_ranges(&self) -> &[RangeInclusive<char>] {
        &self.identifier_ranges
    }

    /// ASCII letter, digit, `_`, `$`, or a character in a configured range.
    #[inline]
    pub fn is_identifier_char(&self, c: char) -> bool {
        if c.is_ascii() {
            char_class::is_ascii_identifier(c)
        } else {
            self.identifier_ranges.iter().any(|range| range.contains(&c))
        }
    }

    /// The comment style opening at the start of `rest`, if any.
    pub fn comment_start(&self, rest: &str) -> Option<CommentStyle> {
        let bytes = rest.as_bytes();
        match bytes.first()? {
            b'#' => Some(CommentStyle::Hash),
            b'/' if bytes.get(1) == Some(&b'*') => Some(CommentStyle::Block),
            b'-' if bytes.get(1) == Some(&b'-') => match self.comments {
                CommentDialect::Sql92 => Some(CommentStyle::DoubleDash),
                CommentDialect::MySql => match rest[2..].chars().next() {
                    None => Some(CommentStyle::DoubleDash),
                    Some(c) if c.is_whitespace() => Some(CommentStyle::DoubleDash),
                    Some(_) => None,
                },
            },
            _ => None,
        }
    }

    /// `0x` followed by one or more hex digits.
    pub fn hex_number_len(&self, rest: &str) -> Option<usize> {
        let digits = rest.strip_prefix("0x")?;
        let len = leading_len(digits, char_class::is_hex_digit);
        (len > 0).then_some(2 + len)
    }

    /// `.digits` or `digits[.digits]`, then an optional `e`/`E` exponent
    /// with optional sign and digits.
    pub fn number_len(&self, rest: &str) -> Option<usize> {
        let bytes = rest.as_bytes();
        let mut len = match bytes.first()? {
            b'.' => {
                let fraction = leading_len(&rest[1..], char_class::is_digit);
                if fraction == 0 {
                    return None;
                }
                1 + fraction
            }
            b'0'..=b'9' => {
                let mut len = leading_len(rest, char_class::is_digit);
                if bytes.get(len) == Some(&b'.') {
                    len += 1 + leading_len(&rest[len + 1..], char_class::is_digit);
                }
                len
            }
            _ => return None,
        };
        if matches!(bytes.get(len), Some(b'e' | b'E')) {
            len += 1;
            if matches!(bytes.get(len), Some(b'-' | b'+')) {
                len += 1;
            }
            len += leading_len(&rest[len..], char_class::is_digit);
        }
        Some(len)
    }

    /// Run of space, tab, CR and LF.
    pub fn whitespace_len(&self, rest: &str) -> usize {
        leading_len(rest, char_class::is_whitespace)
    }

    /// Run of identifier characters.
    pub fn identifier_len(&self, rest: &str) -> usize {
        leading_len(rest, |c| self.is_identifier_char(c))
    }

    /// Run of identifier characters and dots, as allowed after `@`.
    pub fn identifier_after_at_len(&self, rest: &str) -> usize {
        leading_len(rest, |c| c == '.' || self.is_identifier_char(c))
    }
}

fn leading_len(text: &str, pred: impl Fn(char) -> bool) -> usize {
    text.char_indices()
        .find(|&(_, c)| !pred(c))
        .map_or(text.len(), |(i, _)| i)
}
