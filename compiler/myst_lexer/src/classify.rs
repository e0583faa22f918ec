//! Classification of already-scanned token text.
//!
//! These predicates look only at the first and last characters of a token,
//! so they work on any token text, including text produced by another
//! tokenizer.

use crate::char_class;

/// Whitespace token: the first character is a space, tab, CR or LF.
pub fn is_whitespace(text: &str) -> bool {
    text.chars().next().is_some_and(char_class::is_whitespace)
}

/// Comment token: `#...`, `--...`, or a closed `/*...*/`.
pub fn is_comment(text: &str) -> bool {
    text.starts_with('#')
        || text.starts_with("--")
        || (text.len() >= 4 && text.starts_with("/*") && text.ends_with("*/"))
}

/// Quoted token: opens with a quote (after an optional `x`/`b` prefix)
/// and ends with a quote.
pub fn is_quoted(text: &str) -> bool {
    let mut chars = text.chars();
    let start = match chars.next() {
        Some(c) if char_class::is_binary_or_hex(c) => chars.next(),
        first => first,
    };
    let end = text.chars().next_back();
    start.is_some_and(char_class::is_quote) && end.is_some_and(char_class::is_quote)
}

/// Split `text` into alternating runs of whitespace and non-whitespace.
pub fn split_on_spaces(text: &str) -> Vec<&str> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut in_space = None;
    for (i, c) in text.char_indices() {
        let space = char_class::is_whitespace(c);
        match in_space {
            Some(previous) if previous != space => {
                runs.push(&text[start..i]);
                start = i;
            }
            _ => {}
        }
        in_space = Some(space);
    }
    if start < text.len() {
        runs.push(&text[start..]);
    }
    runs
}

#[cfg(test)]
mod tests;
