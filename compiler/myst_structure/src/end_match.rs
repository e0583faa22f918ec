//! End-sequence matching.
//!
//! Two matchers share the pattern language of [`EndPattern`]:
//!
//! - [`matches_compound_end`] checks, at a `;`, whether the statement just
//!   finished is the end of the enclosing compound (`END IF;`,
//!   `UNTIL x END REPEAT lbl;`).
//! - [`look_ahead`] checks, at the first token of a multi-token end,
//!   whether the following tokens complete it.
//!
//! Both skip junk and compare keywords through [`Grammar::keyword_eq`].
//! An optional label never consumes a token it does not match.

use myst_lexer::{Token, TokenKind};

use crate::grammar::{EndPattern, Grammar};
use crate::tree::NodeRef;

/// Match the significant items of a statement against a compound's end.
///
/// Patterns are matched left to right until a skip-to-end-of-line marker,
/// then right to left from the last item. Running out of items while
/// matching right to left still counts as a match.
pub(crate) fn matches_compound_end(
    grammar: &Grammar,
    items: &[NodeRef<'_>],
    end: &[EndPattern],
) -> bool {
    let mut consumed = 0;
    let mut skip = None;

    for (position, pattern) in end.iter().enumerate() {
        let item = items.get(consumed).copied();
        match pattern {
            EndPattern::Keyword(keyword) => {
                if item.is_some_and(|item| is_keyword(grammar, item, keyword)) {
                    consumed += 1;
                } else {
                    return false;
                }
            }
            EndPattern::OptionalLabel => {
                if item.is_some_and(|item| is_label(grammar, item)) {
                    consumed += 1;
                }
            }
            EndPattern::SkipToEndOfLine => {
                skip = Some((position, consumed));
                break;
            }
        }
    }

    let Some((skip_pattern, skip_item)) = skip else {
        return true;
    };

    let mut pattern_end = end.len();
    let mut remaining = items.len();
    while pattern_end > skip_pattern + 1 && remaining > skip_item + 1 {
        pattern_end -= 1;
        let item = items[remaining - 1];
        match &end[pattern_end] {
            EndPattern::Keyword(keyword) => {
                if is_keyword(grammar, item, keyword) {
                    remaining -= 1;
                } else {
                    return false;
                }
            }
            EndPattern::OptionalLabel => {
                if is_label(grammar, item) {
                    remaining -= 1;
                }
            }
            EndPattern::SkipToEndOfLine => break,
        }
    }
    true
}

/// Try to complete `end` starting at `tokens[from]`, which already matched
/// its first element.
///
/// Returns the index of the last token of the match.
pub(crate) fn look_ahead(
    grammar: &Grammar,
    tokens: &[Token],
    from: usize,
    end: &[EndPattern],
) -> Option<usize> {
    let mut last = from;
    for (position, pattern) in end.iter().enumerate().skip(1) {
        match pattern {
            EndPattern::Keyword(keyword) => {
                let next = next_significant(tokens, last)?;
                if !grammar.keyword_eq(tokens[next].text(), keyword) {
                    return None;
                }
                last = next;
            }
            EndPattern::OptionalLabel => {
                if let Some(next) = next_significant(tokens, last)
                    .filter(|&next| grammar.is_label(&tokens[next]))
                {
                    last = next;
                }
            }
            EndPattern::SkipToEndOfLine => {
                return rest_of_line(grammar, tokens, last, &end[position + 1..]);
            }
        }
    }
    Some(last)
}

/// Match `rest` right to left against the significant tokens between
/// `last` and the next line break.
fn rest_of_line(
    grammar: &Grammar,
    tokens: &[Token],
    last: usize,
    rest: &[EndPattern],
) -> Option<usize> {
    let start = last + 1;
    let window: Vec<usize> = tokens[start..]
        .iter()
        .take_while(|token| !is_line_break(token))
        .enumerate()
        .filter(|(_, token)| !token.is_junk())
        .map(|(offset, _)| start + offset)
        .collect();

    let mut remaining = window.len();
    for pattern in rest.iter().rev() {
        let candidate = remaining.checked_sub(1).map(|slot| &tokens[window[slot]]);
        match pattern {
            EndPattern::Keyword(keyword) => {
                if !grammar.keyword_eq(candidate?.text(), keyword) {
                    return None;
                }
                remaining -= 1;
            }
            EndPattern::OptionalLabel => {
                if candidate.is_some_and(|token| grammar.is_label(token)) {
                    remaining -= 1;
                }
            }
            EndPattern::SkipToEndOfLine => return None,
        }
    }
    Some(window.last().copied().unwrap_or(last))
}

pub(crate) fn next_significant(tokens: &[Token], after: usize) -> Option<usize> {
    let start = after + 1;
    tokens
        .get(start..)?
        .iter()
        .position(|token| !token.is_junk())
        .map(|offset| start + offset)
}

fn is_line_break(token: &Token) -> bool {
    token.kind() == TokenKind::Whitespace
        && token.text().contains(|c: char| c == '\n' || c == '\r')
}

fn is_keyword(grammar: &Grammar, item: NodeRef<'_>, keyword: &str) -> bool {
    item.as_token()
        .is_some_and(|token| grammar.keyword_eq(token.text(), keyword))
}

fn is_label(grammar: &Grammar, item: NodeRef<'_>) -> bool {
    item.as_token().is_some_and(|token| grammar.is_label(token))
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests use unwrap for concise assertions"
)]
