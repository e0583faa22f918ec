//! Coarse split of a script into code, quoted literals and comments.
//!
//! Built from an existing token sequence: consecutive code tokens merge
//! into one segment, while every quoted literal and every comment is a
//! segment of its own. Invalid literals and unterminated comments keep
//! their category, so the segments still cover the whole input.

use crate::token::{Marker, Token, TokenKind};
use crate::Span;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SegmentKind {
    Code,
    Quoted,
    Comment,
}

/// A run of input text of one [`SegmentKind`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub span: Span,
    pub text: String,
}

fn segment_kind(token: &Token) -> SegmentKind {
    match (token.kind(), token.marker()) {
        (TokenKind::Quoted, _) | (TokenKind::Invalid, Some(Marker::Quote { .. })) => {
            SegmentKind::Quoted
        }
        (TokenKind::Comment, _) | (TokenKind::Invalid, Some(Marker::Comment(_))) => {
            SegmentKind::Comment
        }
        _ => SegmentKind::Code,
    }
}

/// Split `tokens` into segments. Empty input gives no segments.
pub fn split_segments<'t, I>(tokens: I) -> Vec<Segment>
where
    I: IntoIterator<Item = &'t Token>,
{
    let mut segments: Vec<Segment> = Vec::new();
    for token in tokens {
        let kind = segment_kind(token);
        match segments.last_mut() {
            Some(last) if kind == SegmentKind::Code && last.kind == SegmentKind::Code => {
                last.span = last.span.merge(token.span());
                last.text.push_str(token.text());
            }
            _ => segments.push(Segment {
                kind,
                span: token.span(),
                text: token.text().to_owned(),
            }),
        }
    }
    segments
}
