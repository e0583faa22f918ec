//! Scanner error types.
//!
//! Content defects never abort a scan: they are carried on the invalid
//! token as a [`ScanErrorKind`] and can be collected afterwards through
//! [`TokenList::defects`](crate::TokenList::defects). The only failure
//! that propagates is [`MissingInput`].

use crate::Span;

/// What made a token invalid.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScanErrorKind {
    /// Missing closing quote before end of input.
    #[error("quoted literal is not closed before end of input")]
    UnterminatedQuote,
    /// `/*` without a matching `*/`.
    #[error("block comment is not closed before end of input")]
    UnterminatedBlockComment,
    /// Supplementary-plane character inside a BMP-only quote.
    #[error("quoted literal contains a character outside the Basic Multilingual Plane")]
    InvalidUnicodeInQuote,
    /// Punctuation that starts no configured operator.
    #[error("punctuation does not start any known operator")]
    UnmatchedPunctuation,
    /// More than two leading `@`.
    #[error("more than two `@` sigils")]
    TooManySigils,
    /// `@` or `@@` not followed by a name or quoted name.
    #[error("`@` is not followed by a variable name")]
    MalformedAtIdentifier,
    #[error("unrecognized character")]
    UnrecognizedCharacter,
}

/// One invalid token: what went wrong and where.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} at {span}")]
pub struct ScanDefect {
    pub kind: ScanErrorKind,
    pub span: Span,
}

/// No input was supplied at all.
///
/// Distinct from empty input, which scans to an empty token list.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("no input supplied")]
pub struct MissingInput;

/// Rejected scanner configuration.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("operator {operator:?} contains non-punctuation character {character:?}")]
    InvalidOperator { operator: String, character: char },
    #[error("operator vocabulary contains an empty operator")]
    EmptyOperator,
    #[error("identifier range {start:?}..={end:?} is empty or reaches into ASCII")]
    InvalidIdentifierRange { start: char, end: char },
    #[error("{quote:?} is not a quote character")]
    UnknownQuote { quote: char },
}
