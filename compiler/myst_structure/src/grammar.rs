//! Compound-statement and bracket descriptors.
//!
//! A [`Grammar`] tells the grouper which keywords open a compound
//! statement (`BEGIN`, `IF`, `CASE`, ...), what token sequence ends each
//! one, and which tokens open and close brackets. It is validated once
//! and immutable afterwards.
//!
//! # Keyword Comparison
//!
//! Keywords compare ASCII case-insensitively only when both sides are no
//! longer than the longest compound begin keyword; longer text must match
//! exactly. Every comparison the grouper makes goes through
//! [`Grammar::keyword_eq`].

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use myst_lexer::{Marker, Token, TokenKind};

use crate::error::GrammarError;

/// One element of an end sequence.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum EndPattern {
    /// A token equal to this keyword.
    Keyword(Box<str>),
    /// Zero or one label token.
    OptionalLabel,
    /// Everything up to the next line break; the rest of the sequence is
    /// matched from the end of that line backward.
    SkipToEndOfLine,
}

impl EndPattern {
    pub fn keyword(keyword: &str) -> Self {
        EndPattern::Keyword(keyword.into())
    }

    pub fn as_keyword(&self) -> Option<&str> {
        match self {
            EndPattern::Keyword(keyword) => Some(keyword),
            _ => None,
        }
    }
}

/// Token sequence that ends a group.
pub type EndSequence = SmallVec<[EndPattern; 6]>;

/// A compound statement: begin keyword, end sequence, and an optional
/// shorter end used when the compound appears inside an expression.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CompoundDescriptor {
    pub begin: Box<str>,
    pub end: EndSequence,
    pub inline_end: Option<EndSequence>,
}

impl CompoundDescriptor {
    pub fn new<I>(begin: &str, end: I) -> Self
    where
        I: IntoIterator<Item = EndPattern>,
    {
        CompoundDescriptor {
            begin: begin.into(),
            end: end.into_iter().collect(),
            inline_end: None,
        }
    }

    #[must_use]
    pub fn with_inline_end<I>(mut self, end: I) -> Self
    where
        I: IntoIterator<Item = EndPattern>,
    {
        self.inline_end = Some(end.into_iter().collect());
        self
    }
}

/// A bracket pair. The begin is a single token; the end is a sequence.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BracketDescriptor {
    pub begin: Box<str>,
    pub end: EndSequence,
}

impl BracketDescriptor {
    pub fn new<I>(begin: &str, end: I) -> Self
    where
        I: IntoIterator<Item = EndPattern>,
    {
        BracketDescriptor {
            begin: begin.into(),
            end: end.into_iter().collect(),
        }
    }
}

/// Words that never count as a label.
pub const MYSQL_RESERVED_LABELS: [&str; 5] = ["IF", "REPEAT", "CASE", "WHILE", "LOOP"];

/// Validated compound and bracket table.
#[derive(Clone, Debug)]
pub struct Grammar {
    compounds: Vec<CompoundDescriptor>,
    brackets: Vec<BracketDescriptor>,
    reserved_labels: Vec<Box<str>>,
    /// Uppercased begin keyword → index into `compounds`.
    compound_index: FxHashMap<Box<str>, usize>,
    max_keyword_len: usize,
    statement_end: EndSequence,
}

impl Default for Grammar {
    fn default() -> Self {
        Self::mysql()
    }
}

impl Grammar {
    /// `BEGIN`, `IF`, `LOOP`, `WHILE`, `REPEAT` and `CASE` blocks, with
    /// `(`…`)` and `WHEN`…`THEN` brackets.
    pub fn mysql() -> Self {
        use EndPattern::{OptionalLabel, SkipToEndOfLine};
        let kw = EndPattern::keyword;
        let compounds = vec![
            CompoundDescriptor::new("BEGIN", [kw("END"), OptionalLabel, kw(";")]),
            CompoundDescriptor::new("IF", [kw("END"), kw("IF"), kw(";")]),
            CompoundDescriptor::new("LOOP", [kw("END"), kw("LOOP"), OptionalLabel, kw(";")]),
            CompoundDescriptor::new("WHILE", [kw("END"), kw("WHILE"), OptionalLabel, kw(";")]),
            CompoundDescriptor::new(
                "REPEAT",
                [
                    kw("UNTIL"),
                    SkipToEndOfLine,
                    kw("END"),
                    kw("REPEAT"),
                    OptionalLabel,
                    kw(";"),
                ],
            ),
            CompoundDescriptor::new("CASE", [kw("END"), kw("CASE"), kw(";")])
                .with_inline_end([kw("END")]),
        ];
        let brackets = vec![
            BracketDescriptor::new("(", [kw(")")]),
            BracketDescriptor::new("WHEN", [kw("THEN")]),
        ];
        Self::build(compounds, brackets, &MYSQL_RESERVED_LABELS)
    }

    /// Validate and index a custom table.
    pub fn new<S>(
        compounds: Vec<CompoundDescriptor>,
        brackets: Vec<BracketDescriptor>,
        reserved_labels: &[S],
    ) -> Result<Self, GrammarError>
    where
        S: AsRef<str>,
    {
        for compound in &compounds {
            validate(&compound.begin, &compound.end)?;
            if let Some(inline_end) = &compound.inline_end {
                validate(&compound.begin, inline_end)?;
            }
        }
        for bracket in &brackets {
            validate(&bracket.begin, &bracket.end)?;
        }
        Ok(Self::build(compounds, brackets, reserved_labels))
    }

    fn build<S>(
        compounds: Vec<CompoundDescriptor>,
        brackets: Vec<BracketDescriptor>,
        reserved_labels: &[S],
    ) -> Self
    where
        S: AsRef<str>,
    {
        let max_keyword_len = compounds
            .iter()
            .map(|compound| compound.begin.len())
            .max()
            .unwrap_or(0);
        let compound_index = compounds
            .iter()
            .enumerate()
            .map(|(index, compound)| (compound.begin.to_ascii_uppercase().into_boxed_str(), index))
            .collect();
        Grammar {
            compounds,
            brackets,
            reserved_labels: reserved_labels
                .iter()
                .map(|label| label.as_ref().into())
                .collect(),
            compound_index,
            max_keyword_len,
            statement_end: std::iter::once(EndPattern::keyword(";")).collect(),
        }
    }

    pub fn compounds(&self) -> &[CompoundDescriptor] {
        &self.compounds
    }

    pub fn brackets(&self) -> &[BracketDescriptor] {
        &self.brackets
    }

    pub fn reserved_labels(&self) -> &[Box<str>] {
        &self.reserved_labels
    }

    /// Length of the longest compound begin keyword.
    #[inline]
    pub fn max_keyword_len(&self) -> usize {
        self.max_keyword_len
    }

    /// End sequence of an ordinary statement: `;`.
    #[inline]
    pub fn statement_end(&self) -> &[EndPattern] {
        &self.statement_end
    }

    /// Compare token text with a keyword under the length rule.
    pub fn keyword_eq(&self, text: &str, keyword: &str) -> bool {
        if text.len() <= self.max_keyword_len && keyword.len() <= self.max_keyword_len {
            text.eq_ignore_ascii_case(keyword)
        } else {
            text == keyword
        }
    }

    /// The compound opened by `text`, with its index.
    pub fn compound_for(&self, text: &str) -> Option<(usize, &CompoundDescriptor)> {
        if text.len() > self.max_keyword_len {
            return None;
        }
        let index = *self.compound_index.get(text.to_ascii_uppercase().as_str())?;
        Some((index, &self.compounds[index]))
    }

    /// The bracket opened by `text`.
    pub fn bracket_for(&self, text: &str) -> Option<&BracketDescriptor> {
        self.brackets
            .iter()
            .find(|bracket| self.keyword_eq(text, &bracket.begin))
    }

    /// Identifier or backtick-quoted name that is not a reserved word.
    pub fn is_label(&self, token: &Token) -> bool {
        let name_like = match token.kind() {
            TokenKind::Identifier => true,
            TokenKind::Quoted => matches!(
                token.marker(),
                Some(Marker::Quote {
                    prefix: None,
                    quote: '`'
                })
            ),
            _ => false,
        };
        name_like
            && !self
                .reserved_labels
                .iter()
                .any(|reserved| self.keyword_eq(token.text(), reserved))
    }
}

fn validate(begin: &str, end: &[EndPattern]) -> Result<(), GrammarError> {
    if begin.is_empty() {
        return Err(GrammarError::EmptyBegin);
    }
    let begin = || begin.to_owned();
    match end {
        [] => Err(GrammarError::EmptyEndSequence { begin: begin() }),
        [EndPattern::OptionalLabel, ..] => Err(GrammarError::OptionalAtStart { begin: begin() }),
        [EndPattern::SkipToEndOfLine, ..] | [.., EndPattern::SkipToEndOfLine] => {
            Err(GrammarError::MisplacedSkipToEndOfLine { begin: begin() })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests use unwrap for concise assertions"
)]
mod tests;
