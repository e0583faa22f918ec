//! Scanner configuration.
//!
//! [`ScanConfig`] is a plain builder; [`ScanConfig::build`] validates it and
//! compiles an immutable [`Dialect`] that any number of scans can share.

use std::ops::RangeInclusive;

use crate::operators::{OperatorTable, MYSQL_OPERATORS};
use crate::patterns::{CommentDialect, PatternTables, MYSQL_IDENTIFIER_RANGES};
use crate::scan_error::ConfigError;

/// How one quote character behaves inside a literal.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct QuoteRule {
    /// Character that makes the next character literal.
    pub escape: Option<char>,
    /// Reject characters outside the Basic Multilingual Plane.
    pub bmp_only: bool,
}

/// Rules for `'`, `"` and `` ` ``.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct QuoteRules {
    rules: [QuoteRule; 3],
}

impl Default for QuoteRules {
    /// MySQL: backslash escapes in `'` and `"`; backticks have no escape
    /// and are limited to the BMP.
    fn default() -> Self {
        let string = QuoteRule {
            escape: Some('\\'),
            bmp_only: false,
        };
        QuoteRules {
            rules: [
                string,
                string,
                QuoteRule {
                    escape: None,
                    bmp_only: true,
                },
            ],
        }
    }
}

impl QuoteRules {
    fn slot(quote: char) -> Option<usize> {
        match quote {
            '\'' => Some(0),
            '"' => Some(1),
            '`' => Some(2),
            _ => None,
        }
    }

    /// Rule for `quote`. Non-quote characters get a rule with no escape.
    pub fn get(&self, quote: char) -> QuoteRule {
        Self::slot(quote).map_or(
            QuoteRule {
                escape: None,
                bmp_only: false,
            },
            |slot| self.rules[slot],
        )
    }

    fn set(&mut self, quote: char, rule: QuoteRule) -> Result<(), ConfigError> {
        let slot = Self::slot(quote).ok_or(ConfigError::UnknownQuote { quote })?;
        self.rules[slot] = rule;
        Ok(())
    }
}

/// Builder for a scanner [`Dialect`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScanConfig {
    operators: Vec<String>,
    identifier_ranges: Vec<RangeInclusive<char>>,
    comments: CommentDialect,
    quote_overrides: Vec<(char, QuoteRule)>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::mysql()
    }
}

impl ScanConfig {
    /// MySQL operators, identifier ranges, comments and quoting.
    pub fn mysql() -> Self {
        ScanConfig {
            operators: MYSQL_OPERATORS.iter().map(|&op| op.to_owned()).collect(),
            identifier_ranges: MYSQL_IDENTIFIER_RANGES.to_vec(),
            comments: CommentDialect::MySql,
            quote_overrides: Vec::new(),
        }
    }

    /// MySQL, except that `--` always opens a comment.
    pub fn sql92() -> Self {
        Self::mysql().with_comment_dialect(CommentDialect::Sql92)
    }

    /// Replace the operator vocabulary.
    ///
    /// `- . , ; ( ) =` are always operators and need not be listed.
    #[must_use]
    pub fn with_operators<I, S>(mut self, operators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.operators = operators.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the non-ASCII ranges that may appear in identifiers.
    #[must_use]
    pub fn with_identifier_ranges<I>(mut self, ranges: I) -> Self
    where
        I: IntoIterator<Item = RangeInclusive<char>>,
    {
        self.identifier_ranges = ranges.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_comment_dialect(mut self, comments: CommentDialect) -> Self {
        self.comments = comments;
        self
    }

    /// Override the escape and BMP rules of one quote character.
    #[must_use]
    pub fn with_quote_rule(mut self, quote: char, rule: QuoteRule) -> Self {
        self.quote_overrides.push((quote, rule));
        self
    }

    /// Validate and compile.
    pub fn build(self) -> Result<Dialect, ConfigError> {
        let operators = OperatorTable::new(&self.operators)?;

        for range in &self.identifier_ranges {
            if range.is_empty() || range.start().is_ascii() {
                return Err(ConfigError::InvalidIdentifierRange {
                    start: *range.start(),
                    end: *range.end(),
                });
            }
        }

        let mut quotes = QuoteRules::default();
        for &(quote, rule) in &self.quote_overrides {
            quotes.set(quote, rule)?;
        }

        tracing::debug!(
            operators = self.operators.len(),
            ranges = self.identifier_ranges.len(),
            comments = ?self.comments,
            "compiled scanner dialect"
        );

        Ok(Dialect {
            operators,
            patterns: PatternTables::new(self.identifier_ranges, self.comments),
            quotes,
        })
    }
}

/// Compiled, immutable scanner configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Dialect {
    operators: OperatorTable,
    patterns: PatternTables,
    quotes: QuoteRules,
}

impl Default for Dialect {
    fn default() -> Self {
        Self::mysql()
    }
}

impl Dialect {
    /// The MySQL dialect, without going through validation.
    pub fn mysql() -> Self {
        Dialect {
            operators: OperatorTable::mysql(),
            patterns: PatternTables::default(),
            quotes: QuoteRules::default(),
        }
    }

    #[inline]
    pub fn operators(&self) -> &OperatorTable {
        &self.operators
    }

    #[inline]
    pub fn patterns(&self) -> &PatternTables {
        &self.patterns
    }

    #[inline]
    pub fn quotes(&self) -> &QuoteRules {
        &self.quotes
    }
}

#[cfg(test)]
mod tests;
