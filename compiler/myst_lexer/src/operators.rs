//! Operator vocabulary and the longest-first operator matcher.

use smallvec::SmallVec;

use crate::char_class;
use crate::scan_error::ConfigError;

/// Single-character operators present in every vocabulary.
pub const ALWAYS_OPERATORS: [char; 7] = ['-', '.', ',', ';', '(', ')', '='];

/// MySQL 8 operators beyond [`ALWAYS_OPERATORS`].
pub const MYSQL_OPERATORS: &[&str] = &[
    "&", "&&", ">", ">>", ">=", "<", "<>", "!=", "<<", "<=", "<=>", "%", "*", "+", "->", "->>",
    "/", ":=", "^", "|", "||", "~", "!", ":", "?",
];

/// Compiled operator vocabulary.
///
/// Immutable after construction. Multi-character operators are matched
/// longest first; single characters come from a 128-entry ASCII set.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OperatorTable {
    /// `by_length[n]` holds the operators of `n` bytes, in vocabulary order.
    by_length: Vec<SmallVec<[Box<str>; 4]>>,
    single: [bool; 128],
}

impl OperatorTable {
    /// Compile a vocabulary. Every operator must be non-empty and spelled
    /// only with punctuation characters.
    pub fn new<I, S>(operators: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut by_length: Vec<SmallVec<[Box<str>; 4]>> = Vec::new();
        let mut single = [false; 128];
        for c in ALWAYS_OPERATORS {
            single[c as usize] = true;
        }

        for operator in operators {
            let operator = operator.as_ref();
            if operator.is_empty() {
                return Err(ConfigError::EmptyOperator);
            }
            if let Some(character) = operator.chars().find(|&c| !char_class::is_punctuation(c)) {
                return Err(ConfigError::InvalidOperator {
                    operator: operator.to_owned(),
                    character,
                });
            }

            // Punctuation is ASCII, so byte length equals character count.
            let len = operator.len();
            if len == 1 {
                let c = operator.as_bytes()[0];
                single[usize::from(c)] = true;
                continue;
            }
            if by_length.len() <= len {
                by_length.resize_with(len + 1, SmallVec::new);
            }
            let bucket = &mut by_length[len];
            if !bucket.iter().any(|known| &**known == operator) {
                bucket.push(operator.into());
            }
        }

        Ok(OperatorTable { by_length, single })
    }

    /// The default MySQL vocabulary.
    pub fn mysql() -> Self {
        // Infallible: every built-in spelling is punctuation.
        Self::new(MYSQL_OPERATORS).unwrap_or_else(|_| Self::fixed_only())
    }

    fn fixed_only() -> Self {
        let mut single = [false; 128];
        for c in ALWAYS_OPERATORS {
            single[c as usize] = true;
        }
        OperatorTable {
            by_length: Vec::new(),
            single,
        }
    }

    /// Length of the longest operator at the start of `rest`.
    pub fn match_len(&self, rest: &str) -> Option<usize> {
        for (len, bucket) in self.by_length.iter().enumerate().rev() {
            if len < 2 || rest.len() < len {
                continue;
            }
            if bucket.iter().any(|op| rest.starts_with(&**op)) {
                return Some(len);
            }
        }
        let first = rest.chars().next()?;
        (first.is_ascii() && self.single[first as usize]).then_some(1)
    }

    /// Length of the longest operator in the vocabulary.
    pub fn max_len(&self) -> usize {
        self.by_length
            .iter()
            .rposition(|bucket| !bucket.is_empty())
            .unwrap_or(1)
            .max(1)
    }

    /// Whether `c` is an operator by itself.
    pub fn is_single(&self, c: char) -> bool {
        c.is_ascii() && self.single[c as usize]
    }
}
