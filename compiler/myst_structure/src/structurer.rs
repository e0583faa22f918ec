//! Reusable tokenize-then-group handle.

use std::sync::Arc;

use myst_lexer::{MissingInput, Tokenizer};

use crate::grammar::Grammar;
use crate::grouper::Grouper;
use crate::tree::Tree;

/// A [`Tokenizer`] paired with a shared [`Grammar`].
///
/// Cloning is cheap; clones may be used from any thread.
#[derive(Clone, Debug, Default)]
pub struct Structurer {
    tokenizer: Tokenizer,
    grammar: Arc<Grammar>,
}

impl Structurer {
    pub fn new(tokenizer: Tokenizer, grammar: Grammar) -> Self {
        Structurer {
            tokenizer,
            grammar: Arc::new(grammar),
        }
    }

    pub fn mysql() -> Self {
        Self::new(Tokenizer::mysql(), Grammar::mysql())
    }

    #[inline]
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    #[inline]
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Scan and group `source`.
    pub fn structure(&self, source: &str) -> Tree {
        Grouper::new(&self.grammar).group(self.tokenizer.tokenize(source))
    }

    /// Scan and group `source`, failing only if it is absent.
    pub fn try_structure(&self, source: Option<&str>) -> Result<Tree, MissingInput> {
        let tokens = self.tokenizer.try_tokenize(source)?;
        Ok(Grouper::new(&self.grammar).group(tokens))
    }
}
