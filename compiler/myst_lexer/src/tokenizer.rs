//! Reusable scanning handle.

use std::sync::Arc;

use crate::config::Dialect;
use crate::scan_error::MissingInput;
use crate::scanner::Scanner;
use crate::token::TokenList;

/// A compiled [`Dialect`] behind an `Arc`.
///
/// Clones share the dialect, so a tokenizer can be handed to any number
/// of threads.
#[derive(Clone, Debug, Default)]
pub struct Tokenizer {
    dialect: Arc<Dialect>,
}

impl Tokenizer {
    pub fn new(dialect: Dialect) -> Self {
        Tokenizer {
            dialect: Arc::new(dialect),
        }
    }

    pub fn mysql() -> Self {
        Self::new(Dialect::mysql())
    }

    #[inline]
    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    /// Scan `source` into tokens.
    pub fn tokenize(&self, source: &str) -> TokenList {
        Scanner::new(source, &self.dialect).run()
    }

    /// Scan `source`, failing only if it is absent.
    pub fn try_tokenize(&self, source: Option<&str>) -> Result<TokenList, MissingInput> {
        Ok(Scanner::try_new(source, &self.dialect)?.run())
    }
}

impl From<Dialect> for Tokenizer {
    fn from(dialect: Dialect) -> Self {
        Self::new(dialect)
    }
}
