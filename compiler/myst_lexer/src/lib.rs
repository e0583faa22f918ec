//! Lossless scanner for MySQL-dialect SQL scripts.
//!
//! The scanner splits a script into classified tokens without ever dropping
//! a byte: concatenating the token texts reproduces the input exactly, even
//! when the input is malformed. Malformed pieces become
//! [`TokenKind::Invalid`] tokens that carry a [`ScanErrorKind`].
//!
//! # Pipeline Position
//!
//! ```text
//! &str → Scanner → TokenList → myst_structure (grouping)
//! ```
//!
//! # Configuration
//!
//! [`ScanConfig`] selects the operator vocabulary, non-ASCII identifier
//! ranges, comment dialect and quote rules. [`ScanConfig::build`] compiles
//! them into an immutable [`Dialect`], which a [`Tokenizer`] shares across
//! threads.
//!
//! ```
//! use myst_lexer::Tokenizer;
//!
//! let tokens = Tokenizer::mysql().tokenize("SELECT 2--1");
//! assert_eq!(tokens.texts(), ["SELECT", " ", "2", "-", "-", "1"]);
//! assert!(tokens.is_valid());
//! ```
//!
//! # Crate Dependencies
//!
//! Standalone: no other `myst_*` crate is used.

pub mod char_class;
pub mod classify;
mod config;
mod cursor;
mod operators;
mod patterns;
mod scan_error;
mod scanner;
pub mod segments;
mod span;
mod token;
mod tokenizer;

pub use config::{Dialect, QuoteRule, QuoteRules, ScanConfig};
pub use operators::{OperatorTable, ALWAYS_OPERATORS, MYSQL_OPERATORS};
pub use patterns::{CommentDialect, PatternTables, MYSQL_IDENTIFIER_RANGES};
pub use scan_error::{ConfigError, MissingInput, ScanDefect, ScanErrorKind};
pub use scanner::Scanner;
pub use segments::{split_segments, Segment, SegmentKind};
pub use span::Span;
pub use token::{CommentStyle, Marker, Token, TokenKind, TokenList};
pub use tokenizer::Tokenizer;
