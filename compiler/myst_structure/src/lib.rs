//! Statement structurer for MySQL-dialect scripts.
//!
//! Groups the flat token list produced by `myst_lexer` into a tree of
//! statements, bracketed expressions and compound blocks (`BEGIN…END`,
//! `IF…END IF`, `LOOP`, `WHILE`, `REPEAT…UNTIL`, `CASE`). Tells the `IF`
//! statement apart from the `IF()` function by looking at what follows the
//! closing bracket.
//!
//! # Pipeline Position
//!
//! ```text
//! &str → myst_lexer (TokenList) → Grouper → Tree
//! ```
//!
//! The grouper never looks at characters; it works only on token text and
//! the junk predicates of [`myst_lexer::classify`].
//!
//! ```
//! use myst_structure::{GroupKind, Structurer};
//!
//! let tree = Structurer::mysql().structure("SELECT IF(a, 1, 2); IF a THEN DO 1; END IF;");
//! assert_eq!(tree.to_source(), "SELECT IF(a, 1, 2); IF a THEN DO 1; END IF;");
//!
//! let kinds: Vec<GroupKind> = tree
//!     .groups()
//!     .map(|group| group.kind())
//!     .filter(|kind| matches!(kind, GroupKind::Compound | GroupKind::Expression))
//!     .collect();
//! assert_eq!(kinds, [GroupKind::Expression, GroupKind::Compound]);
//! ```
//!
//! # Crate Dependencies
//!
//! - `myst_lexer`: tokens and the tokenizer handle.

mod end_match;
mod error;
pub mod grammar;
mod grouper;
mod structurer;
mod tree;

pub use error::GrammarError;
pub use grammar::{
    BracketDescriptor, CompoundDescriptor, EndPattern, EndSequence, Grammar,
    MYSQL_RESERVED_LABELS,
};
pub use grouper::Grouper;
pub use structurer::Structurer;
pub use tree::{Child, GroupId, GroupKind, GroupRef, NodeRef, Tree};
