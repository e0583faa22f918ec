//! Grammar construction errors.

/// Rejected compound or bracket descriptor.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum GrammarError {
    #[error("descriptor has an empty begin keyword")]
    EmptyBegin,
    #[error("`{begin}` has an empty end sequence")]
    EmptyEndSequence { begin: String },
    /// The skip-to-end-of-line marker may be neither first nor last.
    #[error("`{begin}` places skip-to-end-of-line first or last in its end sequence")]
    MisplacedSkipToEndOfLine { begin: String },
    #[error("`{begin}` starts its end sequence with an optional label")]
    OptionalAtStart { begin: String },
}
