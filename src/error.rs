//! Boundary-layer errors.
//!
//! The core algorithm functions are total — they accept any string and any
//! float and never fail. Errors exist only at the caller-facing boundary
//! ([`Condenser`](crate::condenser::Condenser)), where empty input and
//! out-of-range configuration become user-actionable messages.

use thiserror::Error;

/// Errors surfaced by the [`Condenser`](crate::condenser::Condenser) facade.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CondenseError {
    /// The document was empty or whitespace-only after trimming. Extraction
    /// failures from binary sources degrade to this case rather than
    /// carrying a distinct error kind.
    #[error("no text to summarize; enter text or upload a readable document")]
    EmptyInput,

    /// The configured extraction ratio fell outside `(0, 1]`.
    #[error("extraction ratio must be in (0, 1], got {0}")]
    InvalidRatio(f64),

    /// The document exceeded a configured runtime character limit.
    #[error("input is {chars} characters, over the configured limit of {limit}")]
    InputTooLarge { chars: usize, limit: usize },

    /// The document segmented into more sentences than the configured limit.
    #[error("input has {sentences} sentences, over the configured limit of {limit}")]
    TooManySentences { sentences: usize, limit: usize },
}
