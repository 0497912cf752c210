//! Sentence ranking and selection
//!
//! The algorithmic heart of the pipeline: a deterministic pseudo-semantic
//! fingerprint per sentence, pairwise fingerprint similarity, a positional
//! bonus, and stable top-k selection.

pub mod fingerprint;
pub mod selector;

pub use fingerprint::{fingerprint, similarity, word_hash};
pub use selector::{rank_and_select, SentenceRanker};
