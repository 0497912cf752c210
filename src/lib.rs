//! # condensr
//!
//! Deterministic two-stage text summarization: extractive sentence
//! selection followed by a lexical compression pass.
//!
//! The extractive stage segments a document into sentences, scores each by
//! a hash-derived fingerprint similarity to the rest of the document plus a
//! positional bonus, and keeps the top fraction **in score-rank order**.
//! The compression stage then applies a fixed sequence of rewrite rules —
//! dropping articles and intensifiers and bluntly stripping `ing` suffixes
//! — to densify the result.
//!
//! This is an approximate, deterministic heuristic: no language model, no
//! semantic understanding, and no grammaticality guarantee for the
//! compressed output. In exchange, identical input always yields identical
//! output, and the whole pipeline is a pure function over in-memory
//! strings.
//!
//! # Quick start
//!
//! ```
//! use condensr::condense;
//!
//! let text = "This is the first sentence here. This is the second sentence here. \
//!             This is the third sentence here.";
//! let summary = condense(text, 0.34).unwrap();
//! assert_eq!(summary, "This is first sentence here.");
//! ```
//!
//! For stage-level control (custom stages, observers, runtime limits), use
//! the [`Condenser`] facade or compose a [`pipeline::Pipeline`] directly.
//!
//! # Scaling
//!
//! Ranking compares every sentence pair, so cost grows quadratically with
//! sentence count. Fingerprints are computed once per sentence, which keeps
//! the quadratic term down to scalar arithmetic, but very large documents
//! pay the O(n²) ceiling. Scores for a given input are stable across runs
//! and platforms.

pub mod compress;
pub mod condenser;
pub mod config;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod rank;
pub mod segment;
pub mod source;
pub mod types;

pub use condenser::Condenser;
pub use error::CondenseError;
pub use types::{
    CondensedSummary, CondenserConfig, ExtractiveSummary, ScoredSentence, Sentence,
};

/// Condense `text` at the given extraction ratio, returning the compressed
/// summary string.
///
/// Convenience wrapper over [`Condenser`]; fails on an out-of-range ratio
/// or empty input.
pub fn condense(text: &str, extraction_ratio: f64) -> Result<String, CondenseError> {
    let condenser = Condenser::new(
        types::CondenserConfig::new().with_extraction_ratio(extraction_ratio),
    )?;
    Ok(condenser.condense(text)?.text)
}
