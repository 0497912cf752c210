//! Core data types shared across the pipeline.
//!
//! Everything here is created fresh per invocation and dropped when the call
//! returns; the crate holds no cross-call state.

use serde::{Deserialize, Serialize};

/// Preset extraction ratio: keep roughly a tenth of the sentences.
pub const RATIO_BRIEF: f64 = 0.1;
/// Preset extraction ratio: keep roughly a third of the sentences.
pub const RATIO_BALANCED: f64 = 0.3;
/// Preset extraction ratio: keep roughly half of the sentences.
pub const RATIO_DETAILED: f64 = 0.5;

/// Configuration for the condensing pipeline.
///
/// The only tunable is the extraction ratio — the fraction of sentences
/// retained by the extractive stage. Valid values lie in `(0, 1]`; the
/// [`Condenser`](crate::condenser::Condenser) facade rejects anything else,
/// while the core selector clamps via its `max(1, ..)` guard and stays total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CondenserConfig {
    /// Fraction of sentences to retain, in `(0, 1]`.
    pub extraction_ratio: f64,
}

impl Default for CondenserConfig {
    fn default() -> Self {
        Self {
            extraction_ratio: RATIO_BALANCED,
        }
    }
}

impl CondenserConfig {
    /// Create a config with the default balanced ratio.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the extraction ratio.
    pub fn with_extraction_ratio(mut self, ratio: f64) -> Self {
        self.extraction_ratio = ratio;
        self
    }

    /// Whether the ratio lies in the accepted `(0, 1]` range.
    pub fn ratio_in_range(&self) -> bool {
        self.extraction_ratio > 0.0 && self.extraction_ratio <= 1.0
    }
}

/// A sentence-level unit produced by the segmenter.
///
/// `index` is the position among the sentences that survived the minimum
/// length filter, not the position among raw fragments — it is what feeds
/// the ranker's positional bonus. `start`/`end` are byte offsets of the
/// trimmed text within the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Trimmed sentence text, terminal punctuation attached.
    pub text: String,
    /// Zero-based position among kept sentences.
    pub index: usize,
    /// Byte offset of the first character in the source text.
    pub start: usize,
    /// Byte offset one past the last character in the source text.
    pub end: usize,
}

impl Sentence {
    /// Build a sentence from its text alone, for callers that do not track
    /// source offsets (tests, synthetic input).
    pub fn detached(text: impl Into<String>, index: usize) -> Self {
        let text = text.into();
        let end = text.len();
        Self {
            text,
            index,
            start: 0,
            end,
        }
    }
}

/// A sentence paired with its computed importance score.
///
/// Ephemeral: produced during ranking and carried in the
/// [`ExtractiveSummary`] so callers can inspect why a sentence was chosen.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSentence {
    pub sentence: Sentence,
    /// Mean pairwise similarity times the positional bonus `1 + 1/(i+1)`.
    pub score: f64,
}

/// Output of the extractive stage: the selected sentences in descending
/// score order, joined by single spaces.
///
/// Rank order (not document order) is deliberate reference behavior: the
/// summary reads in order of computed importance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractiveSummary {
    /// Selected sentences joined by single spaces, in rank order.
    pub text: String,
    /// The selected sentences with their scores, in rank order.
    pub selected: Vec<ScoredSentence>,
    /// How many sentences the segmenter produced before selection.
    pub total_sentences: usize,
}

impl ExtractiveSummary {
    /// Whether the extractive stage selected anything.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

/// Terminal artifact of the pipeline: the extractive summary after the
/// lexical compression pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CondensedSummary {
    /// The compressed summary text.
    pub text: String,
    /// The extractive intermediate the compressor consumed.
    pub extractive: ExtractiveSummary,
}

impl CondensedSummary {
    /// Suggested filename for callers that persist the summary as UTF-8.
    pub const SUGGESTED_FILENAME: &'static str = "summary.txt";

    /// The compressed summary text.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}
