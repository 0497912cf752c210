//! Stage trait definitions for the pipeline.
//!
//! Each trait represents one processing stage boundary. Implementations are
//! statically dispatched; the provided defaults are zero-sized wrappers
//! around the core module functions, so the standard pipeline costs nothing
//! over calling those functions directly.

use crate::compress::compress;
use crate::normalize::normalize;
use crate::rank::selector::SentenceRanker;
use crate::segment::segment;
use crate::types::{CondenserConfig, ExtractiveSummary, Sentence};

// ============================================================================
// NormalizeStage — canonical text view (stage 0)
// ============================================================================

/// Produces the canonical lowercase, punctuation-reduced view of the input.
///
/// # Contract
///
/// - **Input**: the raw document text.
/// - **Output**: the normalized view. Downstream segmentation still runs on
///   the raw text (normalization strips `!`/`?`, so boundaries would be
///   lost); the normalized view is handed to observers and callers for
///   presentation-neutral matching.
/// - **Idempotent**: normalizing twice equals normalizing once.
pub trait NormalizeStage {
    fn normalize(&self, text: &str) -> String;
}

/// Default normalizer backed by [`normalize`](crate::normalize::normalize).
#[derive(Debug, Clone, Copy, Default)]
pub struct CanonicalNormalizer;

impl NormalizeStage for CanonicalNormalizer {
    #[inline]
    fn normalize(&self, text: &str) -> String {
        normalize(text)
    }
}

// ============================================================================
// SegmentStage — sentence boundaries (stage 1)
// ============================================================================

/// Splits raw text into ordered sentences, dropping fragments too short to
/// be meaningful.
pub trait SegmentStage {
    fn segment(&self, text: &str) -> Vec<Sentence>;
}

/// Default segmenter backed by [`segment`](crate::segment::segment):
/// lookbehind-style splits at terminal punctuation followed by whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundarySegmenter;

impl SegmentStage for BoundarySegmenter {
    #[inline]
    fn segment(&self, text: &str) -> Vec<Sentence> {
        segment(text)
    }
}

// ============================================================================
// RankStage — importance scoring and selection (stage 2)
// ============================================================================

/// Scores sentences and selects the top fraction, in rank order.
///
/// Must handle the degenerate cases without error: an empty slice yields an
/// empty summary, a single sentence yields itself.
pub trait RankStage {
    fn rank(&self, sentences: &[Sentence], cfg: &CondenserConfig) -> ExtractiveSummary;
}

/// Default ranker backed by the fingerprint-similarity
/// [`SentenceRanker`](crate::rank::selector::SentenceRanker).
#[derive(Debug, Clone, Copy, Default)]
pub struct FingerprintRanker;

impl RankStage for FingerprintRanker {
    #[inline]
    fn rank(&self, sentences: &[Sentence], cfg: &CondenserConfig) -> ExtractiveSummary {
        SentenceRanker::new()
            .with_ratio(cfg.extraction_ratio)
            .rank(sentences)
    }
}

// ============================================================================
// CompressStage — lexical rewrite pass (stage 3)
// ============================================================================

/// Applies the ordered lexical rewrite rules to the extractive summary.
pub trait CompressStage {
    fn compress(&self, summary: &str) -> String;
}

/// Default compressor backed by [`compress`](crate::compress::compress).
#[derive(Debug, Clone, Copy, Default)]
pub struct RewriteCompressor;

impl CompressStage for RewriteCompressor {
    #[inline]
    fn compress(&self, summary: &str) -> String {
        compress(summary)
    }
}
