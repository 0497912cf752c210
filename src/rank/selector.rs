//! Importance scoring and top-k selection
//!
//! Each sentence is scored as its mean fingerprint similarity to every
//! sentence in the document (its own self-similarity term included, which
//! adds a constant `1/n` smoothing term) times a positional bonus `1 + 1/(i+1)`
//! that is strongest at index 0 and decays monotonically. The top
//! `max(1, floor(n * ratio))` sentences are emitted **in rank order**.
//!
//! The pairwise pass is O(n²) in the sentence count; fingerprints are
//! computed once per sentence, so the quadratic term is scalar arithmetic.

use std::cmp::Ordering;

use crate::rank::fingerprint::{fingerprint, similarity_of};
use crate::types::{ExtractiveSummary, ScoredSentence, Sentence};

/// Ranks sentences and selects the top fraction.
#[derive(Debug, Clone)]
pub struct SentenceRanker {
    /// Fraction of sentences to retain, in `(0, 1]`.
    pub extraction_ratio: f64,
}

impl Default for SentenceRanker {
    fn default() -> Self {
        Self {
            extraction_ratio: crate::types::RATIO_BALANCED,
        }
    }
}

impl SentenceRanker {
    /// Create a ranker with the default balanced ratio.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the extraction ratio.
    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.extraction_ratio = ratio;
        self
    }

    /// Score every sentence, stable-sort descending, and keep the top
    /// `max(1, floor(n * ratio))`.
    ///
    /// Total function: an empty slice yields an empty summary (the
    /// `max(1, ..)` guard never selects from nothing), and a single
    /// sentence yields itself. Ties keep their original relative order —
    /// the sort is stable by construction.
    pub fn rank(&self, sentences: &[Sentence]) -> ExtractiveSummary {
        let n = sentences.len();
        if n == 0 {
            return ExtractiveSummary::default();
        }

        let fingerprints: Vec<f64> = sentences.iter().map(|s| fingerprint(&s.text)).collect();

        let mut scored: Vec<ScoredSentence> = sentences
            .iter()
            .enumerate()
            .map(|(i, sentence)| {
                let mean_similarity = fingerprints
                    .iter()
                    .map(|&fp| similarity_of(fingerprints[i], fp))
                    .sum::<f64>()
                    / n as f64;
                let positional_bonus = 1.0 + 1.0 / (i as f64 + 1.0);
                ScoredSentence {
                    sentence: sentence.clone(),
                    score: mean_similarity * positional_bonus,
                }
            })
            .collect();

        // Stable: equal scores keep document order.
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
        });

        let k = top_count(n, self.extraction_ratio);
        scored.truncate(k);

        let text = scored
            .iter()
            .map(|s| s.sentence.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        ExtractiveSummary {
            text,
            selected: scored,
            total_sentences: n,
        }
    }
}

/// Number of sentences kept for `n` inputs at the given ratio:
/// `max(1, floor(n * ratio))`.
pub(crate) fn top_count(n: usize, ratio: f64) -> usize {
    ((n as f64 * ratio).floor() as usize).max(1)
}

/// Rank `sentences` and select the top fraction at `ratio`.
pub fn rank_and_select(sentences: &[Sentence], ratio: f64) -> ExtractiveSummary {
    SentenceRanker::new().with_ratio(ratio).rank(sentences)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(texts: &[&str]) -> Vec<Sentence> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Sentence::detached(*t, i))
            .collect()
    }

    #[test]
    fn test_empty_input_yields_empty_summary() {
        let summary = rank_and_select(&[], 0.3);
        assert!(summary.is_empty());
        assert_eq!(summary.text, "");
        assert_eq!(summary.total_sentences, 0);
    }

    #[test]
    fn test_single_sentence_is_kept() {
        let input = sentences(&["Just the one sentence here."]);
        let summary = rank_and_select(&input, 0.1);
        assert_eq!(summary.selected.len(), 1);
        assert_eq!(summary.text, "Just the one sentence here.");
    }

    #[test]
    fn test_top_count_formula() {
        assert_eq!(top_count(3, 0.34), 1);
        assert_eq!(top_count(10, 0.3), 3);
        assert_eq!(top_count(10, 1.0), 10);
        assert_eq!(top_count(1, 0.01), 1);
        assert_eq!(top_count(7, 0.5), 3);
    }

    #[test]
    fn test_nonempty_input_always_selects_at_least_one() {
        let input = sentences(&[
            "A first example sentence.",
            "A second example sentence.",
        ]);
        let summary = rank_and_select(&input, 0.01);
        assert_eq!(summary.selected.len(), 1);
    }

    #[test]
    fn test_ratio_one_keeps_all_sentences() {
        let input = sentences(&[
            "Mountain tundra stretch delta kappa fold.",
            "Slide violet meadow climb indigo period.",
            "Violet slide climb meadow indigo period.",
        ]);
        let summary = rank_and_select(&input, 1.0);
        assert_eq!(summary.selected.len(), 3);
        assert_eq!(summary.total_sentences, 3);
    }

    #[test]
    fn test_output_is_rank_order_not_document_order() {
        // Sentence 0 fingerprints far from the mutually similar cluster at
        // indices 1..3, so even the strongest positional bonus cannot save
        // it: rank order is 1, 2, 3, 0.
        let input = sentences(&[
            "Mountain tundra stretch delta kappa fold.",
            "Slide violet meadow climb indigo period.",
            "Violet slide climb meadow indigo period.",
            "Indigo violet slide meadow climb period.",
        ]);
        let summary = rank_and_select(&input, 1.0);
        let order: Vec<usize> = summary.selected.iter().map(|s| s.sentence.index).collect();
        assert_eq!(order, vec![1, 2, 3, 0]);
    }

    #[test]
    fn test_positional_bonus_breaks_symmetry_for_identical_sentences() {
        // Identical texts have identical mean similarity; only the bonus
        // differs, so document order wins.
        let input = sentences(&[
            "The same sentence repeated.",
            "The same sentence repeated.",
            "The same sentence repeated.",
        ]);
        let summary = rank_and_select(&input, 1.0);
        let order: Vec<usize> = summary.selected.iter().map(|s| s.sentence.index).collect();
        assert_eq!(order, vec![0, 1, 2]);
        assert!(summary.selected[0].score > summary.selected[1].score);
    }

    #[test]
    fn test_three_sentence_scenario_golden_scores() {
        let input = sentences(&[
            "This is the first sentence here.",
            "This is the second sentence here.",
            "This is the third sentence here.",
        ]);
        let summary = rank_and_select(&input, 1.0);
        // Pinned against the reference score formula.
        let scores: Vec<f64> = summary.selected.iter().map(|s| s.score).collect();
        assert!((scores[0] - 1.977_806_882_695_104_5).abs() < 1e-9);
        assert!((scores[1] - 1.478_686_101_578_614_8).abs() < 1e-9);
        assert!((scores[2] - 1.307_892_786_209_218).abs() < 1e-9);
    }

    #[test]
    fn test_three_sentence_scenario_ratio_034() {
        let input = sentences(&[
            "This is the first sentence here.",
            "This is the second sentence here.",
            "This is the third sentence here.",
        ]);
        let summary = rank_and_select(&input, 0.34);
        assert_eq!(summary.selected.len(), 1);
        assert_eq!(summary.text, "This is the first sentence here.");
    }

    #[test]
    fn test_summary_joined_with_single_spaces() {
        let input = sentences(&[
            "Slide violet meadow climb indigo period.",
            "Mountain tundra stretch delta kappa fold.",
        ]);
        let summary = rank_and_select(&input, 1.0);
        assert_eq!(summary.text.matches("  ").count(), 0);
        assert_eq!(
            summary.text.split(". ").count(),
            2,
            "expected two sentences joined by one space"
        );
    }
}
