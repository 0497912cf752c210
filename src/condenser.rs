//! Caller-facing facade.
//!
//! [`Condenser`] owns the boundary concerns the core stays free of: ratio
//! validation at construction, optional runtime limits, the empty-input
//! check, and document-source resolution. Once input passes the boundary,
//! the pipeline runs to completion — no cancellation, no partial results.

use crate::config::spec::RuntimeSpec;
use crate::error::CondenseError;
use crate::pipeline::observer::{NoopObserver, PipelineObserver};
use crate::pipeline::runner::StandardPipeline;
use crate::source::{DocumentSource, TextExtractor};
use crate::types::{CondensedSummary, CondenserConfig};

/// The two-stage condensing pipeline behind a validated boundary.
///
/// # Examples
///
/// ```
/// use condensr::Condenser;
///
/// let condenser = Condenser::balanced().unwrap();
/// let summary = condenser
///     .condense("This is the first sentence here. This is the second sentence here. \
///                This is the third sentence here.")
///     .unwrap();
/// assert!(!summary.text.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Condenser {
    config: CondenserConfig,
    limits: RuntimeSpec,
    pipeline: StandardPipeline,
}

impl Condenser {
    /// Build a condenser, rejecting ratios outside `(0, 1]`.
    pub fn new(config: CondenserConfig) -> Result<Self, CondenseError> {
        if !config.ratio_in_range() {
            return Err(CondenseError::InvalidRatio(config.extraction_ratio));
        }
        Ok(Self {
            config,
            limits: RuntimeSpec::default(),
            pipeline: StandardPipeline::standard(),
        })
    }

    /// Condenser with the balanced (0.3) preset.
    pub fn balanced() -> Result<Self, CondenseError> {
        Self::new(CondenserConfig::default())
    }

    /// Attach runtime fail-fast limits.
    pub fn with_limits(mut self, limits: RuntimeSpec) -> Self {
        self.limits = limits;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &CondenserConfig {
        &self.config
    }

    /// Condense plain text.
    ///
    /// Empty or whitespace-only input is a user-actionable error, not a
    /// crash; everything past that check is total.
    pub fn condense(&self, text: &str) -> Result<CondensedSummary, CondenseError> {
        self.condense_observed(text, &mut NoopObserver)
    }

    /// Condense plain text, reporting stage boundaries to `observer`.
    pub fn condense_observed(
        &self,
        text: &str,
        observer: &mut impl PipelineObserver,
    ) -> Result<CondensedSummary, CondenseError> {
        if text.trim().is_empty() {
            return Err(CondenseError::EmptyInput);
        }
        if let Some(limit) = self.limits.max_chars {
            let chars = text.chars().count();
            if chars > limit {
                return Err(CondenseError::InputTooLarge { chars, limit });
            }
        }
        if let Some(limit) = self.limits.max_sentences {
            // Fail-fast count before the O(n²) ranking pass. The pipeline
            // segments again; segmentation is linear and cheap next to rank.
            let sentences = crate::segment::segment(text).len();
            if sentences > limit {
                return Err(CondenseError::TooManySentences { sentences, limit });
            }
        }
        Ok(self.pipeline.run(text, &self.config, observer))
    }

    /// Resolve a [`DocumentSource`] through `extractor` and condense the
    /// result. Extraction failure degrades to empty text and therefore to
    /// [`CondenseError::EmptyInput`] — never a distinct extraction error.
    pub fn condense_source(
        &self,
        source: &DocumentSource,
        extractor: &impl TextExtractor,
    ) -> Result<CondensedSummary, CondenseError> {
        let text = source.resolve(extractor);
        self.condense(&text)
    }
}
