//! Pipeline runner — orchestrates stage execution and artifact flow.
//!
//! The [`Pipeline`] struct holds a statically-composed set of stages and
//! runs them in fixed order: normalize, segment, rank, compress. Control
//! flows strictly forward; no stage depends on a later one.
//!
//! One deliberate wrinkle, inherited from the reference behavior: the
//! segmenter consumes the **raw** text, not the normalized view. The
//! normalizer strips `!` and `?`, so running segmentation on its output
//! would destroy sentence boundaries. The normalized view is produced
//! first and handed to observers as a presentation-neutral artifact.
//!
//! # Static dispatch
//!
//! `Pipeline` is generic over all stage types, so each composition
//! monomorphizes into a unique concrete type. The zero-sized default stages
//! add zero bytes and zero runtime cost.

use crate::pipeline::observer::{
    PipelineObserver, StageClock, StageReport, StageReportBuilder, STAGE_COMPRESS, STAGE_NORMALIZE,
    STAGE_RANK, STAGE_SEGMENT,
};
use crate::pipeline::traits::{
    BoundarySegmenter, CanonicalNormalizer, CompressStage, FingerprintRanker, NormalizeStage,
    RankStage, RewriteCompressor, SegmentStage,
};
use crate::types::{CondensedSummary, CondenserConfig};

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

// ============================================================================
// Pipeline — statically-composed stage container
// ============================================================================

/// A pipeline composed of concrete stage implementations.
///
/// # Type parameters
///
/// | Param | Trait | Default impl |
/// |-------|-------|--------------|
/// | `N` | [`NormalizeStage`] | [`CanonicalNormalizer`] |
/// | `S` | [`SegmentStage`] | [`BoundarySegmenter`] |
/// | `R` | [`RankStage`] | [`FingerprintRanker`] |
/// | `C` | [`CompressStage`] | [`RewriteCompressor`] |
#[derive(Debug, Clone)]
pub struct Pipeline<N, S, R, C> {
    pub normalizer: N,
    pub segmenter: S,
    pub ranker: R,
    pub compressor: C,
}

/// Type alias for the default pipeline composition.
pub type StandardPipeline =
    Pipeline<CanonicalNormalizer, BoundarySegmenter, FingerprintRanker, RewriteCompressor>;

impl StandardPipeline {
    /// Build the standard pipeline: canonical normalization, boundary
    /// segmentation, fingerprint ranking, rewrite compression. All stages
    /// are zero-sized defaults.
    pub fn standard() -> Self {
        Pipeline {
            normalizer: CanonicalNormalizer,
            segmenter: BoundarySegmenter,
            ranker: FingerprintRanker,
            compressor: RewriteCompressor,
        }
    }
}

impl<N, S, R, C> Pipeline<N, S, R, C>
where
    N: NormalizeStage,
    S: SegmentStage,
    R: RankStage,
    C: CompressStage,
{
    /// Execute the pipeline over `text`, producing a [`CondensedSummary`].
    ///
    /// Stages run in order:
    /// 1. Normalize (canonical view, handed to observers)
    /// 2. Segment the raw text into sentences
    /// 3. Rank and select the top fraction per `cfg.extraction_ratio`
    /// 4. Compress the extractive summary
    ///
    /// Total: empty or degenerate input flows through without error and
    /// yields an empty summary. The `observer` receives callbacks at each
    /// stage boundary; pass [`NoopObserver`](super::observer::NoopObserver)
    /// for zero-overhead execution.
    pub fn run(
        &self,
        text: &str,
        cfg: &CondenserConfig,
        observer: &mut impl PipelineObserver,
    ) -> CondensedSummary {
        // Stage 0: Normalize
        trace_stage!(STAGE_NORMALIZE);
        observer.on_stage_start(STAGE_NORMALIZE);
        let clock = StageClock::start();
        let normalized = self.normalizer.normalize(text);
        let report = StageReport::new(clock.elapsed());
        observer.on_stage_end(STAGE_NORMALIZE, &report);
        observer.on_normalized(&normalized);

        // Stage 1: Segment (raw text, not the normalized view)
        trace_stage!(STAGE_SEGMENT);
        observer.on_stage_start(STAGE_SEGMENT);
        let clock = StageClock::start();
        let sentences = self.segmenter.segment(text);
        let report = StageReportBuilder::new(clock.elapsed())
            .sentences(sentences.len())
            .build();
        observer.on_stage_end(STAGE_SEGMENT, &report);
        observer.on_sentences(&sentences);

        // Stage 2: Rank
        trace_stage!(STAGE_RANK);
        observer.on_stage_start(STAGE_RANK);
        let clock = StageClock::start();
        let extractive = self.ranker.rank(&sentences, cfg);
        let report = StageReportBuilder::new(clock.elapsed())
            .sentences(extractive.total_sentences)
            .selected(extractive.selected.len())
            .build();
        observer.on_stage_end(STAGE_RANK, &report);
        observer.on_ranked(&extractive);

        // Stage 3: Compress
        trace_stage!(STAGE_COMPRESS);
        observer.on_stage_start(STAGE_COMPRESS);
        let clock = StageClock::start();
        let text = self.compressor.compress(&extractive.text);
        let report = StageReport::new(clock.elapsed());
        observer.on_stage_end(STAGE_COMPRESS, &report);

        CondensedSummary { text, extractive }
    }
}

// ============================================================================
// PipelineBuilder — fluent construction with custom stages
// ============================================================================

/// Fluent builder for a [`Pipeline`] with custom stages.
///
/// Starts from the standard composition and allows overriding individual
/// stages.
///
/// ```
/// use condensr::pipeline::PipelineBuilder;
/// use condensr::pipeline::traits::CompressStage;
///
/// struct NoCompression;
/// impl CompressStage for NoCompression {
///     fn compress(&self, summary: &str) -> String {
///         summary.to_string()
///     }
/// }
///
/// let pipeline = PipelineBuilder::new().compressor(NoCompression).build();
/// # let _ = pipeline;
/// ```
pub struct PipelineBuilder<
    N = CanonicalNormalizer,
    S = BoundarySegmenter,
    R = FingerprintRanker,
    C = RewriteCompressor,
> {
    normalizer: N,
    segmenter: S,
    ranker: R,
    compressor: C,
}

impl PipelineBuilder {
    /// Start building from the standard stages.
    pub fn new() -> Self {
        PipelineBuilder {
            normalizer: CanonicalNormalizer,
            segmenter: BoundarySegmenter,
            ranker: FingerprintRanker,
            compressor: RewriteCompressor,
        }
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, S, R, C> PipelineBuilder<N, S, R, C> {
    /// Override the normalize stage.
    pub fn normalizer<N2: NormalizeStage>(self, n: N2) -> PipelineBuilder<N2, S, R, C> {
        PipelineBuilder {
            normalizer: n,
            segmenter: self.segmenter,
            ranker: self.ranker,
            compressor: self.compressor,
        }
    }

    /// Override the segment stage.
    pub fn segmenter<S2: SegmentStage>(self, s: S2) -> PipelineBuilder<N, S2, R, C> {
        PipelineBuilder {
            normalizer: self.normalizer,
            segmenter: s,
            ranker: self.ranker,
            compressor: self.compressor,
        }
    }

    /// Override the rank stage.
    pub fn ranker<R2: RankStage>(self, r: R2) -> PipelineBuilder<N, S, R2, C> {
        PipelineBuilder {
            normalizer: self.normalizer,
            segmenter: self.segmenter,
            ranker: r,
            compressor: self.compressor,
        }
    }

    /// Override the compress stage.
    pub fn compressor<C2: CompressStage>(self, c: C2) -> PipelineBuilder<N, S, R, C2> {
        PipelineBuilder {
            normalizer: self.normalizer,
            segmenter: self.segmenter,
            ranker: self.ranker,
            compressor: c,
        }
    }

    /// Consume the builder and produce a [`Pipeline`].
    pub fn build(self) -> Pipeline<N, S, R, C> {
        Pipeline {
            normalizer: self.normalizer,
            segmenter: self.segmenter,
            ranker: self.ranker,
            compressor: self.compressor,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
