//! Pipeline orchestration
//!
//! Wires the four processing stages — normalize, segment, rank, compress —
//! into a statically dispatched [`Pipeline`](runner::Pipeline), with
//! [`PipelineObserver`](observer::PipelineObserver) hooks at every stage
//! boundary for timing and artifact capture.

pub mod observer;
pub mod runner;
pub mod traits;

pub use observer::{NoopObserver, PipelineObserver, StageReport, StageTimingObserver};
pub use runner::{Pipeline, PipelineBuilder, StandardPipeline};
pub use traits::{
    BoundarySegmenter, CanonicalNormalizer, CompressStage, FingerprintRanker, NormalizeStage,
    RankStage, RewriteCompressor, SegmentStage,
};
