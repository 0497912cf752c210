//! Pipeline observer — hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic: timing each stage, capturing intermediate artifacts, or
//! emitting structured telemetry. The [`NoopObserver`] compiles away for
//! zero-overhead runs.

use std::time::{Duration, Instant};

use crate::types::{ExtractiveSummary, Sentence};

/// Stage name for the normalization stage.
pub const STAGE_NORMALIZE: &str = "normalize";
/// Stage name for the segmentation stage.
pub const STAGE_SEGMENT: &str = "segment";
/// Stage name for the ranking stage.
pub const STAGE_RANK: &str = "rank";
/// Stage name for the compression stage.
pub const STAGE_COMPRESS: &str = "compress";

/// All stage names, in execution order.
pub const STAGES: [&str; 4] = [STAGE_NORMALIZE, STAGE_SEGMENT, STAGE_RANK, STAGE_COMPRESS];

// ---------------------------------------------------------------------------
// Stage timing
// ---------------------------------------------------------------------------

/// Wall-clock timer for a single stage.
#[derive(Debug)]
pub struct StageClock {
    start: Instant,
}

impl StageClock {
    /// Start timing now.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed time since [`StageClock::start`].
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Per-stage metrics handed to [`PipelineObserver::on_stage_end`].
#[derive(Debug, Clone, Default)]
pub struct StageReport {
    elapsed: Duration,
    sentences: Option<usize>,
    selected: Option<usize>,
}

impl StageReport {
    /// Report with timing only.
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            ..Self::default()
        }
    }

    /// How long the stage took.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Sentence count, if the stage produced sentences.
    pub fn sentences(&self) -> Option<usize> {
        self.sentences
    }

    /// Selected-sentence count, if the stage performed selection.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }
}

/// Builder for [`StageReport`]s that carry counters.
#[derive(Debug)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            report: StageReport::new(elapsed),
        }
    }

    pub fn sentences(mut self, n: usize) -> Self {
        self.report.sentences = Some(n);
        self
    }

    pub fn selected(mut self, n: usize) -> Self {
        self.report.selected = Some(n);
        self
    }

    pub fn build(self) -> StageReport {
        self.report
    }
}

// ---------------------------------------------------------------------------
// Observer trait
// ---------------------------------------------------------------------------

/// Callbacks fired by [`Pipeline::run`](super::runner::Pipeline::run) at
/// stage boundaries. All methods default to no-ops, so implementors
/// override only what they need.
pub trait PipelineObserver {
    /// A stage is about to run.
    fn on_stage_start(&mut self, _stage: &'static str) {}

    /// A stage finished; `report` carries timing and optional counters.
    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    /// The normalized view of the document.
    fn on_normalized(&mut self, _normalized: &str) {}

    /// The segmented sentences, before ranking.
    fn on_sentences(&mut self, _sentences: &[Sentence]) {}

    /// The extractive summary, before compression.
    fn on_ranked(&mut self, _summary: &ExtractiveSummary) {}
}

/// Observer that does nothing. The optimizer removes every call site.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that records a `(stage, report)` pair for every stage.
#[derive(Debug, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// The collected reports, in stage execution order.
    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}
