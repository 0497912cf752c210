//! Condenser specification types.
//!
//! A [`CondenserSpec`] is the versioned JSON configuration surface: a ratio
//! preset or explicit ratio, runtime fail-fast limits, and a strictness
//! flag. These types are the input to the
//! [`ValidationEngine`](super::validation::ValidationEngine).
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "preset": "balanced",
//!   "extraction_ratio": 0.25,
//!   "runtime": { "max_chars": 500000 },
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{CondenserConfig, RATIO_BALANCED, RATIO_BRIEF, RATIO_DETAILED};

/// Spec version this crate understands.
pub const SUPPORTED_VERSION: u32 = 1;

/// Top-level condenser specification (v1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CondenserSpec {
    /// Spec version (currently `1`).
    pub v: u32,

    /// Named ratio preset used when no explicit ratio is given.
    #[serde(default)]
    pub preset: Option<RatioPreset>,

    /// Explicit extraction ratio; overrides the preset.
    #[serde(default)]
    pub extraction_ratio: Option<f64>,

    /// Runtime execution limits.
    #[serde(default)]
    pub runtime: RuntimeSpec,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    /// Used by the strict-mode validation rule.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for CondenserSpec {
    fn default() -> Self {
        Self {
            v: SUPPORTED_VERSION,
            preset: None,
            extraction_ratio: None,
            runtime: RuntimeSpec::default(),
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

impl CondenserSpec {
    /// The ratio this spec selects: explicit value, else preset, else the
    /// balanced default.
    pub fn resolved_ratio(&self) -> f64 {
        self.extraction_ratio
            .unwrap_or_else(|| self.preset.unwrap_or(RatioPreset::Balanced).ratio())
    }

    /// Produce the runtime config. Callers validate first; `resolve` itself
    /// is total and simply materializes the selections.
    pub fn resolve(&self) -> CondenserConfig {
        CondenserConfig {
            extraction_ratio: self.resolved_ratio(),
        }
    }
}

/// Named extraction-ratio presets matching the UI-facing options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioPreset {
    /// Keep ~10% of sentences.
    Brief,
    /// Keep ~30% of sentences.
    Balanced,
    /// Keep ~50% of sentences.
    Detailed,
}

impl RatioPreset {
    /// The extraction ratio the preset stands for.
    pub fn ratio(&self) -> f64 {
        match self {
            Self::Brief => RATIO_BRIEF,
            Self::Balanced => RATIO_BALANCED,
            Self::Detailed => RATIO_DETAILED,
        }
    }
}

/// Runtime execution limits (fail-fast guards).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeSpec {
    /// Maximum number of input characters before rejecting.
    #[serde(default)]
    pub max_chars: Option<usize>,

    /// Maximum number of segmented sentences before rejecting.
    #[serde(default)]
    pub max_sentences: Option<usize>,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}
