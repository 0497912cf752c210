//! Serde-facing configuration and its validation engine.
//!
//! A [`CondenserSpec`](spec::CondenserSpec) is the JSON shape callers hand
//! in (UI layers, config files); the [`ValidationEngine`](validation::ValidationEngine)
//! checks it and [`CondenserSpec::resolve`](spec::CondenserSpec::resolve)
//! turns it into the runtime [`CondenserConfig`](crate::types::CondenserConfig).

pub mod errors;
pub mod spec;
pub mod validation;

pub use errors::{ErrorCode, SpecError};
pub use spec::{CondenserSpec, RatioPreset, RuntimeSpec};
pub use validation::{Severity, ValidationDiagnostic, ValidationEngine, ValidationReport, ValidationRule};
