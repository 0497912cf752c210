//! Validation engine for condenser specifications.
//!
//! The engine runs all registered [`ValidationRule`]s against a
//! [`CondenserSpec`](super::spec::CondenserSpec) and collects every
//! diagnostic into a [`ValidationReport`] — it never short-circuits on the
//! first error, so users see all problems at once.
//!
//! # Quick start
//!
//! ```
//! use condensr::config::{CondenserSpec, ValidationEngine};
//!
//! let spec: CondenserSpec = serde_json::from_str(r#"{ "v": 1 }"#).unwrap();
//! let report = ValidationEngine::with_defaults().validate(&spec);
//! assert!(report.is_valid());
//! ```

use std::collections::HashMap;

use serde::Serialize;

use super::errors::{ErrorCode, SpecError};
use super::spec::{CondenserSpec, SUPPORTED_VERSION};

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Strict mode escalates findings to [`Severity::Error`]; otherwise
    /// they stay warnings.
    fn for_strict(strict: bool) -> Self {
        if strict {
            Severity::Error
        } else {
            Severity::Warning
        }
    }

    /// Attach this severity to a [`SpecError`], forming a diagnostic.
    pub fn diagnose(self, error: SpecError) -> ValidationDiagnostic {
        ValidationDiagnostic {
            severity: self,
            error,
        }
    }
}

/// A single validation finding — an error or warning attached to a
/// [`SpecError`] carrying the code, path, message, and hint.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: SpecError,
}

/// Collected diagnostics from running all validation rules.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    fn of_severity(&self, severity: Severity) -> impl Iterator<Item = &SpecError> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
            .map(|d| &d.error)
    }

    /// Iterate over error-severity diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &SpecError> {
        self.of_severity(Severity::Error)
    }

    /// Iterate over warning-severity diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &SpecError> {
        self.of_severity(Severity::Warning)
    }

    /// Returns `true` if any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// Returns `true` if there are no errors (warnings are acceptable).
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    /// Total number of diagnostics (errors + warnings).
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns `true` if there are no diagnostics at all.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// A single validation rule that inspects a [`CondenserSpec`] and returns
/// zero or more diagnostics.
///
/// Rules are stateless and must be `Send + Sync` so they can be shared
/// across threads in a long-lived engine.
pub trait ValidationRule: Send + Sync {
    /// Short, stable identifier for this rule (e.g. `"ratio_range"`).
    fn name(&self) -> &str;

    /// Inspect `spec` and return any findings.
    fn validate(&self, spec: &CondenserSpec) -> Vec<ValidationDiagnostic>;
}

/// Runs a set of [`ValidationRule`]s against a [`CondenserSpec`] and
/// collects all diagnostics into a [`ValidationReport`].
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// Create an empty engine with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create an engine pre-loaded with the default rule set.
    pub fn with_defaults() -> Self {
        Self {
            rules: vec![
                Box::new(VersionRule),
                Box::new(RatioRangeRule),
                Box::new(RuntimeLimitsRule),
                Box::new(UnknownFieldsRule),
            ],
        }
    }

    /// Register an additional rule.
    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Run all rules against `spec` and return the collected report.
    pub fn validate(&self, spec: &CondenserSpec) -> ValidationReport {
        ValidationReport {
            diagnostics: self
                .rules
                .iter()
                .flat_map(|rule| rule.validate(spec))
                .collect(),
        }
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ─── Default rules ──────────────────────────────────────────────────────────

/// The spec version must match [`SUPPORTED_VERSION`].
struct VersionRule;

impl ValidationRule for VersionRule {
    fn name(&self) -> &str {
        "version"
    }

    fn validate(&self, spec: &CondenserSpec) -> Vec<ValidationDiagnostic> {
        if spec.v == SUPPORTED_VERSION {
            return vec![];
        }
        vec![Severity::Error.diagnose(
            SpecError::new(
                ErrorCode::UnsupportedVersion,
                "/v",
                format!("unsupported spec version {}", spec.v),
            )
            .with_hint(format!("This build understands version {SUPPORTED_VERSION}")),
        )]
    }
}

/// An explicit extraction ratio must lie in `(0, 1]`. An absent ratio is
/// fine; the preset or the balanced default takes over.
struct RatioRangeRule;

impl ValidationRule for RatioRangeRule {
    fn name(&self) -> &str {
        "ratio_range"
    }

    fn validate(&self, spec: &CondenserSpec) -> Vec<ValidationDiagnostic> {
        let Some(r) = spec.extraction_ratio else {
            return vec![];
        };
        if r > 0.0 && r <= 1.0 {
            return vec![];
        }
        vec![Severity::Error.diagnose(
            SpecError::new(
                ErrorCode::RatioOutOfRange,
                "/extraction_ratio",
                format!("extraction_ratio must be in (0, 1], got {r}"),
            )
            .with_hint("Use a preset (brief, balanced, detailed) or a value like 0.3"),
        )]
    }
}

/// Runtime limits, when set, must be positive; a zero limit would reject
/// every document.
struct RuntimeLimitsRule;

impl ValidationRule for RuntimeLimitsRule {
    fn name(&self) -> &str {
        "runtime_limits"
    }

    fn validate(&self, spec: &CondenserSpec) -> Vec<ValidationDiagnostic> {
        [
            ("max_chars", spec.runtime.max_chars),
            ("max_sentences", spec.runtime.max_sentences),
        ]
        .into_iter()
        .filter(|&(_, value)| value == Some(0))
        .map(|(field, _)| {
            Severity::Error.diagnose(
                SpecError::new(
                    ErrorCode::LimitExceeded,
                    format!("/runtime/{field}"),
                    format!("{field} must be greater than 0"),
                )
                .with_hint(format!(
                    "Remove {field} to disable the limit, or set it to a positive value"
                )),
            )
        })
        .collect()
    }
}

/// Fields the schema does not recognize, gathered by `#[serde(flatten)]` at
/// both the top level and under `runtime`. Strict mode makes them errors;
/// otherwise they are warnings.
struct UnknownFieldsRule;

impl ValidationRule for UnknownFieldsRule {
    fn name(&self) -> &str {
        "unknown_fields"
    }

    fn validate(&self, spec: &CondenserSpec) -> Vec<ValidationDiagnostic> {
        let severity = Severity::for_strict(spec.strict);
        let scopes: [(&str, &HashMap<String, serde_json::Value>); 2] = [
            ("", &spec.unknown_fields),
            ("/runtime", &spec.runtime.unknown_fields),
        ];
        scopes
            .into_iter()
            .flat_map(|(scope, fields)| fields.keys().map(move |key| (scope, key)))
            .map(|(scope, key)| {
                severity.diagnose(
                    SpecError::new(
                        ErrorCode::UnknownField,
                        format!("{scope}/{key}"),
                        format!("unrecognized field \"{key}\""),
                    )
                    .with_hint("Check spelling or remove this field"),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: build a CondenserSpec from JSON.
    fn spec(json: &str) -> CondenserSpec {
        serde_json::from_str(json).unwrap()
    }

    fn engine() -> ValidationEngine {
        ValidationEngine::with_defaults()
    }

    // ─── Valid specs ────────────────────────────────────────────────────

    #[test]
    fn test_minimal_spec_is_valid() {
        let report = engine().validate(&spec(r#"{ "v": 1 }"#));
        assert!(report.is_valid());
        assert!(report.is_empty());
    }

    #[test]
    fn test_preset_spec_is_valid() {
        let report = engine().validate(&spec(r#"{ "v": 1, "preset": "detailed" }"#));
        assert!(report.is_valid());
    }

    #[test]
    fn test_ratio_boundaries() {
        assert!(engine()
            .validate(&spec(r#"{ "v": 1, "extraction_ratio": 1.0 }"#))
            .is_valid());
        assert!(engine()
            .validate(&spec(r#"{ "v": 1, "extraction_ratio": 0.001 }"#))
            .is_valid());
    }

    #[test]
    fn test_positive_runtime_limits_are_valid() {
        let report = engine().validate(&spec(
            r#"{ "v": 1, "runtime": { "max_chars": 500000, "max_sentences": 10000 } }"#,
        ));
        assert!(report.is_valid());
    }

    // ─── Rule: version ──────────────────────────────────────────────────

    #[test]
    fn test_unsupported_version_fails() {
        let report = engine().validate(&spec(r#"{ "v": 2 }"#));
        assert!(report.has_errors());
        let errs: Vec<_> = report.errors().collect();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].code, ErrorCode::UnsupportedVersion);
        assert_eq!(errs[0].path, "/v");
    }

    // ─── Rule: ratio_range ──────────────────────────────────────────────

    #[test]
    fn test_zero_ratio_fails() {
        let report = engine().validate(&spec(r#"{ "v": 1, "extraction_ratio": 0.0 }"#));
        assert!(report.has_errors());
        let errs: Vec<_> = report.errors().collect();
        assert_eq!(errs[0].code, ErrorCode::RatioOutOfRange);
    }

    #[test]
    fn test_ratio_above_one_fails() {
        let report = engine().validate(&spec(r#"{ "v": 1, "extraction_ratio": 1.5 }"#));
        assert!(report.has_errors());
    }

    #[test]
    fn test_negative_ratio_fails() {
        let report = engine().validate(&spec(r#"{ "v": 1, "extraction_ratio": -0.3 }"#));
        assert!(report.has_errors());
    }

    #[test]
    fn test_absent_ratio_is_fine() {
        let report = engine().validate(&spec(r#"{ "v": 1 }"#));
        assert!(report.is_valid());
    }

    // ─── Rule: runtime_limits ───────────────────────────────────────────

    #[test]
    fn test_zero_max_chars_fails() {
        let report = engine().validate(&spec(r#"{ "v": 1, "runtime": { "max_chars": 0 } }"#));
        assert!(report.has_errors());
        let errs: Vec<_> = report.errors().collect();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].code, ErrorCode::LimitExceeded);
        assert!(errs[0].path.contains("max_chars"));
    }

    #[test]
    fn test_both_zero_limits_report_two_errors() {
        let report = engine().validate(&spec(
            r#"{ "v": 1, "runtime": { "max_chars": 0, "max_sentences": 0 } }"#,
        ));
        assert_eq!(report.errors().count(), 2);
    }

    // ─── Rule: unknown_fields ───────────────────────────────────────────

    #[test]
    fn test_unknown_fields_non_strict_are_warnings() {
        let report = engine().validate(&spec(r#"{ "v": 1, "strict": false, "bogus": 42 }"#));
        assert!(report.is_valid()); // warnings don't make it invalid
        let warns: Vec<_> = report.warnings().collect();
        assert_eq!(warns.len(), 1);
        assert_eq!(warns[0].code, ErrorCode::UnknownField);
        assert!(warns[0].path.contains("bogus"));
    }

    #[test]
    fn test_unknown_fields_strict_are_errors() {
        let report = engine().validate(&spec(r#"{ "v": 1, "strict": true, "bogus": 42 }"#));
        assert!(report.has_errors());
        assert_eq!(report.errors().count(), 1);
    }

    #[test]
    fn test_unknown_runtime_field_strict() {
        let report = engine().validate(&spec(
            r#"{ "v": 1, "strict": true, "runtime": { "max_threads": 8 } }"#,
        ));
        assert!(report.has_errors());
        let errs: Vec<_> = report.errors().collect();
        assert!(errs[0].path.contains("max_threads"));
    }

    // ─── Report helpers and engine ──────────────────────────────────────

    #[test]
    fn test_multiple_rules_fire_independently() {
        let report = engine().validate(&spec(
            r#"{
                "v": 2,
                "strict": true,
                "bogus": true,
                "extraction_ratio": 0.0,
                "runtime": { "max_chars": 0 }
            }"#,
        ));
        assert_eq!(report.errors().count(), 4);
    }

    #[test]
    fn test_custom_rule() {
        struct AlwaysWarnRule;
        impl ValidationRule for AlwaysWarnRule {
            fn name(&self) -> &str {
                "always_warn"
            }
            fn validate(&self, _spec: &CondenserSpec) -> Vec<ValidationDiagnostic> {
                vec![Severity::Warning.diagnose(SpecError::new(
                    ErrorCode::UnknownField,
                    "",
                    "custom warning",
                ))]
            }
        }

        let mut eng = ValidationEngine::new();
        eng.add_rule(Box::new(AlwaysWarnRule));
        let report = eng.validate(&spec(r#"{ "v": 1 }"#));
        assert!(report.is_valid()); // warnings only
        assert_eq!(report.warnings().count(), 1);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = engine().validate(&spec(r#"{ "v": 1, "extraction_ratio": 2.0 }"#));
        let json = serde_json::to_value(&report).unwrap();
        let diags = json["diagnostics"].as_array().unwrap();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0]["severity"], "error");
        assert_eq!(diags[0]["code"], "ratio_out_of_range");
    }
}
