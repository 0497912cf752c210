//! Structured spec-validation errors.
//!
//! Each finding carries a stable machine-readable code, a JSON-pointer-ish
//! path to the offending field, a human message, and an optional hint. The
//! whole thing serializes to JSON for UI consumers.

use std::fmt;

use serde::Serialize;

/// Stable machine-readable codes for spec diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The spec version is not supported.
    UnsupportedVersion,
    /// The extraction ratio fell outside `(0, 1]`.
    RatioOutOfRange,
    /// A runtime limit was set to a useless value.
    LimitExceeded,
    /// A field the schema does not recognize.
    UnknownField,
}

/// A single validation finding.
#[derive(Debug, Clone, Serialize)]
pub struct SpecError {
    pub code: ErrorCode,
    /// Path to the offending field, e.g. `/runtime/max_chars`.
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl SpecError {
    pub fn new(
        code: ErrorCode,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code,
            path: path.into(),
            message: message.into(),
            hint: None,
        }
    }

    /// Attach a remediation hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

impl std::error::Error for SpecError {}
