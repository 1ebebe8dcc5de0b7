//! Proposed cell fixes and the confidence gate.

use serde::{Deserialize, Serialize};

/// Issues with a confidence at or below this value are discarded.
pub const CONFIDENCE_THRESHOLD: f64 = 0.7;

/// A proposed correction for one cell, as produced by the model.
///
/// Only `confidence` is inspected; every other field is relayed to the caller
/// unchecked. Defaults keep a sparse model reply parseable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// 1-based row of the affected cell.
    #[serde(default)]
    pub row: i64,

    /// 1-based column of the affected cell.
    #[serde(default)]
    pub col: i64,

    /// Free-text category label, e.g. "Phone format".
    #[serde(rename = "type", default)]
    pub kind: String,

    /// The value as it currently stands.
    #[serde(default)]
    pub old_value: String,

    /// The proposed replacement.
    #[serde(default)]
    pub new_value: String,

    /// Model confidence in [0, 1]; absent when the model gave none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl Issue {
    /// Create an issue without a confidence score.
    pub fn new(
        row: i64,
        col: i64,
        kind: impl Into<String>,
        old_value: impl Into<String>,
        new_value: impl Into<String>,
    ) -> Self {
        Self {
            row,
            col,
            kind: kind.into(),
            old_value: old_value.into(),
            new_value: new_value.into(),
            confidence: None,
        }
    }

    /// Set the confidence score.
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// Whether the issue clears the confidence gate: kept when the model gave
    /// no confidence at all, or one strictly above the threshold.
    pub fn is_confident(&self) -> bool {
        match self.confidence {
            None => true,
            Some(c) => c > CONFIDENCE_THRESHOLD,
        }
    }
}

/// Keep only issues that clear the confidence gate, preserving order.
pub fn filter_confident(issues: Vec<Issue>) -> Vec<Issue> {
    issues.into_iter().filter(Issue::is_confident).collect()
}
