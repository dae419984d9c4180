use serde::{Deserialize, Serialize};

use crate::datastructures::TruthTableRow;
use crate::errors::ReasonError;

/// The outcome of analysing a problem.
///
/// Every call of [`reason`](crate::reason) returns an `AnalysisResult`. If the
/// analysis failed, `success` is `false`, the table is empty, and the
/// explanation describes the error.
///
/// The record serializes with the truth table as a flat list of rows:
///
/// ```
/// # use logic_reasoner::reason;
/// let json = reason("A ∧ B").to_json().unwrap();
///
/// assert!(json.contains(r#""A": true"#));
/// assert!(json.contains(r#""Result": false"#));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Human-readable description of the analysis, one finding per line.
    pub explanation: String,
    /// The rows of the truth table, empty for constants and failures.
    pub truth_table: Vec<TruthTableRow>,
    /// Short summary of the analysis.
    pub conclusion: String,
    /// Confidence in the conclusion, between 0 and 1.
    pub confidence: f64,
    /// `false` if the problem could not be analysed.
    pub success: bool,
    /// The analysed formula in symbolic notation.
    pub expression: Option<String>,
}

impl AnalysisResult {
    /// Creates the result reported for a failed analysis.
    pub fn failure(error: &ReasonError) -> Self {
        Self {
            explanation: error.to_string(),
            truth_table: Vec::new(),
            conclusion: error.conclusion().to_string(),
            confidence: error.confidence(),
            success: false,
            expression: None,
        }
    }

    /// Serializes this result to pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
