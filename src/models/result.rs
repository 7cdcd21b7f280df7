use serde::{Deserialize, Serialize};

/// The scored outcome of a completed test.
///
/// Built atomically by the scoring pipeline (model output or fallback) and
/// never partially populated; the results view treats it as read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub iq_score: i32,
    pub iq_category: String,
    /// Share of the population scoring below, 0 to 100.
    pub percentile: i32,
    pub performance: Vec<PerformanceEntry>,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceEntry {
    pub category: String,
    pub percentage: i32,
}

impl PerformanceEntry {
    pub fn new(category: impl Into<String>, percentage: i32) -> Self {
        Self {
            category: category.into(),
            percentage,
        }
    }
}
