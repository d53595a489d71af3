//! Patient expectation vs. benchmark window.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::benchmarks::RecoveryBenchmark;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ExpectationStatus {
    /// Expected recovery is faster than the evidence window.
    Optimistic,
    /// Expected recovery is slower than the evidence window.
    Conservative,
    Aligned,
}

impl ExpectationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ExpectationStatus::Optimistic => "optimistic",
            ExpectationStatus::Conservative => "conservative",
            ExpectationStatus::Aligned => "aligned",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComparisonResult {
    pub text: String,
    pub status: ExpectationStatus,
}

/// Compare the patient's stated timeline (already converted to
/// `patient_weeks`) against the benchmark's typical window.
///
/// `_current_pain` does not affect the verdict or the wording.
pub fn generate_comparison_text(
    timeline: Option<&str>,
    _current_pain: f64,
    benchmark: &RecoveryBenchmark,
    patient_weeks: f64,
) -> ComparisonResult {
    let range = benchmark.typical_range();

    let Some(timeline) = timeline.filter(|t| !t.is_empty()) else {
        return ComparisonResult {
            text: format!("Based on evidence, typical recovery occurs over {range}."),
            status: ExpectationStatus::Aligned,
        };
    };

    if patient_weeks < benchmark.min_weeks {
        return ComparisonResult {
            text: format!(
                "Your expectation ({timeline}) may be optimistic. {}.",
                benchmark.summary()
            ),
            status: ExpectationStatus::Optimistic,
        };
    }

    if patient_weeks > benchmark.max_weeks {
        return ComparisonResult {
            text: format!(
                "Your expectation ({timeline}) is conservative. Many patients see improvement \
                 within {range}, though individual results vary."
            ),
            status: ExpectationStatus::Conservative,
        };
    }

    ComparisonResult {
        text: format!(
            "Your expectation ({timeline}) aligns well with typical recovery timelines of {range}."
        ),
        status: ExpectationStatus::Aligned,
    }
}
