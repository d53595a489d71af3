//! One-call evaluation of an intake submission.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::benchmarks::{BenchmarkKey, Catalog, RecoveryBenchmark, catalog};
use crate::classify::{PatientTags, TagInput, classify};
use crate::comparison::{ComparisonResult, generate_comparison_text};
use crate::error::EvalError;
use crate::target::calculate_recovery_target;
use crate::timeline::timeline_to_weeks;

/// The intake answers the evaluation needs, as posted by the portal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PatientIntake {
    #[serde(default)]
    pub selected_areas: TagInput,
    #[serde(default)]
    pub current_treatments: TagInput,
    #[serde(default)]
    pub symptoms: TagInput,
    #[serde(default)]
    pub timeline: Option<String>,
    /// 0–10 numeric pain rating.
    #[serde(default)]
    pub current_pain: f64,
    #[serde(default)]
    pub goals: Vec<String>,
}

impl PatientIntake {
    pub fn validate(&self) -> Result<(), EvalError> {
        if !(0.0..=10.0).contains(&self.current_pain) {
            return Err(EvalError::PainOutOfRange(self.current_pain));
        }
        Ok(())
    }

    pub fn tags(&self) -> PatientTags {
        PatientTags::new(
            self.selected_areas.clone(),
            self.current_treatments.clone(),
            self.symptoms.clone(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RecoveryEvaluation {
    pub benchmark_key: BenchmarkKey,
    pub benchmark: RecoveryBenchmark,
    pub patient_weeks: f64,
    pub recovery_target: f64,
    /// Benchmark pain reduction (%) at the patient's expected week.
    pub expected_pain_reduction: f64,
    pub comparison: ComparisonResult,
}

pub fn evaluate(intake: &PatientIntake) -> RecoveryEvaluation {
    evaluate_with(catalog(), intake)
}

pub fn evaluate_with(catalog: &Catalog, intake: &PatientIntake) -> RecoveryEvaluation {
    let benchmark_key = classify(&intake.tags());
    let benchmark = catalog.get(benchmark_key);

    let timeline = intake.timeline.as_deref().filter(|t| !t.is_empty());
    let patient_weeks = timeline_to_weeks(timeline);
    let comparison =
        generate_comparison_text(timeline, intake.current_pain, benchmark, patient_weeks);

    debug!(
        benchmark = %benchmark_key,
        patient_weeks,
        status = comparison.status.as_str(),
        "recovery expectation evaluated"
    );

    let recovery_target =
        calculate_recovery_target(intake.current_pain, Some(intake.goals.as_slice()));

    RecoveryEvaluation {
        benchmark_key,
        benchmark: benchmark.clone(),
        patient_weeks,
        recovery_target,
        expected_pain_reduction: benchmark.expected_pain_reduction(patient_weeks),
        comparison,
    }
}
