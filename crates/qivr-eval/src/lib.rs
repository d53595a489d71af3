//! qivr-eval
//!
//! Recovery benchmark evidence mapping. Pure computation: no I/O, no shared
//! mutable state. Classifies a patient's condition from intake tags, picks an
//! evidence-based recovery curve, and compares the patient's expected
//! timeline against it.

pub mod benchmarks;
pub mod classify;
pub mod comparison;
pub mod error;
pub mod evaluate;
pub mod intake;
pub mod overlay;
pub mod target;
pub mod timeline;

pub use benchmarks::{
    BenchmarkKey, Catalog, RecoveryBenchmark, RecoveryCurvePoint, catalog, get_benchmark,
    get_expected_pain_reduction,
};
pub use classify::{PatientTags, TagInput, classify, get_benchmark_for_patient};
pub use comparison::{ComparisonResult, ExpectationStatus, generate_comparison_text};
pub use error::EvalError;
pub use evaluate::{PatientIntake, RecoveryEvaluation, evaluate, evaluate_with};
pub use overlay::CatalogOverlay;
pub use target::calculate_recovery_target;
pub use timeline::timeline_to_weeks;
