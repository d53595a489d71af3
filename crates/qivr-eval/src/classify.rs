//! Maps intake tags (body areas, treatments, symptoms) to a benchmark.
//!
//! Rules are evaluated in order and the first match wins. Matching is
//! case-insensitive substring containment, so free-form tags such as
//! "Lower back (left side)" still hit the `back` rule.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::benchmarks::{BenchmarkKey, RecoveryBenchmark, get_benchmark};

/// Tag input as it arrives from intake forms: absent, a single value, or a
/// list of values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum TagInput {
    #[default]
    Absent,
    One(String),
    Many(Vec<String>),
}

impl TagInput {
    /// Lower-cased values. An absent or empty single value yields no tags;
    /// list entries are kept as given, blanks included.
    pub fn normalize(self) -> Vec<String> {
        match self {
            TagInput::Absent => Vec::new(),
            TagInput::One(value) if value.is_empty() => Vec::new(),
            TagInput::One(value) => vec![value.to_lowercase()],
            TagInput::Many(values) => values.iter().map(|v| v.to_lowercase()).collect(),
        }
    }
}

impl From<&str> for TagInput {
    fn from(value: &str) -> Self {
        TagInput::One(value.to_string())
    }
}

impl From<String> for TagInput {
    fn from(value: String) -> Self {
        TagInput::One(value)
    }
}

impl From<Vec<String>> for TagInput {
    fn from(values: Vec<String>) -> Self {
        TagInput::Many(values)
    }
}

impl From<Vec<&str>> for TagInput {
    fn from(values: Vec<&str>) -> Self {
        TagInput::Many(values.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for TagInput {
    fn from(values: &[&str]) -> Self {
        TagInput::Many(values.iter().map(|v| v.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for TagInput {
    fn from(values: [&str; N]) -> Self {
        TagInput::Many(values.iter().map(|v| v.to_string()).collect())
    }
}

impl<T: Into<TagInput>> From<Option<T>> for TagInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(TagInput::Absent, Into::into)
    }
}

/// Normalized intake tags. Everything past the API boundary works on this.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientTags {
    pub areas: Vec<String>,
    pub treatments: Vec<String>,
    pub symptoms: Vec<String>,
}

impl PatientTags {
    pub fn new(
        areas: impl Into<TagInput>,
        treatments: impl Into<TagInput>,
        symptoms: impl Into<TagInput>,
    ) -> Self {
        Self {
            areas: areas.into().normalize(),
            treatments: treatments.into().normalize(),
            symptoms: symptoms.into().normalize(),
        }
    }
}

const BACK: &[&str] = &["back", "spine", "lumbar"];
const LEG_SYMPTOMS: &[&str] = &["numbness", "tingling", "radiating", "shooting down leg"];
const KNEE: &[&str] = &["knee"];
const INJECTION: &[&str] = &["injection", "cortisone", "steroid"];
const EXERCISE: &[&str] = &["physical therapy", "exercise", "pt"];
const SHOULDER: &[&str] = &["shoulder"];

fn mentions(values: &[String], needles: &[&str]) -> bool {
    values
        .iter()
        .any(|value| needles.iter().any(|needle| value.contains(needle)))
}

fn back_with_leg_symptoms(tags: &PatientTags) -> bool {
    mentions(&tags.areas, BACK) && mentions(&tags.symptoms, LEG_SYMPTOMS)
}

fn knee_with_injection(tags: &PatientTags) -> bool {
    mentions(&tags.areas, KNEE) && mentions(&tags.treatments, INJECTION)
}

fn knee_with_exercise(tags: &PatientTags) -> bool {
    mentions(&tags.areas, KNEE)
        && (tags.treatments.is_empty() || mentions(&tags.treatments, EXERCISE))
}

fn shoulder(tags: &PatientTags) -> bool {
    mentions(&tags.areas, SHOULDER)
}

fn back(tags: &PatientTags) -> bool {
    mentions(&tags.areas, BACK)
}

/// One classification rule: if `matches` holds, the patient maps to `key`.
pub struct ConditionRule {
    pub name: &'static str,
    pub key: BenchmarkKey,
    predicate: fn(&PatientTags) -> bool,
}

impl ConditionRule {
    pub fn matches(&self, tags: &PatientTags) -> bool {
        (self.predicate)(tags)
    }
}

/// Classification rules in precedence order.
pub static CONDITION_RULES: [ConditionRule; 5] = [
    ConditionRule {
        name: "back_with_leg_symptoms",
        key: BenchmarkKey::LumbarRadicularPain,
        predicate: back_with_leg_symptoms,
    },
    ConditionRule {
        name: "knee_with_injection",
        key: BenchmarkKey::KneeOaInjection,
        predicate: knee_with_injection,
    },
    ConditionRule {
        name: "knee_with_exercise",
        key: BenchmarkKey::KneeOaExercise,
        predicate: knee_with_exercise,
    },
    ConditionRule {
        name: "shoulder",
        key: BenchmarkKey::RotatorCuffExercise,
        predicate: shoulder,
    },
    ConditionRule {
        name: "back",
        key: BenchmarkKey::AcuteLowBackPain,
        predicate: back,
    },
];

/// Used when no rule matches.
pub const FALLBACK_BENCHMARK: BenchmarkKey = BenchmarkKey::AcuteLowBackPain;

pub fn classify(tags: &PatientTags) -> BenchmarkKey {
    match CONDITION_RULES.iter().find(|rule| rule.matches(tags)) {
        Some(rule) => {
            debug!(rule = rule.name, benchmark = %rule.key, "condition rule matched");
            rule.key
        }
        None => {
            debug!(benchmark = %FALLBACK_BENCHMARK, "no condition rule matched, using fallback");
            FALLBACK_BENCHMARK
        }
    }
}

pub fn get_benchmark_for_patient(
    selected_areas: impl Into<TagInput>,
    current_treatments: impl Into<TagInput>,
    symptoms: impl Into<TagInput>,
) -> &'static RecoveryBenchmark {
    let tags = PatientTags::new(selected_areas, current_treatments, symptoms);
    get_benchmark(classify(&tags))
}
