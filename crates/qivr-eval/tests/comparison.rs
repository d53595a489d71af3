use qivr_eval::intake::GOAL_OPTIONS;
use qivr_eval::timeline::DEFAULT_TIMELINE_WEEKS;
use qivr_eval::{
    BenchmarkKey, ExpectationStatus, calculate_recovery_target, generate_comparison_text,
    get_benchmark, timeline_to_weeks,
};

#[test]
fn timeline_buckets() {
    assert_eq!(timeline_to_weeks(Some("1-2 weeks")), 1.5);
    assert_eq!(timeline_to_weeks(Some("3-4 weeks")), 3.5);
    assert_eq!(timeline_to_weeks(Some("1-2 months")), 6.0);
    assert_eq!(timeline_to_weeks(Some("4-6 months")), 20.0);
    assert_eq!(timeline_to_weeks(Some("6-12 months")), 36.0);
    assert_eq!(timeline_to_weeks(Some("More than 1 year")), 52.0);
}

#[test]
fn three_to_four_and_three_to_six_months_share_a_value() {
    assert_eq!(timeline_to_weeks(Some("3-4 months")), 14.0);
    assert_eq!(timeline_to_weeks(Some("3-6 months")), 14.0);
}

#[test]
fn unknown_or_missing_timeline_defaults_to_eight_weeks() {
    assert_eq!(timeline_to_weeks(Some("nonsense")), 8.0);
    assert_eq!(timeline_to_weeks(None), 8.0);
    assert_eq!(timeline_to_weeks(Some("")), DEFAULT_TIMELINE_WEEKS);
    // Labels are matched exactly.
    assert_eq!(timeline_to_weeks(Some("1-2 Weeks")), DEFAULT_TIMELINE_WEEKS);
}

#[test]
fn recovery_target_bands() {
    assert_eq!(calculate_recovery_target(8.0, None), 2.0);
    assert_eq!(calculate_recovery_target(7.0, None), 2.0);
    assert_eq!(calculate_recovery_target(5.0, None), 1.5);
    assert_eq!(calculate_recovery_target(4.0, None), 1.5);
    assert_eq!(calculate_recovery_target(3.9, None), 0.5);
    assert_eq!(calculate_recovery_target(2.0, None), 0.5);
}

#[test]
fn recovery_target_ignores_goals() {
    let goals: Vec<String> = GOAL_OPTIONS.iter().map(|g| g.to_string()).collect();
    assert_eq!(
        calculate_recovery_target(5.0, Some(goals.as_slice())),
        calculate_recovery_target(5.0, None)
    );
}

#[test]
fn no_timeline_is_aligned_with_generic_text() {
    let b = get_benchmark(BenchmarkKey::KneeOaExercise);
    let result = generate_comparison_text(None, 5.0, b, 8.0);
    assert_eq!(result.status, ExpectationStatus::Aligned);
    assert_eq!(
        result.text,
        "Based on evidence, typical recovery occurs over 6-18 weeks."
    );

    let blank = generate_comparison_text(Some(""), 5.0, b, 8.0);
    assert_eq!(blank, result);
}

#[test]
fn faster_than_window_is_optimistic() {
    let b = get_benchmark(BenchmarkKey::AcuteLowBackPain);
    let result = generate_comparison_text(Some("1-2 weeks"), 5.0, b, 1.5);
    assert_eq!(result.status, ExpectationStatus::Optimistic);
    assert_eq!(
        result.text,
        "Your expectation (1-2 weeks) may be optimistic. Typical improvement is front-loaded."
    );
}

#[test]
fn slower_than_window_is_conservative() {
    let b = get_benchmark(BenchmarkKey::AcuteLowBackPain);
    let result = generate_comparison_text(Some("6-12 months"), 5.0, b, 36.0);
    assert_eq!(result.status, ExpectationStatus::Conservative);
    assert_eq!(
        result.text,
        "Your expectation (6-12 months) is conservative. Many patients see improvement within \
         6-12 weeks, though individual results vary."
    );
}

#[test]
fn window_bounds_are_inclusive() {
    let b = get_benchmark(BenchmarkKey::LumbarRadicularPain);
    for weeks in [4.0, 5.0, 6.0] {
        let result = generate_comparison_text(Some("1-2 months"), 3.0, b, weeks);
        assert_eq!(result.status, ExpectationStatus::Aligned);
    }

    let result = generate_comparison_text(Some("1-2 months"), 3.0, b, 6.0);
    assert_eq!(
        result.text,
        "Your expectation (1-2 months) aligns well with typical recovery timelines of 4-6 weeks."
    );
}

#[test]
fn current_pain_does_not_change_the_verdict() {
    let b = get_benchmark(BenchmarkKey::RotatorCuffExercise);
    let low = generate_comparison_text(Some("1-2 months"), 1.0, b, 6.0);
    let high = generate_comparison_text(Some("1-2 months"), 10.0, b, 6.0);
    assert_eq!(low, high);
    assert_eq!(low.status, ExpectationStatus::Optimistic);
    assert!(low.text.ends_with("further gains over 3-12 months."));
}

#[test]
fn status_serializes_lowercase() {
    let json = serde_json::to_string(&ExpectationStatus::Conservative).unwrap();
    assert_eq!(json, "\"conservative\"");
}
