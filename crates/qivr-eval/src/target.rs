/// Target pain score (0–10 scale) for a patient currently at `current_pain`.
///
/// Recovery usually means functional improvement rather than zero pain, so
/// the target is banded: severe (7+) → 2, moderate (4+) → 1.5, otherwise 0.5.
/// `_goals` is accepted for interface compatibility and not yet consulted.
pub fn calculate_recovery_target(current_pain: f64, _goals: Option<&[String]>) -> f64 {
    if current_pain >= 7.0 {
        2.0
    } else if current_pain >= 4.0 {
        1.5
    } else {
        0.5
    }
}
