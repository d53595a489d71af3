//! Patient-facing timeline buckets → representative week counts.

use tracing::debug;

/// Used when the timeline is missing or not a known bucket.
pub const DEFAULT_TIMELINE_WEEKS: f64 = 8.0;

/// Bucket label → representative weeks. Both "3-4 months" and "3-6 months"
/// map to 14; kept as-is pending product confirmation.
pub const TIMELINE_WEEKS: [(&str, f64); 8] = [
    ("1-2 weeks", 1.5),
    ("3-4 weeks", 3.5),
    ("1-2 months", 6.0),
    ("3-4 months", 14.0),
    ("3-6 months", 14.0),
    ("4-6 months", 20.0),
    ("6-12 months", 36.0),
    ("More than 1 year", 52.0),
];

pub fn timeline_to_weeks(timeline: Option<&str>) -> f64 {
    let Some(label) = timeline else {
        return DEFAULT_TIMELINE_WEEKS;
    };

    match TIMELINE_WEEKS.iter().find(|(bucket, _)| *bucket == label) {
        Some(&(_, weeks)) => weeks,
        None => {
            debug!(timeline = label, "unrecognized timeline, using default weeks");
            DEFAULT_TIMELINE_WEEKS
        }
    }
}
