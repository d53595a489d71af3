//! Option vocabularies offered by the intake questionnaire.
//!
//! These are the literal values the classifier and timeline normalizer
//! receive from the patient portal.

/// Answer meaning the patient has no expectation; normalizes to the default
/// week count.
pub const UNCERTAIN_TIMELINE: &str = "Uncertain";

/// "When do you expect to feel better?"
pub const TIMELINE_OPTIONS: &[&str] = &[
    "1-2 weeks",
    "3-4 weeks",
    "1-2 months",
    "3-6 months",
    "6-12 months",
    "More than 1 year",
    UNCERTAIN_TIMELINE,
];

pub const CURRENT_TREATMENT_OPTIONS: &[&str] = &[
    "Physical therapy",
    "Chiropractic care",
    "Massage therapy",
    "Acupuncture",
    "Injections (cortisone, etc.)",
    "Prescription medication",
    "Over-the-counter medication",
    "Heat/Ice therapy",
    "Bracing/Support devices",
    "None",
];

pub const PAIN_QUALITY_OPTIONS: &[&str] = &[
    "Aching",
    "Sharp",
    "Burning",
    "Stabbing",
    "Throbbing",
    "Shooting",
    "Tingling",
    "Numbness",
    "Dull",
    "Cramping",
    "Stiffness",
];

pub const RED_FLAG_OPTIONS: &[&str] = &[
    "Recent trauma or injury",
    "Loss of bowel/bladder control",
    "Fever or unexplained weight loss",
    "Severe night pain",
    "Pain getting progressively worse",
    "Numbness or tingling",
    "Muscle weakness",
];

/// "Primary treatment goals". Passed through to the recovery target, which
/// does not yet weigh them.
pub const GOAL_OPTIONS: &[&str] = &[
    "Reduce pain intensity",
    "Improve mobility and flexibility",
    "Increase strength and stability",
    "Sleep better without pain",
    "Return to normal daily activities",
    "Return to sports/recreational activities",
    "Return to work or improve work function",
    "Avoid surgery if possible",
    "Prepare for upcoming surgery",
    "Recover from recent surgery",
    "Reduce medication use",
    "Improve posture and alignment",
    "Prevent condition from worsening",
    "Maintain independent living",
];
