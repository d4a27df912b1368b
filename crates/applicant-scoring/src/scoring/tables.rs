//! Read-only tables consulted by the scoring rubric.
//!
//! Each table is audited on its own: extending the proxy list or the required
//! skills never requires touching the contribution rules.

use super::domain::Decision;

/// Base points per education label, ordered from lowest to highest degree.
pub const EDUCATION_SCALE: [(&str, u8); 5] = [
    ("high_school", 0),
    ("associate", 4),
    ("bachelor", 8),
    ("master", 10),
    ("phd", 12),
];

/// Skills the role requires; `skills_match` counts the overlap with this set.
pub const REQUIRED_SKILLS: [&str; 5] = [
    "python",
    "data-structures",
    "algorithms",
    "system-design",
    "sql",
];

/// Fields that may correlate with protected attributes. They never feed the
/// score and are surfaced for human review when present, in this order.
pub const PROXY_FIELDS: [&str; 4] = [
    "location",
    "last_employer_type",
    "zip_code",
    "employment_gaps",
];

/// Experience years an idealized applicant brings, per experience attribute.
pub const MAX_PLAUSIBLE_EXPERIENCE_YEARS: f64 = 30.0;

/// Certifications an idealized applicant holds.
pub const MAX_PLAUSIBLE_CERTIFICATIONS: f64 = 10.0;

/// Upper bound of the 0-100 scale used by test and interview scores.
pub const ASSESSMENT_SCALE_MAX: f64 = 100.0;

/// Half-open score interval `[low, high)` mapped to a decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionBand {
    pub decision: Decision,
    pub low: f64,
    pub high: f64,
}

impl DecisionBand {
    pub fn contains(&self, score: f64) -> bool {
        self.low <= score && score < self.high
    }
}

/// Evaluated in declaration order. The last band also accepts `high` itself.
pub const DECISION_BANDS: [DecisionBand; 4] = [
    DecisionBand {
        decision: Decision::Reject,
        low: 0.0,
        high: 40.0,
    },
    DecisionBand {
        decision: Decision::Consider,
        low: 40.0,
        high: 60.0,
    },
    DecisionBand {
        decision: Decision::Interview,
        low: 60.0,
        high: 80.0,
    },
    DecisionBand {
        decision: Decision::Hire,
        low: 80.0,
        high: 100.0,
    },
];

/// Base points for an education label, `None` when the label is unknown.
pub fn education_base_score(label: &str) -> Option<u8> {
    let normalized = label.trim().to_ascii_lowercase();
    EDUCATION_SCALE
        .iter()
        .find(|(name, _)| *name == normalized)
        .map(|(_, points)| *points)
}

/// Highest base score on the education scale.
pub fn top_education_score() -> u8 {
    EDUCATION_SCALE
        .iter()
        .map(|(_, points)| *points)
        .max()
        .unwrap_or(0)
}
