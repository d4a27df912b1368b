use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// Attributes permitted in the scoring rubric, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    EducationLevel,
    YearsExperience,
    RoleRelevantExperience,
    Certifications,
    SkillsMatch,
    CodingTestScore,
    InterviewScore,
}

impl Attribute {
    pub const ALL: [Attribute; 7] = [
        Attribute::EducationLevel,
        Attribute::YearsExperience,
        Attribute::RoleRelevantExperience,
        Attribute::Certifications,
        Attribute::SkillsMatch,
        Attribute::CodingTestScore,
        Attribute::InterviewScore,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Attribute::EducationLevel => "education_level",
            Attribute::YearsExperience => "years_experience",
            Attribute::RoleRelevantExperience => "role_relevant_experience",
            Attribute::Certifications => "certifications",
            Attribute::SkillsMatch => "skills_match",
            Attribute::CodingTestScore => "coding_test_score",
            Attribute::InterviewScore => "interview_score",
        }
    }
}

/// Discrete outcome derived from the normalized score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Reject,
    Consider,
    Interview,
    Hire,
}

impl Decision {
    pub const fn label(self) -> &'static str {
        match self {
            Decision::Reject => "reject",
            Decision::Consider => "consider",
            Decision::Interview => "interview",
            Decision::Hire => "hire",
        }
    }
}

/// Applicant attributes after parsing the inbound attribute bag.
///
/// Fields that are not part of the rubric are retained in `extra` so the proxy
/// detector can inspect them; they never contribute to the score.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicantRecord {
    pub education_level: Option<String>,
    pub years_experience: Option<f64>,
    pub role_relevant_experience: Option<f64>,
    pub certifications: Vec<String>,
    pub skills: Vec<String>,
    pub coding_test_score: Option<f64>,
    pub interview_score: Option<f64>,
    pub extra: Map<String, Value>,
}

impl ApplicantRecord {
    /// Attach a non-rubric attribute such as `location` or `name`.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Whether a non-rubric attribute is present with a non-null value.
    pub fn has_attribute(&self, key: &str) -> bool {
        self.extra.get(key).is_some_and(|value| !value.is_null())
    }
}

/// Contribution of each attribute to the raw total.
///
/// Assessment scores stay `None` when the applicant was never assessed, which
/// is distinct from an assessed score of zero. Serialized values are rounded
/// to two decimals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    #[serde(serialize_with = "two_decimals")]
    pub education_level: f64,
    #[serde(serialize_with = "two_decimals")]
    pub years_experience: f64,
    #[serde(serialize_with = "two_decimals")]
    pub role_relevant_experience: f64,
    #[serde(serialize_with = "two_decimals")]
    pub certifications: f64,
    #[serde(serialize_with = "two_decimals")]
    pub skills_match: f64,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "optional_two_decimals"
    )]
    pub coding_test_score: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "optional_two_decimals"
    )]
    pub interview_score: Option<f64>,
}

impl ScoreBreakdown {
    pub fn get(&self, attribute: Attribute) -> Option<f64> {
        match attribute {
            Attribute::EducationLevel => Some(self.education_level),
            Attribute::YearsExperience => Some(self.years_experience),
            Attribute::RoleRelevantExperience => Some(self.role_relevant_experience),
            Attribute::Certifications => Some(self.certifications),
            Attribute::SkillsMatch => Some(self.skills_match),
            Attribute::CodingTestScore => self.coding_test_score,
            Attribute::InterviewScore => self.interview_score,
        }
    }

    /// Evaluated contributions in the order they were computed.
    pub fn entries(&self) -> impl Iterator<Item = (Attribute, f64)> + '_ {
        Attribute::ALL
            .into_iter()
            .filter_map(|attribute| self.get(attribute).map(|value| (attribute, value)))
    }

    pub fn total(&self) -> f64 {
        self.entries().map(|(_, value)| value).sum()
    }
}

/// Evaluation output describing the composite score and decision trail.
///
/// Fields keep full precision in memory and the decision is taken on the
/// unrounded score; numbers are rounded to two decimals only when serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    #[serde(serialize_with = "two_decimals")]
    pub total_score: f64,
    #[serde(serialize_with = "two_decimals")]
    pub raw_total: f64,
    pub breakdown: ScoreBreakdown,
    pub decision: Decision,
    pub explanation: String,
    pub proxies_flagged: Vec<String>,
}

pub(crate) fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn two_decimals<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round_to_cents(*value))
}

fn optional_two_decimals<S: Serializer>(
    value: &Option<f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(value) => serializer.serialize_some(&round_to_cents(*value)),
        None => serializer.serialize_none(),
    }
}
