use serde_json::{Map, Value};

use super::domain::ApplicantRecord;
use super::error::ScoringError;
use super::tables::ASSESSMENT_SCALE_MAX;

const EDUCATION_LEVEL: &str = "education_level";
const YEARS_EXPERIENCE: &str = "years_experience";
const ROLE_EXPERIENCE_YEARS: &str = "role_relevant_experience_years";
const ROLE_EXPERIENCE: &str = "role_relevant_experience";
const CERTIFICATIONS: &str = "certifications";
const SKILLS: &str = "skills";
const CODING_TEST_SCORE: &str = "coding_test_score";
const INTERVIEW_SCORE: &str = "interview_score";

const RUBRIC_KEYS: [&str; 8] = [
    EDUCATION_LEVEL,
    YEARS_EXPERIENCE,
    ROLE_EXPERIENCE_YEARS,
    ROLE_EXPERIENCE,
    CERTIFICATIONS,
    SKILLS,
    CODING_TEST_SCORE,
    INTERVIEW_SCORE,
];

impl ApplicantRecord {
    /// Parse an untyped attribute bag into a record.
    ///
    /// Absent, `null` and blank values leave the field unset. Every numeric field
    /// is validated before the record is returned, so a record either parses
    /// completely or not at all.
    pub fn from_attributes(attributes: &Map<String, Value>) -> Result<Self, ScoringError> {
        let education_level = text_field(attributes, EDUCATION_LEVEL)?;
        let years_experience = non_negative(attributes, YEARS_EXPERIENCE)?;
        let role_relevant_experience = match non_negative(attributes, ROLE_EXPERIENCE_YEARS)? {
            Some(years) if years > 0.0 => Some(years),
            preferred => non_negative(attributes, ROLE_EXPERIENCE)?.or(preferred),
        };
        let certifications = list_field(attributes, CERTIFICATIONS)?;
        let skills = list_field(attributes, SKILLS)?;
        let coding_test_score = assessment(attributes, CODING_TEST_SCORE)?;
        let interview_score = assessment(attributes, INTERVIEW_SCORE)?;

        let extra = attributes
            .iter()
            .filter(|(key, _)| !RUBRIC_KEYS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Ok(Self {
            education_level,
            years_experience,
            role_relevant_experience,
            certifications,
            skills,
            coding_test_score,
            interview_score,
            extra,
        })
    }
}

impl TryFrom<&Map<String, Value>> for ApplicantRecord {
    type Error = ScoringError;

    fn try_from(attributes: &Map<String, Value>) -> Result<Self, Self::Error> {
        Self::from_attributes(attributes)
    }
}

impl TryFrom<&Value> for ApplicantRecord {
    type Error = ScoringError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(attributes) => Self::from_attributes(attributes),
            _ => Err(ScoringError::malformed("applicant", "an object of attributes")),
        }
    }
}

fn present<'a>(attributes: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    attributes.get(field).filter(|value| !value.is_null())
}

fn text_field(
    attributes: &Map<String, Value>,
    field: &str,
) -> Result<Option<String>, ScoringError> {
    match present(attributes, field) {
        None => Ok(None),
        Some(Value::String(text)) => {
            let trimmed = text.trim();
            Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
        }
        Some(_) => Err(ScoringError::malformed(field, "a string")),
    }
}

fn numeric_field(
    attributes: &Map<String, Value>,
    field: &str,
) -> Result<Option<f64>, ScoringError> {
    let value = match present(attributes, field) {
        None => return Ok(None),
        Some(Value::Number(number)) => number
            .as_f64()
            .ok_or_else(|| ScoringError::numeric(field, number))?,
        Some(Value::String(raw)) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<f64>()
                .map_err(|_| ScoringError::numeric(field, format!("{raw:?}")))?
        }
        Some(other) => return Err(ScoringError::numeric(field, other)),
    };

    if !value.is_finite() {
        return Err(ScoringError::numeric(field, value));
    }
    Ok(Some(value))
}

fn non_negative(attributes: &Map<String, Value>, field: &str) -> Result<Option<f64>, ScoringError> {
    match numeric_field(attributes, field)? {
        Some(value) if value < 0.0 => Err(ScoringError::numeric(field, value)),
        parsed => Ok(parsed),
    }
}

fn assessment(attributes: &Map<String, Value>, field: &str) -> Result<Option<f64>, ScoringError> {
    match non_negative(attributes, field)? {
        Some(value) if value > ASSESSMENT_SCALE_MAX => Err(ScoringError::numeric(field, value)),
        parsed => Ok(parsed),
    }
}

fn list_field(attributes: &Map<String, Value>, field: &str) -> Result<Vec<String>, ScoringError> {
    let entries = match present(attributes, field) {
        None => return Ok(Vec::new()),
        Some(Value::String(single)) => vec![single.trim().to_string()],
        Some(Value::Array(items)) => items
            .iter()
            .filter(|item| !item.is_null())
            .map(|item| match item {
                Value::String(text) => Ok(text.trim().to_string()),
                Value::Number(number) => Ok(number.to_string()),
                _ => Err(ScoringError::malformed(field, "a list of strings")),
            })
            .collect::<Result<Vec<_>, _>>()?,
        Some(_) => return Err(ScoringError::malformed(field, "a list of strings")),
    };

    Ok(entries.into_iter().filter(|entry| !entry.is_empty()).collect())
}
