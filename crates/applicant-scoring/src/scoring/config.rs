use serde::{Deserialize, Serialize};

use super::domain::Attribute;
use super::error::ScoringError;

/// Tunable per-attribute weights.
///
/// `Default` yields the calibrated rubric. Deserializing a partial document sets
/// every weight it omits to zero, which switches that attribute off.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttributeWeights {
    #[serde(default)]
    pub education_level: f64,
    #[serde(default)]
    pub years_experience: f64,
    #[serde(default)]
    pub role_relevant_experience: f64,
    #[serde(default)]
    pub certifications: f64,
    #[serde(default)]
    pub skills_match: f64,
    #[serde(default)]
    pub coding_test_score: f64,
    #[serde(default)]
    pub interview_score: f64,
}

impl Default for AttributeWeights {
    fn default() -> Self {
        Self {
            education_level: 10.0,
            years_experience: 3.0,
            role_relevant_experience: 5.0,
            certifications: 4.0,
            skills_match: 6.0,
            coding_test_score: 1.2,
            interview_score: 1.4,
        }
    }
}

impl AttributeWeights {
    /// All weights set to zero.
    pub fn zeroed() -> Self {
        Self {
            education_level: 0.0,
            years_experience: 0.0,
            role_relevant_experience: 0.0,
            certifications: 0.0,
            skills_match: 0.0,
            coding_test_score: 0.0,
            interview_score: 0.0,
        }
    }

    pub fn get(&self, attribute: Attribute) -> f64 {
        match attribute {
            Attribute::EducationLevel => self.education_level,
            Attribute::YearsExperience => self.years_experience,
            Attribute::RoleRelevantExperience => self.role_relevant_experience,
            Attribute::Certifications => self.certifications,
            Attribute::SkillsMatch => self.skills_match,
            Attribute::CodingTestScore => self.coding_test_score,
            Attribute::InterviewScore => self.interview_score,
        }
    }

    pub fn set(&mut self, attribute: Attribute, weight: f64) {
        let slot = match attribute {
            Attribute::EducationLevel => &mut self.education_level,
            Attribute::YearsExperience => &mut self.years_experience,
            Attribute::RoleRelevantExperience => &mut self.role_relevant_experience,
            Attribute::Certifications => &mut self.certifications,
            Attribute::SkillsMatch => &mut self.skills_match,
            Attribute::CodingTestScore => &mut self.coding_test_score,
            Attribute::InterviewScore => &mut self.interview_score,
        };
        *slot = weight;
    }

    /// Builder-style variant of [`AttributeWeights::set`].
    pub fn with(mut self, attribute: Attribute, weight: f64) -> Self {
        self.set(attribute, weight);
        self
    }

    /// Reject negative and non-finite weights.
    pub fn validate(&self) -> Result<(), ScoringError> {
        for attribute in Attribute::ALL {
            let value = self.get(attribute);
            if !value.is_finite() || value < 0.0 {
                return Err(ScoringError::InvalidWeight { attribute, value });
            }
        }
        Ok(())
    }
}
