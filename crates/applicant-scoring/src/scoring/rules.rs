use std::collections::BTreeSet;

use super::config::AttributeWeights;
use super::domain::{ApplicantRecord, ScoreBreakdown};
use super::tables::{
    education_base_score, top_education_score, ASSESSMENT_SCALE_MAX,
    MAX_PLAUSIBLE_CERTIFICATIONS, MAX_PLAUSIBLE_EXPERIENCE_YEARS, REQUIRED_SKILLS,
};

/// Compute per-attribute contributions and their running sum.
pub(crate) fn score_record(
    record: &ApplicantRecord,
    weights: &AttributeWeights,
) -> (ScoreBreakdown, f64) {
    let mut breakdown = ScoreBreakdown::default();
    let mut raw_total = 0.0;

    let education_points = record
        .education_level
        .as_deref()
        .and_then(education_base_score)
        .unwrap_or(0);
    breakdown.education_level = f64::from(education_points) * weights.education_level;
    raw_total += breakdown.education_level;

    breakdown.years_experience = record.years_experience.unwrap_or(0.0) * weights.years_experience;
    raw_total += breakdown.years_experience;

    breakdown.role_relevant_experience =
        record.role_relevant_experience.unwrap_or(0.0) * weights.role_relevant_experience;
    raw_total += breakdown.role_relevant_experience;

    breakdown.certifications =
        certification_count(&record.certifications) as f64 * weights.certifications;
    raw_total += breakdown.certifications;

    breakdown.skills_match = skills_match_count(&record.skills) as f64 * weights.skills_match;
    raw_total += breakdown.skills_match;

    if let Some(score) = record.coding_test_score {
        let contribution = score / ASSESSMENT_SCALE_MAX * weights.coding_test_score;
        breakdown.coding_test_score = Some(contribution);
        raw_total += contribution;
    }

    if let Some(score) = record.interview_score {
        let contribution = score / ASSESSMENT_SCALE_MAX * weights.interview_score;
        breakdown.interview_score = Some(contribution);
        raw_total += contribution;
    }

    (breakdown, raw_total)
}

/// Raw total an idealized applicant reaches under `weights`.
///
/// Terms are summed in the same order as [`score_record`] so a maximal
/// applicant lands exactly on the ceiling. Assessment weights enter unscaled
/// because a perfect 0-100 score contributes `weight * 1`.
pub fn heuristic_max(weights: &AttributeWeights) -> f64 {
    let mut ceiling = 0.0;
    ceiling += f64::from(top_education_score()) * weights.education_level;
    ceiling += MAX_PLAUSIBLE_EXPERIENCE_YEARS * weights.years_experience;
    ceiling += MAX_PLAUSIBLE_EXPERIENCE_YEARS * weights.role_relevant_experience;
    ceiling += MAX_PLAUSIBLE_CERTIFICATIONS * weights.certifications;
    ceiling += REQUIRED_SKILLS.len() as f64 * weights.skills_match;
    ceiling += weights.coding_test_score;
    ceiling += weights.interview_score;
    ceiling
}

/// Number of certification entries. Repeated entries each count.
pub fn certification_count(certifications: &[String]) -> usize {
    certifications
        .iter()
        .filter(|name| !name.trim().is_empty())
        .count()
}

/// Size of the overlap between applicant skills and [`REQUIRED_SKILLS`].
pub fn skills_match_count(skills: &[String]) -> usize {
    let required: BTreeSet<String> = REQUIRED_SKILLS
        .iter()
        .map(|skill| skill.trim().to_lowercase())
        .collect();

    skills
        .iter()
        .map(|skill| skill.trim().to_lowercase())
        .collect::<BTreeSet<_>>()
        .intersection(&required)
        .count()
}
