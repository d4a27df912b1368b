use serde_json::{json, Map, Value};

use crate::scoring::{ApplicantRecord, AttributeWeights, ScoringEngine};

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::default()
}

pub(super) fn weights() -> AttributeWeights {
    AttributeWeights::default()
}

pub(super) fn attributes(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an attribute object, got {other}"),
    }
}

/// Reference applicant from the hiring rubric walkthrough.
pub(super) fn reference_attributes() -> Map<String, Value> {
    attributes(json!({
        "name": "John Smith",
        "education_level": "bachelor",
        "years_experience": 5,
        "role_relevant_experience_years": 4,
        "certifications": ["certA"],
        "skills": ["Python", "SQL", "algorithms"],
        "coding_test_score": 80,
        "interview_score": 75,
        "location": "CityA"
    }))
}

pub(super) fn reference_record() -> ApplicantRecord {
    ApplicantRecord::from_attributes(&reference_attributes()).expect("reference record parses")
}

pub(super) fn maximal_record() -> ApplicantRecord {
    ApplicantRecord {
        education_level: Some("phd".to_string()),
        years_experience: Some(30.0),
        role_relevant_experience: Some(30.0),
        certifications: (1..=10).map(|index| format!("cert-{index}")).collect(),
        skills: crate::scoring::tables::REQUIRED_SKILLS
            .iter()
            .map(|skill| skill.to_string())
            .collect(),
        coding_test_score: Some(100.0),
        interview_score: Some(100.0),
        ..ApplicantRecord::default()
    }
}

pub(super) fn phd_record(years: f64, role_years: f64, certifications: usize) -> ApplicantRecord {
    ApplicantRecord {
        education_level: Some("phd".to_string()),
        years_experience: Some(years),
        role_relevant_experience: Some(role_years),
        certifications: (0..certifications).map(|index| format!("cert-{index}")).collect(),
        ..ApplicantRecord::default()
    }
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
