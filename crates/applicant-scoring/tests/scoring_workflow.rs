//! End-to-end scenarios through the public crate surface: attribute bags in,
//! serialized results out.

use applicant_scoring::audit::{audit_counterfactuals, demo_applicants, Counterfactual};
use applicant_scoring::scoring::{heuristic_max, tables::REQUIRED_SKILLS};
use applicant_scoring::{
    score_applicant, ApplicantRecord, AttributeWeights, Decision, ScoringEngine, ScoringError,
};
use serde_json::{json, Map, Value};

fn bag(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

#[test]
fn maximal_applicant_from_json_is_hired_at_full_score() {
    let attributes = bag(json!({
        "education_level": "PhD",
        "years_experience": 30,
        "role_relevant_experience": 30,
        "certifications": ["c1", "c2", "c3", "c4", "c5", "c6", "c7", "c8", "c9", "c10"],
        "skills": REQUIRED_SKILLS,
        "coding_test_score": 100,
        "interview_score": 100
    }));

    let result = ScoringEngine::default()
        .score_attributes(&attributes)
        .expect("scores");

    assert_eq!(result.total_score, 100.0);
    assert_eq!(result.decision, Decision::Hire);
    assert_eq!(result.raw_total, heuristic_max(&AttributeWeights::default()));
}

#[test]
fn custom_weights_from_json_reshape_the_ceiling() {
    let weights: AttributeWeights =
        serde_json::from_value(json!({ "skills_match": 20, "coding_test_score": 50 }))
            .expect("weights parse");
    let engine = ScoringEngine::new(weights).expect("valid weights");

    // Ceiling = 5 skills * 20 + 50 = 150; applicant earns 3 * 20 + 0.9 * 50 = 105.
    let result = engine
        .score_attributes(&bag(json!({
            "education_level": "phd",
            "years_experience": 12,
            "skills": ["python", "sql", "algorithms", "rust"],
            "coding_test_score": 90
        })))
        .expect("scores");

    assert!((result.raw_total - 105.0).abs() < 1e-9);
    assert!((result.total_score - 70.0).abs() < 1e-9);
    assert_eq!(result.decision, Decision::Interview);
    assert_eq!(result.breakdown.education_level, 0.0);
    assert_eq!(result.breakdown.interview_score, None);
}

#[test]
fn serialized_result_exposes_the_documented_shape() {
    let applicants = demo_applicants();
    let result = ScoringEngine::default()
        .score_attributes(&applicants[1])
        .expect("scores");
    let json = serde_json::to_value(&result).expect("serializes");

    for key in [
        "total_score",
        "raw_total",
        "breakdown",
        "decision",
        "explanation",
        "proxies_flagged",
    ] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    assert_eq!(json["proxies_flagged"], json!(["location"]));
    assert!(json["explanation"]
        .as_str()
        .expect("string")
        .starts_with("Applicant scored "));
}

#[test]
fn bad_input_is_an_error_not_a_low_score() {
    let engine = ScoringEngine::default();
    let outcome = engine.score_attributes(&bag(json!({
        "education_level": "master",
        "coding_test_score": "ninety"
    })));

    match outcome {
        Err(ScoringError::InvalidNumericField { field, value }) => {
            assert_eq!(field, "coding_test_score");
            assert!(value.contains("ninety"));
        }
        other => panic!("expected invalid numeric field, got {other:?}"),
    }
}

#[test]
fn engine_is_shareable_across_threads() {
    let engine = std::sync::Arc::new(ScoringEngine::default());
    let record = ApplicantRecord::from_attributes(&demo_applicants()[0]).expect("parses");
    let expected = engine.score(&record);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = engine.clone();
            let record = record.clone();
            std::thread::spawn(move || engine.score(&record))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("thread completes"), expected);
    }
}

#[test]
fn demo_identity_twins_pass_the_parity_audit() {
    let applicants = demo_applicants();
    let variants: Vec<_> = applicants[..2]
        .iter()
        .map(|applicant| {
            let identity: Map<String, Value> = applicant
                .iter()
                .filter(|(key, _)| matches!(key.as_str(), "name" | "gender" | "location"))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect();
            let label = applicant["name"].as_str().unwrap_or("unnamed").to_string();
            Counterfactual::new(label, identity)
        })
        .collect();

    let report = audit_counterfactuals(&ScoringEngine::default(), &applicants[0], &variants)
        .expect("audit runs");
    assert!(report.is_consistent());
}

#[test]
fn free_function_matches_engine() {
    let record = ApplicantRecord::from_attributes(&demo_applicants()[2]).expect("parses");
    assert_eq!(
        score_applicant(&record, &AttributeWeights::default()).expect("default weights are valid"),
        ScoringEngine::default().score(&record)
    );
}
