//! Counterfactual parity checks.
//!
//! Identical profiles that differ only in identity or proxy attributes must
//! receive identical outcomes. These helpers score such variants side by side
//! so a reviewer can spot any divergence.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::warn;

use crate::loan::LoanAssessment;
use crate::scoring::{Decision, ScoringEngine, ScoringError};

/// Named overlay applied on top of a base attribute bag.
#[derive(Debug, Clone, PartialEq)]
pub struct Counterfactual {
    pub label: String,
    pub overlay: Map<String, Value>,
}

impl Counterfactual {
    pub fn new(label: impl Into<String>, overlay: Map<String, Value>) -> Self {
        Self {
            label: label.into(),
            overlay,
        }
    }
}

/// Outcome of one counterfactual variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantOutcome {
    pub label: String,
    pub raw_total: f64,
    pub total_score: f64,
    pub decision: Decision,
    pub proxies_flagged: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterfactualReport {
    pub variants: Vec<VariantOutcome>,
}

impl VariantOutcome {
    /// Same raw total, score and decision. Proxy flags may differ.
    pub fn same_outcome(&self, other: &VariantOutcome) -> bool {
        self.raw_total == other.raw_total
            && self.total_score == other.total_score
            && self.decision == other.decision
    }
}

impl CounterfactualReport {
    /// True when every variant received the same outcome as the first.
    pub fn is_consistent(&self) -> bool {
        self.divergent().is_empty()
    }

    /// Variants whose outcome differs from the first one.
    pub fn divergent(&self) -> Vec<&VariantOutcome> {
        let Some((first, rest)) = self.variants.split_first() else {
            return Vec::new();
        };
        rest.iter()
            .filter(|variant| !variant.same_outcome(first))
            .collect()
    }
}

/// Score `base` merged with each overlay. Overlay keys replace base keys.
///
/// The whole audit fails on the first variant that cannot be parsed.
pub fn audit_counterfactuals(
    engine: &ScoringEngine,
    base: &Map<String, Value>,
    variants: &[Counterfactual],
) -> Result<CounterfactualReport, ScoringError> {
    let mut outcomes = Vec::with_capacity(variants.len());

    for variant in variants {
        let mut attributes = base.clone();
        attributes.extend(
            variant
                .overlay
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );

        let result = engine.score_attributes(&attributes)?;
        outcomes.push(VariantOutcome {
            label: variant.label.clone(),
            raw_total: result.raw_total,
            total_score: result.total_score,
            decision: result.decision,
            proxies_flagged: result.proxies_flagged,
        });
    }

    let report = CounterfactualReport { variants: outcomes };
    if !report.is_consistent() {
        warn!(
            divergent = report.divergent().len(),
            "counterfactual variants received different outcomes"
        );
    }
    Ok(report)
}

/// Approval share per group, as a percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupApprovalRate {
    pub approved: usize,
    pub total: usize,
    pub rate: f64,
}

/// Tally loan approvals by group label, sorted by label.
pub fn approval_rates<'a, I>(assessments: I) -> BTreeMap<String, GroupApprovalRate>
where
    I: IntoIterator<Item = (&'a str, &'a LoanAssessment)>,
{
    let mut tallies: BTreeMap<String, (usize, usize)> = BTreeMap::new();
    for (group, assessment) in assessments {
        let entry = tallies.entry(group.to_string()).or_default();
        entry.1 += 1;
        if assessment.approved {
            entry.0 += 1;
        }
    }

    tallies
        .into_iter()
        .map(|(group, (approved, total))| {
            let rate = if total == 0 {
                0.0
            } else {
                approved as f64 / total as f64 * 100.0
            };
            (
                group,
                GroupApprovalRate {
                    approved,
                    total,
                    rate,
                },
            )
        })
        .collect()
}

/// Reference profiles used by the demo harness: two identical applicants that
/// differ only in name, gender and location, plus a weaker applicant.
pub fn demo_applicants() -> Vec<Map<String, Value>> {
    let profiles = [
        json!({
            "name": "John Smith",
            "gender": "Male",
            "education_level": "bachelor",
            "years_experience": 5,
            "role_relevant_experience_years": 4,
            "certifications": ["certA"],
            "skills": ["Python", "SQL", "algorithms"],
            "coding_test_score": 80,
            "interview_score": 75,
            "location": "CityA"
        }),
        json!({
            "name": "Maria Garcia",
            "gender": "Female",
            "education_level": "bachelor",
            "years_experience": 5,
            "role_relevant_experience_years": 4,
            "certifications": ["certA"],
            "skills": ["Python", "SQL", "algorithms"],
            "coding_test_score": 80,
            "interview_score": 75,
            "location": "CityB"
        }),
        json!({
            "name": "Alex Lee",
            "education_level": "associate",
            "years_experience": 2,
            "role_relevant_experience_years": 1,
            "certifications": [],
            "skills": ["python"],
            "coding_test_score": 55,
            "interview_score": 50
        }),
    ];

    profiles
        .into_iter()
        .filter_map(|profile| match profile {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loan::{LoanApplication, LoanCriteria};

    fn overlay(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn identity_overlays_do_not_change_outcomes() {
        let applicants = demo_applicants();
        let base = &applicants[0];
        let variants = vec![
            Counterfactual::new("john", overlay(json!({ "name": "John Smith" }))),
            Counterfactual::new(
                "maria",
                overlay(json!({ "name": "Maria Garcia", "gender": "Female", "location": "CityB" })),
            ),
            Counterfactual::new(
                "wei",
                overlay(json!({ "name": "Wei Chen", "zip_code": "94016" })),
            ),
        ];

        let report = audit_counterfactuals(&ScoringEngine::default(), base, &variants)
            .expect("audit runs");

        assert!(report.is_consistent());
        assert!(report.divergent().is_empty());
        assert_eq!(report.variants.len(), 3);
        assert_eq!(
            report.variants[2].proxies_flagged,
            vec!["location".to_string(), "zip_code".to_string()]
        );
    }

    #[test]
    fn rubric_overlays_are_reported_as_divergent() {
        let applicants = demo_applicants();
        let variants = vec![
            Counterfactual::new("baseline", Map::new()),
            Counterfactual::new("senior", overlay(json!({ "years_experience": 25 }))),
        ];

        let report =
            audit_counterfactuals(&ScoringEngine::default(), &applicants[0], &variants)
                .expect("audit runs");

        assert!(!report.is_consistent());
        let divergent = report.divergent();
        assert_eq!(divergent.len(), 1);
        assert_eq!(divergent[0].label, "senior");
    }

    #[test]
    fn score_only_difference_counts_as_divergent() {
        let outcome = |label: &str, total_score: f64| VariantOutcome {
            label: label.to_string(),
            raw_total: 139.01,
            total_score,
            decision: Decision::Reject,
            proxies_flagged: Vec::new(),
        };
        let report = CounterfactualReport {
            variants: vec![outcome("first", 32.13), outcome("second", 32.5)],
        };

        assert!(!report.is_consistent());
        let divergent = report.divergent();
        assert_eq!(divergent.len(), 1);
        assert_eq!(divergent[0].label, "second");
    }

    #[test]
    fn invalid_overlay_fails_the_audit() {
        let applicants = demo_applicants();
        let variants = vec![Counterfactual::new(
            "broken",
            overlay(json!({ "interview_score": "excellent" })),
        )];

        assert!(matches!(
            audit_counterfactuals(&ScoringEngine::default(), &applicants[0], &variants),
            Err(ScoringError::InvalidNumericField { .. })
        ));
    }

    #[test]
    fn demo_twins_share_a_score_and_the_third_trails() {
        let engine = ScoringEngine::default();
        let results: Vec<_> = demo_applicants()
            .iter()
            .map(|applicant| engine.score_attributes(applicant).expect("demo parses"))
            .collect();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].total_score, results[1].total_score);
        assert_eq!(results[0].decision, results[1].decision);
        assert!(results[2].total_score < results[0].total_score);
        assert!(results[2].proxies_flagged.is_empty());
    }

    #[test]
    fn approval_rates_group_identical_profiles() {
        let criteria = LoanCriteria::default();
        let approved = criteria.evaluate(&LoanApplication {
            credit_score: 700,
            annual_income: 60_000.0,
            debt: 20_000.0,
            loan_amount: 200_000.0,
            employment_years: 5.0,
        });
        let denied = criteria.evaluate(&LoanApplication {
            credit_score: 610,
            annual_income: 60_000.0,
            debt: 20_000.0,
            loan_amount: 200_000.0,
            employment_years: 5.0,
        });

        let rates = approval_rates([
            ("Female", &approved),
            ("Male", &approved),
            ("Male", &denied),
            ("Female", &approved),
        ]);

        assert_eq!(rates.len(), 2);
        assert_eq!(rates["Female"].rate, 100.0);
        assert_eq!(rates["Male"].approved, 1);
        assert_eq!(rates["Male"].total, 2);
        assert_eq!(rates["Male"].rate, 50.0);
    }
}
