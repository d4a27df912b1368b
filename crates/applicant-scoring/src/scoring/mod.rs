//! Explainable applicant scoring.
//!
//! A record is reduced to per-attribute contributions, summed, normalized
//! against the best score the current weights allow, and classified into a
//! decision band. Proxy fields are reported alongside the result but never
//! influence it.

mod config;
mod domain;
mod error;
mod explain;
mod policy;
mod proxies;
mod record;
mod rules;
pub mod tables;

#[cfg(test)]
mod tests;

pub use config::AttributeWeights;
pub use domain::{ApplicantRecord, Attribute, Decision, ScoreBreakdown, ScoringResult};
pub use error::ScoringError;
pub use explain::explain;
pub use policy::{classify, normalize, MIN_NORMALIZATION_CEILING};
pub use proxies::detect_proxies;
pub use rules::{certification_count, heuristic_max, skills_match_count};

use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Stateless evaluator holding a validated weight configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoringEngine {
    weights: AttributeWeights,
}

impl ScoringEngine {
    pub fn new(weights: AttributeWeights) -> Result<Self, ScoringError> {
        weights.validate()?;
        Ok(Self { weights })
    }

    pub fn weights(&self) -> &AttributeWeights {
        &self.weights
    }

    pub fn score(&self, record: &ApplicantRecord) -> ScoringResult {
        evaluate(record, &self.weights)
    }

    /// Parse and score an attribute bag; parsing fails before any scoring runs.
    pub fn score_attributes(
        &self,
        attributes: &Map<String, Value>,
    ) -> Result<ScoringResult, ScoringError> {
        let record = ApplicantRecord::from_attributes(attributes)?;
        Ok(self.score(&record))
    }
}

/// Score a record under `weights`.
///
/// Weights are validated first; a negative or non-finite weight is rejected
/// with [`ScoringError::InvalidWeight`] before any contribution is computed.
pub fn score_applicant(
    record: &ApplicantRecord,
    weights: &AttributeWeights,
) -> Result<ScoringResult, ScoringError> {
    weights.validate()?;
    Ok(evaluate(record, weights))
}

fn evaluate(record: &ApplicantRecord, weights: &AttributeWeights) -> ScoringResult {
    let (breakdown, raw_total) = rules::score_record(record, weights);

    let ceiling = heuristic_max(weights).max(MIN_NORMALIZATION_CEILING);
    let total_score = normalize(raw_total, 0.0, ceiling);
    let decision = classify(total_score);
    let explanation = explain(total_score, &breakdown);
    let proxies_flagged = detect_proxies(record);

    debug!(
        raw_total,
        ceiling,
        total_score,
        decision = decision.label(),
        "applicant scored"
    );
    if !proxies_flagged.is_empty() {
        warn!(proxies = ?proxies_flagged, "proxy fields present; route to human review");
    }

    ScoringResult {
        total_score,
        raw_total,
        breakdown,
        decision,
        explanation,
        proxies_flagged,
    }
}
