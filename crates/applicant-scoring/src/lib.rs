//! Explainable, tunable applicant scoring.
//!
//! [`scoring`] holds the rubric engine, [`loan`] the financial approval rules,
//! and [`audit`] the counterfactual parity checks run over both.

pub mod audit;
pub mod config;
pub mod error;
pub mod loan;
pub mod scoring;
pub mod telemetry;

pub use scoring::{
    score_applicant, ApplicantRecord, AttributeWeights, Decision, ScoreBreakdown, ScoringEngine,
    ScoringError, ScoringResult,
};
