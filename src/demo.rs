use std::fs;
use std::path::PathBuf;

use applicant_scoring::audit::{
    approval_rates, audit_counterfactuals, demo_applicants, Counterfactual,
};
use applicant_scoring::config::AppConfig;
use applicant_scoring::error::AppError;
use applicant_scoring::loan::{LoanApplication, LoanCriteria};
use applicant_scoring::{ApplicantRecord, AttributeWeights, ScoringEngine};
use clap::Args;
use serde::Serialize;
use serde_json::{json, Map, Value};
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file holding one applicant object or an array of them
    #[arg(long)]
    record: PathBuf,
    /// JSON file with weight overrides; omitted weights count as zero
    #[arg(long)]
    weights: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct LoanArgs {
    #[arg(long)]
    credit_score: u16,
    #[arg(long)]
    annual_income: f64,
    #[arg(long)]
    debt: f64,
    #[arg(long)]
    loan_amount: f64,
    #[arg(long)]
    employment_years: f64,
}

#[derive(Debug, Serialize)]
struct DemoEntry {
    name: String,
    decision: &'static str,
    total_score: f64,
    proxies_flagged: Vec<String>,
    explanation: String,
}

pub(crate) fn run_score(args: ScoreArgs, config: &AppConfig) -> Result<(), AppError> {
    let weights = match &args.weights {
        Some(path) => serde_json::from_str::<AttributeWeights>(&fs::read_to_string(path)?)?,
        None => config.scoring.weights,
    };
    let engine = ScoringEngine::new(weights)?;

    let document: Value = serde_json::from_str(&fs::read_to_string(&args.record)?)?;
    let records = match &document {
        Value::Array(items) => items.iter().collect::<Vec<_>>(),
        single => vec![single],
    };

    // Parse every record first so one bad entry fails the batch before output.
    let parsed = records
        .into_iter()
        .map(ApplicantRecord::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    let results: Vec<_> = parsed.iter().map(|record| engine.score(record)).collect();

    info!(records = results.len(), "scored applicant records");
    print_json(&results)
}

pub(crate) fn run_loan(args: LoanArgs) -> Result<(), AppError> {
    let assessment = LoanCriteria::default().evaluate(&LoanApplication {
        credit_score: args.credit_score,
        annual_income: args.annual_income,
        debt: args.debt,
        loan_amount: args.loan_amount,
        employment_years: args.employment_years,
    });

    print_json(&json!({
        "approved": assessment.approved,
        "reason": assessment.summary(),
        "metrics": assessment.metrics,
    }))
}

pub(crate) fn run_demo(config: &AppConfig) -> Result<(), AppError> {
    let engine = ScoringEngine::new(config.scoring.weights)?;
    let applicants = demo_applicants();

    let mut entries = Vec::with_capacity(applicants.len());
    for applicant in &applicants {
        let result = engine.score_attributes(applicant)?;
        entries.push(DemoEntry {
            name: display_name(applicant),
            decision: result.decision.label(),
            total_score: (result.total_score * 100.0).round() / 100.0,
            proxies_flagged: result.proxies_flagged,
            explanation: result.explanation,
        });
    }

    let variants: Vec<_> = applicants
        .iter()
        .take(2)
        .map(|applicant| Counterfactual::new(display_name(applicant), identity_fields(applicant)))
        .collect();
    let parity = audit_counterfactuals(&engine, &applicants[0], &variants)?;

    let criteria = LoanCriteria::default();
    let profile = LoanApplication {
        credit_score: 700,
        annual_income: 60_000.0,
        debt: 20_000.0,
        loan_amount: 200_000.0,
        employment_years: 5.0,
    };
    let groups = ["Male", "Female", "Male", "Female", "Male", "Female"];
    let assessments: Vec<_> = groups
        .iter()
        .map(|group| (*group, criteria.evaluate(&profile)))
        .collect();
    let rates = approval_rates(
        assessments
            .iter()
            .map(|(group, assessment)| (*group, assessment)),
    );

    print_json(&json!({
        "applicants": entries,
        "parity": {
            "consistent": parity.is_consistent(),
            "variants": parity.variants,
        },
        "loan_approval_rates": rates,
    }))
}

fn display_name(applicant: &Map<String, Value>) -> String {
    applicant
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or("anonymous")
        .to_string()
}

fn identity_fields(applicant: &Map<String, Value>) -> Map<String, Value> {
    applicant
        .iter()
        .filter(|(key, _)| matches!(key.as_str(), "name" | "gender" | "location"))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
