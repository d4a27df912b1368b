//! Rule-based loan approval over objective financial criteria.
//!
//! Only financial figures are inputs; names and demographic attributes cannot
//! reach the decision.

use serde::{Deserialize, Serialize};
use tracing::debug;


/// Approval thresholds. Ratios are percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanCriteria {
    pub minimum_credit_score: u16,
    pub minimum_annual_income: f64,
    pub maximum_debt_to_income: f64,
    pub minimum_employment_years: f64,
    pub maximum_loan_to_income: f64,
}

impl Default for LoanCriteria {
    fn default() -> Self {
        Self {
            minimum_credit_score: 640,
            minimum_annual_income: 30_000.0,
            maximum_debt_to_income: 43.0,
            minimum_employment_years: 2.0,
            maximum_loan_to_income: 400.0,
        }
    }
}

/// Financial profile submitted for a loan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanApplication {
    pub credit_score: u16,
    pub annual_income: f64,
    pub debt: f64,
    pub loan_amount: f64,
    pub employment_years: f64,
}

/// Figures the decision was based on, kept for adverse action notices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanMetrics {
    pub credit_score: u16,
    pub annual_income: f64,
    /// Debt-to-income percentage; infinite when income is zero.
    pub debt_to_income: f64,
    /// Loan-to-income percentage; infinite when income is zero.
    pub loan_to_income: f64,
    pub employment_years: f64,
}

/// Enumerates lawful denial reasons in the order they are checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanDenialReason {
    CreditScoreBelowMinimum { required: u16, actual: u16 },
    IncomeBelowMinimum { required: f64, actual: f64 },
    DebtToIncomeTooHigh { maximum: f64, actual: f64 },
    InsufficientEmploymentHistory { required: f64, actual: f64 },
    LoanTooHighForIncome { maximum: f64, actual: f64 },
}

impl LoanDenialReason {
    pub fn summary(&self) -> String {
        match self {
            LoanDenialReason::CreditScoreBelowMinimum { required, actual } => {
                format!("credit score {actual} below minimum requirement {required}")
            }
            LoanDenialReason::IncomeBelowMinimum { required, actual } => {
                format!("annual income {actual:.2} below minimum requirement {required:.2}")
            }
            LoanDenialReason::DebtToIncomeTooHigh { maximum, actual } => {
                format!("debt-to-income ratio {actual:.2}% exceeds {maximum:.2}%")
            }
            LoanDenialReason::InsufficientEmploymentHistory { required, actual } => {
                format!("employment history {actual:.1} years below required {required:.1}")
            }
            LoanDenialReason::LoanTooHighForIncome { maximum, actual } => format!(
                "loan amount {actual:.2}% of income exceeds {maximum:.2}%"
            ),
        }
    }
}

/// Adjudication outcome for a loan application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanAssessment {
    pub approved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub denial: Option<LoanDenialReason>,
    pub metrics: LoanMetrics,
}

impl LoanAssessment {
    pub fn summary(&self) -> String {
        match &self.denial {
            None => "application approved based on financial criteria".to_string(),
            Some(reason) => format!("denied: {}", reason.summary()),
        }
    }
}

/// Unrounded ratios the thresholds are compared against.
#[derive(Debug, Clone, Copy)]
struct IncomeRatios {
    debt_to_income: f64,
    loan_to_income: f64,
}

impl IncomeRatios {
    fn of(application: &LoanApplication) -> Self {
        let income = application.annual_income;
        // Monthly figures cancel out; the ratio is the same on an annual basis.
        let percent_of_income = |amount: f64| {
            if income > 0.0 {
                amount / income * 100.0
            } else {
                f64::INFINITY
            }
        };

        Self {
            debt_to_income: percent_of_income(application.debt),
            loan_to_income: percent_of_income(application.loan_amount),
        }
    }
}

impl LoanCriteria {
    /// Check the application against every threshold in order.
    ///
    /// Thresholds see the exact ratios; only the reported metrics are rounded
    /// to two decimals.
    pub fn evaluate(&self, application: &LoanApplication) -> LoanAssessment {
        let ratios = IncomeRatios::of(application);
        let denial = self.first_failure(application, ratios);
        let metrics = LoanMetrics {
            credit_score: application.credit_score,
            annual_income: application.annual_income,
            debt_to_income: round_cents(ratios.debt_to_income),
            loan_to_income: round_cents(ratios.loan_to_income),
            employment_years: application.employment_years,
        };

        debug!(
            credit_score = metrics.credit_score,
            debt_to_income = ratios.debt_to_income,
            loan_to_income = ratios.loan_to_income,
            approved = denial.is_none(),
            "loan application evaluated"
        );

        LoanAssessment {
            approved: denial.is_none(),
            denial,
            metrics,
        }
    }

    fn first_failure(
        &self,
        application: &LoanApplication,
        ratios: IncomeRatios,
    ) -> Option<LoanDenialReason> {
        if application.credit_score < self.minimum_credit_score {
            return Some(LoanDenialReason::CreditScoreBelowMinimum {
                required: self.minimum_credit_score,
                actual: application.credit_score,
            });
        }

        if application.annual_income < self.minimum_annual_income {
            return Some(LoanDenialReason::IncomeBelowMinimum {
                required: self.minimum_annual_income,
                actual: application.annual_income,
            });
        }

        if ratios.debt_to_income > self.maximum_debt_to_income {
            return Some(LoanDenialReason::DebtToIncomeTooHigh {
                maximum: self.maximum_debt_to_income,
                actual: ratios.debt_to_income,
            });
        }

        if application.employment_years < self.minimum_employment_years {
            return Some(LoanDenialReason::InsufficientEmploymentHistory {
                required: self.minimum_employment_years,
                actual: application.employment_years,
            });
        }

        if ratios.loan_to_income > self.maximum_loan_to_income {
            return Some(LoanDenialReason::LoanTooHighForIncome {
                maximum: self.maximum_loan_to_income,
                actual: ratios.loan_to_income,
            });
        }

        None
    }
}

fn round_cents(value: f64) -> f64 {
    if value.is_finite() {
        (value * 100.0).round() / 100.0
    } else {
        value
    }
}
