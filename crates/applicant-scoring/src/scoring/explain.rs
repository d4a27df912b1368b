use super::domain::ScoreBreakdown;

/// Render the audit line attached to every result.
pub fn explain(total_score: f64, breakdown: &ScoreBreakdown) -> String {
    let components = breakdown
        .entries()
        .map(|(attribute, value)| format!("{}={:.2}", attribute.label(), value))
        .collect::<Vec<_>>()
        .join(", ");

    format!("Applicant scored {total_score:.1}/100. Breakdown: {components}")
}
