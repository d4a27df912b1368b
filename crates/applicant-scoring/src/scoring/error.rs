use super::domain::Attribute;

/// Input violations that prevent an evaluation from producing a result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("field `{field}` must be a number, found {value}")]
    InvalidNumericField { field: String, value: String },
    #[error("field `{field}` is malformed: expected {expected}")]
    MalformedField {
        field: String,
        expected: &'static str,
    },
    #[error("weight for `{}` must be a non-negative finite number, found {value}", .attribute.label())]
    InvalidWeight { attribute: Attribute, value: f64 },
}

impl ScoringError {
    pub(crate) fn numeric(field: &str, value: impl ToString) -> Self {
        ScoringError::InvalidNumericField {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    pub(crate) fn malformed(field: &str, expected: &'static str) -> Self {
        ScoringError::MalformedField {
            field: field.to_string(),
            expected,
        }
    }
}
