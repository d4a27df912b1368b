use std::env;
use std::fmt;

use crate::scoring::{Attribute, AttributeWeights, ScoringError};

/// Prefix for per-attribute weight overrides, e.g. `SCORING_WEIGHT_SKILLS_MATCH`.
pub const WEIGHT_ENV_PREFIX: &str = "SCORING_WEIGHT_";

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub scoring: ScoringConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let mut weights = AttributeWeights::default();
        for attribute in Attribute::ALL {
            let variable = weight_variable(attribute);
            if let Ok(raw) = env::var(&variable) {
                let weight = raw
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| ConfigError::InvalidWeight {
                        variable: variable.clone(),
                        value: raw.clone(),
                    })?;
                weights.set(attribute, weight);
            }
        }
        weights.validate().map_err(ConfigError::Weights)?;

        Ok(Self {
            environment,
            scoring: ScoringConfig { weights },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Name of the environment variable overriding `attribute`'s weight.
pub fn weight_variable(attribute: Attribute) -> String {
    format!(
        "{WEIGHT_ENV_PREFIX}{}",
        attribute.label().to_ascii_uppercase()
    )
}

/// Weight configuration handed to the scoring engine.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub weights: AttributeWeights,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidWeight { variable: String, value: String },
    Weights(ScoringError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidWeight { variable, value } => {
                write!(f, "{variable} must be a number, found '{value}'")
            }
            ConfigError::Weights(err) => write!(f, "invalid scoring weights: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidWeight { .. } => None,
            ConfigError::Weights(err) => Some(err),
        }
    }
}
