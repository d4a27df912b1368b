//! Log output for the scoring CLI.
//!
//! Events are written to stderr so JSON results on stdout stay parseable.

use std::env;
use std::fmt;

use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

use crate::config::TelemetryConfig;

/// Variable whose directives replace the configured log level when set.
pub const FILTER_OVERRIDE_ENV: &str = "RUST_LOG";

#[derive(Debug)]
pub enum TelemetryError {
    /// A log filter could not be parsed. `origin` names the variable it came from.
    InvalidFilter {
        origin: &'static str,
        value: String,
        source: ParseError,
    },
    Install(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::InvalidFilter { origin, value, .. } => {
                write!(f, "{origin} value '{value}' is not a valid tracing filter")
            }
            TelemetryError::Install(err) => {
                write!(f, "could not install the log subscriber: {err}")
            }
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::InvalidFilter { source, .. } => Some(source),
            TelemetryError::Install(err) => Some(&**err),
        }
    }
}

/// Resolve the filter from an optional override and the configured level.
///
/// A blank override is ignored. A malformed one is an error rather than a
/// silent fallback, so a typo in `RUST_LOG` does not hide scoring events.
pub fn build_filter(
    config: &TelemetryConfig,
    override_directives: Option<&str>,
) -> Result<EnvFilter, TelemetryError> {
    let (origin, directives) = match override_directives.map(str::trim) {
        Some(directives) if !directives.is_empty() => (FILTER_OVERRIDE_ENV, directives),
        _ => ("APP_LOG_LEVEL", config.log_level.trim()),
    };

    EnvFilter::try_new(directives).map_err(|source| TelemetryError::InvalidFilter {
        origin,
        value: directives.to_string(),
        source,
    })
}

/// Install the global subscriber for the scoring CLI.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let override_directives = env::var(FILTER_OVERRIDE_ENV).ok();
    let filter = build_filter(config, override_directives.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Install)
}
