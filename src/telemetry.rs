//! Tracing setup for hosts embedding the engine.
//!
//! Report generation logs under the `feedback_analytics` target; a bare level
//! in the configuration scopes that level to the engine while keeping every
//! other crate at `warn`, so a `debug` setting does not drown report logs in
//! dependency noise. Hosts that want full control pass an explicit directive
//! set instead.

use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    Filter {
        directives: String,
        source: ParseError,
    },
    Init(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::Filter { directives, .. } => {
                write!(f, "log filter '{directives}' does not parse")
            }
            TelemetryError::Init(err) => {
                write!(f, "failed to install the engine subscriber: {err}")
            }
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::Filter { source, .. } => Some(source),
            TelemetryError::Init(err) => Some(&**err),
        }
    }
}

/// A bare level becomes `warn,feedback_analytics=<level>`; anything carrying
/// explicit directives (a `,` or `=`) is taken verbatim.
fn filter_directives(log_level: &str) -> String {
    if log_level.contains('=') || log_level.contains(',') {
        log_level.to_string()
    } else {
        format!("warn,feedback_analytics={log_level}")
    }
}

/// Build the engine's log filter from the configured level.
pub fn report_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    let directives = filter_directives(&config.log_level);
    EnvFilter::try_new(&directives).map_err(|source| TelemetryError::Filter { directives, source })
}

/// Install the global tracing subscriber. Fails when another subscriber is
/// already installed, so a host calls this exactly once at startup.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = report_filter(config)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Init)
}
