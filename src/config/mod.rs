use crate::analytics::ranking::LEADERBOARD_SIZE;
use crate::analytics::text::{TEXT_SAMPLE_CAP, WORD_CLOUD_LIMIT};
use std::env;
use std::fmt;

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

/// Top-level configuration for a host embedding the engine.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub engine: EngineConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let engine = EngineConfig {
            text_sample_cap: usize_var("ANALYTICS_TEXT_SAMPLE_CAP", TEXT_SAMPLE_CAP)?,
            word_cloud_limit: usize_var("ANALYTICS_WORD_CLOUD_LIMIT", WORD_CLOUD_LIMIT)?,
            leaderboard_size: usize_var("ANALYTICS_LEADERBOARD_SIZE", LEADERBOARD_SIZE)?,
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            engine,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn usize_var(name: &'static str, default: usize) -> Result<usize, ConfigError> {
    match env::var(name) {
        Err(_) => Ok(default),
        Ok(raw) => raw
            .trim()
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidNumber { name, value: raw }),
    }
}

/// Bounded-size knobs of the engine. The defaults are the values the
/// reporting surfaces have always used; env overrides exist for load-testing
/// and small-tenant deployments.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Most recent free-text answers fed into one word cloud.
    pub text_sample_cap: usize,
    /// Stems one word cloud carries.
    pub word_cloud_limit: usize,
    /// Attendants on the dashboard leaderboard.
    pub leaderboard_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            text_sample_cap: TEXT_SAMPLE_CAP,
            word_cloud_limit: WORD_CLOUD_LIMIT,
            leaderboard_size: LEADERBOARD_SIZE,
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { name, value } => {
                write!(f, "{name} must be a non-negative integer, got '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
