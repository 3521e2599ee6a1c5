//! Process configuration loaded from the environment.
//!
//! A `.env` file in the working directory is honoured when present.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use stockpulse_ai::{ForecastConfig, InsightAggregator};
use stockpulse_observability::LogFormat;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// When set, products and sales are read from Postgres.
    pub database_url: Option<String>,
    /// JSON seed for the in-memory catalog (used when no database is configured).
    pub seed_file: Option<PathBuf>,
    pub forecast: ForecastConfig,
    pub log_format: LogFormat,
    /// Upper bound on a single HTTP request, including the catalog reads.
    pub request_timeout: Duration,
}

impl AppConfig {
    /// Load `.env` (if any), then read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests pass a map instead of the process env).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = non_empty("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                key: "BIND_ADDR",
                message: e.to_string(),
            })?;

        let forecast = match non_empty("FORECAST_WINDOW") {
            Some(raw) => {
                let window = raw.trim().parse::<usize>().map_err(|e| ConfigError::Invalid {
                    key: "FORECAST_WINDOW",
                    message: e.to_string(),
                })?;
                let cfg = ForecastConfig::default().with_window(window);
                cfg.validate().map_err(|e| ConfigError::Invalid {
                    key: "FORECAST_WINDOW",
                    message: e.to_string(),
                })?;
                cfg
            }
            None => ForecastConfig::default(),
        };

        let log_format = match non_empty("LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("json") => LogFormat::Json,
            Some("pretty") => LogFormat::Pretty,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "LOG_FORMAT",
                    message: format!("expected `json` or `pretty`, got `{other}`"),
                });
            }
        };

        let request_timeout = match non_empty("REQUEST_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                Ok(_) => {
                    return Err(ConfigError::Invalid {
                        key: "REQUEST_TIMEOUT_SECS",
                        message: "must be >= 1".to_string(),
                    });
                }
                Err(e) => {
                    return Err(ConfigError::Invalid {
                        key: "REQUEST_TIMEOUT_SECS",
                        message: e.to_string(),
                    });
                }
            },
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        Ok(Self {
            bind_addr,
            database_url: non_empty("DATABASE_URL"),
            seed_file: non_empty("SEED_FILE").map(PathBuf::from),
            forecast,
            log_format,
            request_timeout,
        })
    }

    pub fn aggregator(&self) -> InsightAggregator {
        // `forecast` was validated when the config was built.
        InsightAggregator::new(self.forecast).unwrap_or_default()
    }
}
