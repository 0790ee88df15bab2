//! Environment-driven process configuration.

use std::net::SocketAddr;

use thiserror::Error;

use showroom_observability::LogFormat;
use showroom_products::DuplicateIdPolicy;

pub const ENV_BIND_ADDR: &str = "SHOWROOM_BIND_ADDR";
pub const ENV_DUPLICATE_IDS: &str = "SHOWROOM_DUPLICATE_IDS";
pub const ENV_SEED: &str = "SHOWROOM_SEED";
pub const ENV_LOG_FORMAT: &str = "SHOWROOM_LOG_FORMAT";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    fn invalid(var: &'static str, value: &str, reason: impl ToString) -> Self {
        Self::Invalid {
            var,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Runtime settings for the API process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub duplicate_ids: DuplicateIdPolicy,
    /// Start with the five catalog products instead of an empty store.
    pub seed: bool,
    pub log_format: LogFormat,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            duplicate_ids: DuplicateIdPolicy::Allow,
            seed: true,
            log_format: LogFormat::Json,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_raw = lookup(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::invalid(ENV_BIND_ADDR, &bind_raw, e))?;

        let duplicate_ids = match lookup(ENV_DUPLICATE_IDS) {
            None => DuplicateIdPolicy::default(),
            Some(raw) => parse_duplicate_policy(&raw)?,
        };

        let seed = match lookup(ENV_SEED) {
            None => true,
            Some(raw) => parse_bool(ENV_SEED, &raw)?,
        };

        let log_format = match lookup(ENV_LOG_FORMAT) {
            None => LogFormat::default(),
            Some(raw) => raw
                .parse::<LogFormat>()
                .map_err(|e| ConfigError::invalid(ENV_LOG_FORMAT, &raw, e))?,
        };

        Ok(Self {
            bind_addr,
            duplicate_ids,
            seed,
            log_format,
        })
    }
}

fn parse_duplicate_policy(raw: &str) -> Result<DuplicateIdPolicy, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "allow" => Ok(DuplicateIdPolicy::Allow),
        "reject" => Ok(DuplicateIdPolicy::Reject),
        _ => Err(ConfigError::invalid(
            ENV_DUPLICATE_IDS,
            raw,
            "expected \"allow\" or \"reject\"",
        )),
    }
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::invalid(var, raw, "expected a boolean")),
    }
}
