use std::env;
use std::net::SocketAddr;

use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

/// Runtime settings, read from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// Upper bound on live assessment sessions held in memory.
    pub max_sessions: usize,
    /// Serve through the Lambda runtime instead of a TCP listener.
    pub lambda: bool,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Build from an arbitrary variable source. Unset variables take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = parse_or(
            &lookup,
            "MINDCARE_BIND_ADDR",
            DEFAULT_BIND_ADDR,
            |v| v.parse().ok(),
        )?;
        let max_sessions = parse_or(
            &lookup,
            "MINDCARE_MAX_SESSIONS",
            &DEFAULT_MAX_SESSIONS.to_string(),
            |v| v.parse().ok().filter(|n: &usize| *n > 0),
        )?;
        let lambda = parse_or(&lookup, "MINDCARE_LAMBDA", "false", |v| {
            match v.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => Some(true),
                "0" | "false" | "no" | "" => Some(false),
                _ => None,
            }
        })?;

        Ok(ApiConfig {
            bind_addr,
            max_sessions,
            lambda,
        })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            max_sessions: DEFAULT_MAX_SESSIONS,
            lambda: false,
        }
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T, ConfigError> {
    let value = lookup(var).unwrap_or_else(|| default.to_string());
    parse(value.trim()).ok_or(ConfigError::Invalid { var, value })
}
