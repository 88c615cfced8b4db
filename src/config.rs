//! # Startup Configuration
//!
//! Settings are read once from the process environment (a `.env` file is
//! loaded first by the binary). The parser takes a lookup closure so tests
//! can feed it a fixed map instead of touching the real environment.

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use thiserror::Error;

use crate::utils::constant::{DEFAULT_HOST, DEFAULT_PORT};

/// Port variables, checked in order. The first one set wins.
const PORT_VARS: [&str; 3] = ["APP_PORT", "PORT", "SERVER_PORT"];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid port `{value}` in `{var}`")]
    InvalidPort { var: &'static str, value: String },

    #[error("invalid host `{0}` in `APP_HOST`")]
    InvalidHost(String),

    #[error("invalid log format `{0}`, expected `pretty`, `json` or `bunyan`")]
    InvalidLogFormat(String),
}

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human readable, coloured output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
    /// Bunyan-compatible JSON records.
    Bunyan,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            "bunyan" => Ok(Self::Bunyan),
            _ => Err(ConfigError::InvalidLogFormat(s.to_string())),
        }
    }
}

/// Immutable settings for one process run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: IpAddr,
    pub port: u16,
    pub log_format: LogFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            log_format: LogFormat::default(),
        }
    }
}

impl Settings {
    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads settings through `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(host) = lookup("APP_HOST") {
            settings.host = host
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidHost(host))?;
        }

        if let Some((var, value)) = PORT_VARS
            .iter()
            .find_map(|&var| lookup(var).map(|value| (var, value)))
        {
            settings.port = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort { var, value })?;
        }

        if let Some(format) = lookup("APP_LOG_FORMAT") {
            settings.log_format = format.parse()?;
        }

        Ok(settings)
    }

    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
