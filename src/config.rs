//! Application configuration loaded from environment variables.

use std::ffi::OsString;
use std::fmt;
use std::net::{Ipv4Addr, SocketAddr};

use serde::Deserialize;

use crate::error::{GreeterError, Result};

/// Environment variable holding the deployment environment name.
pub const ENV_VAR: &str = "ENV";

/// Environment reported when [`ENV_VAR`] is unset.
pub const DEFAULT_ENVIRONMENT: &str = "dev";

/// Port the server listens on. Not configurable.
pub const BIND_PORT: u16 = 5000;

/// Address the server listens on: all interfaces, [`BIND_PORT`].
pub fn bind_addr() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::UNSPECIFIED, BIND_PORT))
}

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Application configuration loaded from environment variables.
///
/// `ENV` is not part of it: the root handler looks it up on every request
/// through [`crate::greeting::resolve_environment`].
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error) or a full filter directive.
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Log output format.
    #[serde(default)]
    pub log_format: LogFormat,

    /// Variables skipped while loading because their name or value is not
    /// valid unicode. Logged once the subscriber is installed.
    #[serde(skip)]
    pub skipped_vars: Vec<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rust_log: default_log_level(),
            log_format: LogFormat::default(),
            skipped_vars: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> std::result::Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars_os())
    }

    /// Build configuration from raw variable pairs.
    ///
    /// Pairs that are not valid unicode are skipped instead of aborting the
    /// load; their names end up in [`Config::skipped_vars`].
    pub fn from_vars<I>(vars: I) -> std::result::Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        let mut skipped_vars = Vec::new();
        let pairs: Vec<(String, String)> = vars
            .into_iter()
            .filter_map(|(key, value)| match (key.into_string(), value.into_string()) {
                (Ok(key), Ok(value)) => Some((key, value)),
                (Ok(key), Err(_)) => {
                    skipped_vars.push(key);
                    None
                }
                (Err(key), _) => {
                    skipped_vars.push(key.to_string_lossy().into_owned());
                    None
                }
            })
            .collect();

        let mut config: Self = envy::from_iter(pairs)?;
        config.skipped_vars = skipped_vars;
        Ok(config)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<()> {
        if self.rust_log.trim().is_empty() {
            return Err(GreeterError::InvalidConfig(
                "RUST_LOG must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
