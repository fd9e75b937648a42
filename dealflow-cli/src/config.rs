//! CLI configuration
//!
//! Settings are layered, later sources winning: `config.json` in the
//! platform config dir, then `.env`, then the `DEALFLOW_*` environment
//! variables, then command-line flags.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

pub const URL_VAR: &str = "DEALFLOW_API_URL";
pub const TOKEN_VAR: &str = "DEALFLOW_API_TOKEN";
pub const TIMEOUT_VAR: &str = "DEALFLOW_TIMEOUT_SECS";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Partially known settings, as read from one source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: Option<String>,
    pub api_token: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Settings with every required value present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_url: String,
    pub api_token: String,
    pub timeout: Duration,
}

impl Config {
    /// Reads a JSON config file. A missing file is an empty config.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("No config file at {}", path.display());
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads the `DEALFLOW_*` variables through `lookup`.
    pub fn from_env(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let timeout_secs = match lookup(TIMEOUT_VAR) {
            Some(raw) => Some(raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: TIMEOUT_VAR,
                value: raw,
            })?),
            None => None,
        };

        Ok(Self {
            api_url: lookup(URL_VAR),
            api_token: lookup(TOKEN_VAR),
            timeout_secs,
        })
    }

    /// Overlays `other` on `self`; values set in `other` win.
    pub fn merge(self, other: Config) -> Self {
        Self {
            api_url: non_empty(other.api_url).or(self.api_url),
            api_token: non_empty(other.api_token).or(self.api_token),
            timeout_secs: other.timeout_secs.or(self.timeout_secs),
        }
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Checks that every required value is present.
    pub fn resolve(self) -> Result<Settings, ConfigError> {
        let api_url = non_empty(self.api_url).ok_or(ConfigError::Missing {
            key: "api_url",
            env: URL_VAR,
        })?;
        let api_token = non_empty(self.api_token).ok_or(ConfigError::Missing {
            key: "api_token",
            env: TOKEN_VAR,
        })?;
        let timeout = self
            .timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        Ok(Settings {
            api_url,
            api_token,
            timeout,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Loads every source in order, `flags` last.
pub fn load(config_file: Option<&Path>, flags: Config) -> Result<Settings, ConfigError> {
    let file = match config_file {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    if let Ok(path) = dotenvy::dotenv() {
        log::debug!("Loaded environment from {}", path.display());
    }
    let env = Config::from_env(|key| std::env::var(key).ok())?;

    file.merge(env).merge(flags).resolve()
}
