//! CLI error types

use std::path::PathBuf;

use thiserror::Error;

/// Configuration could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },

    #[error("missing {key}: set it in config.json, {env} or on the command line")]
    Missing { key: &'static str, env: &'static str },
}

/// Error type for CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("API error: {0}")]
    Api(#[from] dealflow_lib::error::Error),

    #[error("output error: {0}")]
    Output(#[from] serde_json::Error),
}
