//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Config file name for a deployment environment. Unknown values map to dev.
pub fn config_file_for_env(env: &str) -> &'static str {
    match env.to_ascii_lowercase().as_str() {
        "prod" | "production" => "config.prod.toml",
        "test" | "testing" => "config.test.toml",
        _ => "config.dev.toml",
    }
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Load the config file for `env` from `dir`, or defaults if it does not exist.
pub fn load_for_env(dir: &Path, env: &str) -> Result<AppConfig, ConfigError> {
    let path = dir.join(config_file_for_env(env));
    if !path.is_file() {
        tracing::warn!(path = %path.display(), "Config file not found, using defaults");
        return Ok(AppConfig::default());
    }
    tracing::info!(path = %path.display(), "Loading configuration");
    load_config(&path)
}
