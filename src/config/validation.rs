//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, prefixes absolute)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::AppConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("server.bind_address must not be empty")]
    EmptyBindAddress,

    #[error("server.request_timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("api.prefix `{0}` must start with `/`")]
    RelativeApiPrefix(String),

    #[error("registry.{field} contains an empty entry")]
    EmptyEntry { field: &'static str },
}

pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.bind_address.trim().is_empty() {
        errors.push(ValidationError::EmptyBindAddress);
    }
    if config.server.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }
    if !config.api.prefix.starts_with('/') {
        errors.push(ValidationError::RelativeApiPrefix(config.api.prefix.clone()));
    }
    if config.registry.required_tags.iter().any(|t| t.trim().is_empty()) {
        errors.push(ValidationError::EmptyEntry { field: "required_tags" });
    }
    if config.registry.required_metadata.iter().any(|k| k.trim().is_empty()) {
        errors.push(ValidationError::EmptyEntry { field: "required_metadata" });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = AppConfig::default();
        config.server.bind_address = " ".into();
        config.registry.required_tags = vec!["ok".into(), "".into()];
        config.registry.required_metadata = vec![" ".into()];

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyBindAddress,
                ValidationError::EmptyEntry { field: "required_tags" },
                ValidationError::EmptyEntry { field: "required_metadata" },
            ]
        );
    }
}
