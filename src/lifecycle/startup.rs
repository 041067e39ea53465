//! Startup orchestration.
//!
//! # Responsibilities
//! - Install the validator policy from configuration
//! - Run the single registration pass against the host
//! - Decide whether failed registrations are fatal
//!
//! # Design Decisions
//! - Fail fast only when `registry.fail_on_errors` is set; otherwise failed
//!   routes are logged and the service starts without them

use axum::Router;
use thiserror::Error;

use crate::api::declare_routes;
use crate::config::{AppConfig, ConfigError};
use crate::host::{AppHost, RouteHost};
use crate::registry::{
    self, AdminRouteValidator, MetadataValidator, PrefixValidator, RegistrationReport, RouteCategory,
    RouterRegistry, TagValidator,
};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{failed} of {total} routes failed to register")]
    RegistrationFailed { failed: usize, total: usize },

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
}

/// Register the validators the configuration asks for.
///
/// Safe to call more than once: repeated validator kinds are ignored.
pub fn install_validators(registry: &mut RouterRegistry, config: &AppConfig) {
    let policy = &config.registry;

    if policy.enforce_api_prefix {
        registry.register_validator(RouteCategory::API, PrefixValidator::new(config.api.prefix.as_str()));
    }
    if policy.require_admin_dependencies {
        registry.register_validator(RouteCategory::ADMIN, AdminRouteValidator::new());
    }
    if !policy.required_tags.is_empty() {
        registry.register_validator(RouteCategory::API, TagValidator::new(policy.required_tags.iter().cloned()));
    }
    if !policy.required_metadata.is_empty() {
        registry.register_validator(
            RouteCategory::API,
            MetadataValidator::new(policy.required_metadata.iter().cloned()),
        );
    }
}

/// Install validators and bind every queued route into `host`.
pub fn setup_routers(
    registry: &mut RouterRegistry,
    host: &mut dyn RouteHost,
    config: &AppConfig,
) -> Result<RegistrationReport, StartupError> {
    install_validators(registry, config);
    let report = registry.register_all(host);

    if !report.is_clean() {
        if config.registry.fail_on_errors {
            return Err(StartupError::RegistrationFailed {
                failed: report.failed,
                total: report.total,
            });
        }
        tracing::warn!(failed = report.failed, "Starting with routes that failed to register");
    }
    Ok(report)
}

/// Declare the built-in modules into the process-wide registry and build
/// the application router from it.
pub fn build_application(config: &AppConfig) -> Result<(Router, RegistrationReport), StartupError> {
    let mut registry = registry::global();
    let added = declare_routes(&mut registry, config);
    tracing::debug!(added, pending = registry.len(), "Built-in routes declared");

    let mut host = AppHost::new();
    let report = setup_routers(&mut registry, &mut host, config)?;
    Ok((host.into_router(), report))
}
