//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files.

use serde::{Deserialize, Serialize};

/// Root configuration for the service.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server settings.
    pub server: ServerConfig,

    /// API surface settings.
    pub api: ApiConfig,

    /// Route registration policy.
    pub registry: RegistryConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:8000").
    pub bind_address: String,

    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// API surface configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Prefix every API route must be mounted under.
    pub prefix: String,

    /// Bearer token required by admin routes.
    pub admin_api_key: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            prefix: "/api/v1".to_string(),
            admin_api_key: "admin-secret-key".to_string(),
        }
    }
}

/// Route registration policy.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct RegistryConfig {
    /// Require API routes to live under `api.prefix`.
    pub enforce_api_prefix: bool,

    /// Require admin routes to declare an auth dependency.
    pub require_admin_dependencies: bool,

    /// Tags every API route must carry.
    pub required_tags: Vec<String>,

    /// Metadata keys every API route must supply.
    pub required_metadata: Vec<String>,

    /// Abort startup when any route fails to register.
    pub fail_on_errors: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            enforce_api_prefix: true,
            require_admin_dependencies: true,
            required_tags: Vec::new(),
            required_metadata: Vec::new(),
            fail_on_errors: false,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
