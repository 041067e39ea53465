//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! ENV (dev/prod/test)
//!     → loader.rs (pick config.<env>.toml, parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → startup: API prefix into PrefixValidator, registry policy, server
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{config_file_for_env, load_config, ConfigError};
pub use schema::{ApiConfig, AppConfig, ObservabilityConfig, RegistryConfig, ServerConfig};
