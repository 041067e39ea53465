//! Registry error taxonomy.
//!
//! None of these escape `register_all`; they describe why a single route was
//! not added or not bound and are rendered into logs and counters.

use thiserror::Error;

use crate::host::BindError;
use crate::registry::category::RouteCategory;
use crate::registry::validator::Rejection;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("route `{key}` was already added")]
    DuplicateRegistration { key: String },

    #[error("validator `{kind}` is already registered for {category}")]
    DuplicateValidator {
        category: RouteCategory,
        kind: &'static str,
    },

    #[error("route `{name}` failed validation: {reason}")]
    ValidationRejected { name: String, reason: Rejection },

    #[error("route `{name}` failed to bind: {source}")]
    HandlerFailed {
        name: String,
        #[source]
        source: BindError,
    },
}
