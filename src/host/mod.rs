//! Host framework boundary.
//!
//! # Data Flow
//! ```text
//! Feature code:
//!     RouteModule::new(prefix).route(..).tag(..).dependency(..)
//!     → Arc<RouteModule> handed to the registry
//!
//! Registration pass:
//!     type handler(descriptor, host)
//!     → RouteHost::bind(module)
//!     → AppHost merges the fragment into its prefix group
//!
//! Build:
//!     AppHost::into_router → each prefix nested once
//! ```
//!
//! # Design Decisions
//! - The registry only knows the `RouteHost` trait, never axum directly
//! - Binding failures are values (`BindError`), not panics

pub mod app;
pub mod module;

use thiserror::Error;

pub use app::AppHost;
pub use module::{Dependency, RouteModule};

/// The binding primitive a host exposes to type handlers.
pub trait RouteHost {
    /// Attach `module` to the host's dispatch tree.
    fn bind(&mut self, module: &RouteModule) -> Result<(), BindError>;
}

/// Error returned when a host or type handler refuses a route.
#[derive(Debug, Error)]
pub enum BindError {
    #[error("routes under `{prefix}` overlap an existing route: {detail}")]
    RouteConflict { prefix: String, detail: String },

    #[error("prefix `{0}` must start with `/`")]
    InvalidPrefix(String),

    #[error("route rejected: {0}")]
    Rejected(String),

    #[error("handler panicked: {0}")]
    Panicked(String),
}
