//! Route registration registry for axum services.
//!
//! Feature modules declare [`host::RouteModule`]s into the process-wide
//! [`registry::RouterRegistry`]; at startup a single pass orders them by
//! priority, validates them per category and binds them into the host.

pub mod admin;
pub mod api;
pub mod config;
pub mod host;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod registry;

pub use config::AppConfig;
pub use host::{AppHost, RouteHost, RouteModule};
pub use http::HttpServer;
pub use lifecycle::shutdown::Shutdown;
pub use registry::{RouteCategory, RouteOptions, RouterRegistry};
