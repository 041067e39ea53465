//! Route registration subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (feature modules):
//!     RouteModule + RouteOptions
//!     → add_router (dedupe by identity and name|prefix)
//!     → pending descriptors
//!
//! Registration pass (once, before serving):
//!     pending descriptors
//!     → sort by (priority, name)
//!     → skip disabled
//!     → validator chain for the route's category flags
//!     → type handler lookup (exact, by flag, PUBLIC fallback)
//!     → handler(descriptor, host)
//!     → RegistrationReport { registered, skipped, failed, total }
//! ```
//!
//! # Design Decisions
//! - Categories are bit flags; a route is validated under every flag it carries
//! - Failures are counted, never propagated; the host decides what is fatal
//! - One process-wide instance (`global`), plus plain instances for tests

pub mod category;
pub mod descriptor;
pub mod error;
pub mod global;
pub mod handler;
pub mod registry;
pub mod stats;
pub mod validator;

pub use category::RouteCategory;
pub use descriptor::{RouteDescriptor, RouteOptions, DEFAULT_PRIORITY};
pub use error::RegistryError;
pub use global::global;
pub use handler::{bind_route, TypeHandler};
pub use registry::RouterRegistry;
pub use stats::{RegistrationReport, RegistryStatistics};
pub use validator::{
    AdminRouteValidator, MetadataValidator, PrefixValidator, Rejection, RouteValidator, TagValidator,
};
