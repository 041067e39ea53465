//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Registry and server produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (route outcome counters)
//!
//! Consumers:
//!     → stdout (fmt layer, filtered by EnvFilter)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Every registry decision is a structured event, not a formatted string
//! - Metrics are cheap counters; recording without an installed recorder is a no-op

pub mod logging;
pub mod metrics;
