//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Declare route modules → Install validators
//!     → register_all into the host → Start listener
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain connections → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Route registration happens exactly once, before the listener starts
//! - Whether failed registrations abort startup is a config decision

pub mod shutdown;
pub mod signals;
pub mod startup;
