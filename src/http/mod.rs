//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum serve, timeout + trace layers)
//!     → application router built by the registration pass
//!     → fallback 404 for anything no module claimed
//! ```

pub mod server;

pub use server::HttpServer;
