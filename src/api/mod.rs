//! The service's own route modules.
//!
//! # Data Flow
//! ```text
//! declare_routes(registry, config)
//!     → health   ({api}/health,   API|PUBLIC, priority 0)
//!     → admin    (/admin,         ADMIN,      priority 5)
//!     → registry ({api}/registry, API|PUBLIC, priority 20)
//! ```
//!
//! Declaring twice is harmless: the registry rejects the second submission
//! of every module by its `name|prefix` key.

pub mod health;
pub mod stats;

use std::sync::Arc;

use crate::admin::admin_module;
use crate::config::AppConfig;
use crate::registry::{RouteCategory, RouteOptions, RouterRegistry};

/// Queue every built-in route module. Returns how many were newly added.
pub fn declare_routes(registry: &mut RouterRegistry, config: &AppConfig) -> usize {
    let public_api = RouteCategory::API | RouteCategory::PUBLIC;

    let declarations = [
        (
            health::health_module(&config.api.prefix),
            RouteOptions::new()
                .category(public_api)
                .priority(0)
                .name("health")
                .description("Service health check"),
        ),
        (
            admin_module(config),
            RouteOptions::new()
                .category(RouteCategory::ADMIN)
                .priority(5)
                .name("admin")
                .description("Operational endpoints"),
        ),
        (
            stats::stats_module(&config.api.prefix),
            RouteOptions::new()
                .category(public_api)
                .priority(20)
                .name("registry")
                .description("Route registration statistics"),
        ),
    ];

    let mut added = 0;
    for (module, options) in declarations {
        if registry.add_router(Arc::new(module), options) {
            added += 1;
        }
    }
    added
}
