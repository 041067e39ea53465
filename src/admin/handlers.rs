use axum::Json;
use serde::Serialize;

use crate::registry;

#[derive(Serialize)]
pub struct SystemStatus {
    pub version: &'static str,
    pub status: &'static str,
}

#[derive(Serialize)]
pub struct RouteSummary {
    pub name: String,
    pub prefix: String,
    pub category: String,
    pub priority: i32,
    pub enabled: bool,
    pub description: Option<String>,
    pub tags: Vec<String>,
}

pub async fn get_status() -> Json<SystemStatus> {
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
    })
}

/// Routes known to the process-wide registry, in registration order.
pub async fn get_routes() -> Json<Vec<RouteSummary>> {
    let registry = registry::global();
    let mut descriptors: Vec<_> = registry.descriptors().iter().collect();
    descriptors.sort_by(|a, b| a.registration_order(b));

    let routes = descriptors
        .into_iter()
        .map(|d| RouteSummary {
            name: d.name().to_string(),
            prefix: d.prefix().to_string(),
            category: d.category().to_string(),
            priority: d.priority(),
            enabled: d.enabled(),
            description: d.description().map(str::to_string),
            tags: d.handle().tags().to_vec(),
        })
        .collect();

    Json(routes)
}
