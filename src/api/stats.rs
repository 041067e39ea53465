//! Registry statistics endpoint, intended for health dashboards.

use axum::{routing::get, Json};

use crate::host::RouteModule;
use crate::registry::{self, RegistryStatistics};

pub fn stats_module(api_prefix: &str) -> RouteModule {
    RouteModule::new(format!("{}/registry", api_prefix))
        .tag("registry")
        .route("/", get(get_statistics))
}

async fn get_statistics() -> Json<RegistryStatistics> {
    Json(registry::global().get_statistics())
}
