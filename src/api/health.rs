use axum::{routing::get, Json};
use serde_json::{json, Value};

use crate::host::RouteModule;

pub fn health_module(api_prefix: &str) -> RouteModule {
    RouteModule::new(format!("{}/health", api_prefix))
        .tag("health")
        .route("/", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
