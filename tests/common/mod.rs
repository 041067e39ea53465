//! Shared utilities for integration tests.

use std::sync::{Mutex, MutexGuard, OnceLock};

use axum::{
    body::{to_bytes, Body},
    http::{header::AUTHORIZATION, Request, StatusCode},
    Router,
};
use route_registry::host::{BindError, RouteHost, RouteModule};
use serde_json::Value;
use tower::ServiceExt;

/// Serialize tests that touch the process-wide registry.
pub fn serial() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|err| err.into_inner())
}

/// Issue a GET request against an in-process router.
pub async fn get(router: Router, uri: &str, bearer: Option<&str>) -> (StatusCode, Value) {
    let mut request = Request::builder().uri(uri);
    if let Some(token) = bearer {
        request = request.header(AUTHORIZATION, format!("Bearer {}", token));
    }
    let response = router
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

/// Host that records bound prefixes without building a router.
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingHost {
    pub bound: Vec<String>,
}

impl RouteHost for RecordingHost {
    fn bind(&mut self, module: &RouteModule) -> Result<(), BindError> {
        self.bound.push(module.prefix().to_string());
        Ok(())
    }
}
