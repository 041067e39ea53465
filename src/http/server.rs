//! HTTP server setup.
//!
//! # Responsibilities
//! - Wrap the registered application router in middleware (timeout, tracing)
//! - Answer unmatched paths with a JSON 404
//! - Serve until the shutdown notification arrives

use std::time::Duration;

use axum::{
    http::{StatusCode, Uri},
    response::IntoResponse,
    Json, Router,
};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::lifecycle::shutdown::wait_for;

/// HTTP server for the registered application.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Wrap `app` (the output of the registration pass) with server middleware.
    pub fn new(app: Router, config: &ServerConfig) -> Self {
        Self {
            router: Self::build_router(app, config),
        }
    }

    #[allow(deprecated)]
    fn build_router(app: Router, config: &ServerConfig) -> Router {
        app.fallback(not_found)
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout_secs)))
            .layer(TraceLayer::new_for_http())
    }

    /// The fully layered router, for in-process requests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve on `listener` until `shutdown` fires.
    pub async fn run(self, listener: TcpListener, shutdown: broadcast::Receiver<()>) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(wait_for(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn not_found(uri: Uri) -> impl IntoResponse {
    tracing::debug!(path = %uri.path(), "No route matched");
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "not found", "path": uri.path() })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::Request,
        routing::get,
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_unmatched_path_gets_json_404() {
        let app = Router::new().route("/known", get(|| async { "known" }));
        let server = HttpServer::new(app, &ServerConfig::default());

        let response = server
            .router()
            .oneshot(Request::builder().uri("/unknown").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["path"], "/unknown");
    }
}
