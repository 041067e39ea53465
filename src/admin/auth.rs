use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::Response,
};

/// Expected bearer token for admin routes.
#[derive(Clone)]
pub struct AdminAuth {
    api_key: Arc<str>,
}

impl AdminAuth {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: Arc::from(api_key),
        }
    }

    fn accepts(&self, header: &str) -> bool {
        header
            .strip_prefix("Bearer ")
            .is_some_and(|token| !self.api_key.is_empty() && token == &*self.api_key)
    }
}

pub async fn admin_auth_middleware(
    State(auth): State<AdminAuth>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let authorized = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .is_some_and(|value| auth.accepts(value));

    if authorized {
        return Ok(next.run(request).await);
    }

    tracing::warn!(path = %request.uri().path(), "Rejected unauthenticated admin request");
    Err(StatusCode::UNAUTHORIZED)
}
