//! axum-backed host.
//!
//! Modules sharing a prefix are merged into one fragment, and each prefix is
//! nested once when the application router is built.

use std::collections::BTreeMap;
use std::panic::{self, AssertUnwindSafe};

use axum::Router;

use crate::host::{BindError, RouteHost, RouteModule};
use crate::registry::handler::panic_message;

const ROOT: &str = "/";

/// Collects bound route modules into one application router.
#[derive(Debug, Default)]
pub struct AppHost {
    base: Router,
    groups: BTreeMap<String, Router>,
}

impl AppHost {
    /// Create a host with an empty router.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a host on top of routes the application already defines.
    pub fn with_router(router: Router) -> Self {
        Self {
            base: router,
            groups: BTreeMap::new(),
        }
    }

    /// Prefixes bound so far, in lexical order.
    pub fn bound_prefixes(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Finish binding and return the application router.
    pub fn into_router(self) -> Router {
        self.groups
            .into_iter()
            .fold(self.base, |router, (prefix, fragment)| {
                // axum refuses to nest at the root, so root modules are merged
                if prefix == ROOT {
                    router.merge(fragment)
                } else {
                    router.nest(&prefix, fragment)
                }
            })
    }
}

fn normalize(raw: &str) -> Result<&str, BindError> {
    if !raw.is_empty() && !raw.starts_with('/') {
        return Err(BindError::InvalidPrefix(raw.to_string()));
    }
    Ok(match raw.trim_end_matches('/') {
        "" => ROOT,
        p => p,
    })
}

/// Merge `fragment` into `router`, turning axum's overlap panic into an error.
fn merge_checked(prefix: &str, router: Router, fragment: Router) -> Result<Router, BindError> {
    panic::catch_unwind(AssertUnwindSafe(move || router.merge(fragment))).map_err(|payload| {
        BindError::RouteConflict {
            prefix: prefix.to_string(),
            detail: panic_message(payload),
        }
    })
}

impl RouteHost for AppHost {
    fn bind(&mut self, module: &RouteModule) -> Result<(), BindError> {
        let prefix = normalize(module.prefix())?;

        let group = self.groups.get(prefix).cloned().unwrap_or_default();
        let group = merge_checked(prefix, group, module.router())?;
        if prefix == ROOT {
            merge_checked(prefix, self.base.clone(), group.clone())?;
        }
        self.groups.insert(prefix.to_string(), group);

        tracing::debug!(prefix = %prefix, "Route module bound");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        routing::{get, post},
    };
    use tower::ServiceExt;

    async fn get_body(router: Router, uri: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), 1024).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_bind_nests_under_prefix() {
        let mut host = AppHost::new();
        let module = RouteModule::new("/api/v1/items").route("/list", get(|| async { "items" }));

        host.bind(&module).unwrap();
        let router = host.into_router();

        let (status, body) = get_body(router.clone(), "/api/v1/items/list").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "items");

        let (status, _) = get_body(router, "/list").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_root_module_is_merged() {
        let mut host = AppHost::new();
        let module = RouteModule::new("").route("/health", get(|| async { "ok" }));

        host.bind(&module).unwrap();
        let (status, body) = get_body(host.into_router(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_modules_sharing_a_prefix_both_serve() {
        let mut host = AppHost::new();
        let public = RouteModule::new("/admin").route("/a", get(|| async { "a" }));
        let private = RouteModule::new("/admin/").route("/b", get(|| async { "b" }));

        host.bind(&public).unwrap();
        host.bind(&private).unwrap();
        assert_eq!(host.bound_prefixes().collect::<Vec<_>>(), vec!["/admin"]);

        let router = host.into_router();
        assert_eq!(get_body(router.clone(), "/admin/a").await, (StatusCode::OK, "a".into()));
        assert_eq!(get_body(router, "/admin/b").await, (StatusCode::OK, "b".into()));
    }

    #[tokio::test]
    async fn test_same_path_different_method_is_not_a_conflict() {
        let mut host = AppHost::new();
        let reads = RouteModule::new("/items").route("/", get(|| async { "read" }));
        let writes = RouteModule::new("/items").route("/", post(|| async { "write" }));

        host.bind(&reads).unwrap();
        host.bind(&writes).unwrap();

        let (status, body) = get_body(host.into_router(), "/items").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "read");
    }

    #[tokio::test]
    async fn test_same_path_and_method_is_a_conflict() {
        let mut host = AppHost::new();
        let first = RouteModule::new("/admin").route("/a", get(|| async { "first" }));
        let second = RouteModule::new("/admin").route("/a", get(|| async { "second" }));

        host.bind(&first).unwrap();
        let err = host.bind(&second).unwrap_err();
        assert!(matches!(err, BindError::RouteConflict { ref prefix, .. } if prefix == "/admin"));

        // the first module keeps serving
        let (status, body) = get_body(host.into_router(), "/admin/a").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "first");
    }

    #[test]
    fn test_root_module_conflicting_with_base_routes() {
        let base = Router::new().route("/health", get(|| async { "base" }));
        let mut host = AppHost::with_router(base);
        let module = RouteModule::new("/").route("/health", get(|| async { "module" }));

        assert!(matches!(host.bind(&module), Err(BindError::RouteConflict { .. })));
        assert_eq!(host.bound_prefixes().count(), 0);
    }

    #[test]
    fn test_relative_prefix_is_rejected() {
        let mut host = AppHost::new();
        let module = RouteModule::new("api").route("/x", get(|| async { "x" }));
        assert!(matches!(host.bind(&module), Err(BindError::InvalidPrefix(_))));
    }
}
