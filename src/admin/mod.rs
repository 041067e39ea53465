//! Admin route module: operational endpoints behind a bearer token.

pub mod auth;
pub mod handlers;

use axum::{middleware, routing::get};

use crate::config::AppConfig;
use crate::host::RouteModule;
use self::auth::{admin_auth_middleware, AdminAuth};
use self::handlers::{get_routes, get_status};

/// Prefix the admin module is mounted under.
pub const ADMIN_PREFIX: &str = "/admin";

/// Build the admin module with its auth dependency attached.
pub fn admin_module(config: &AppConfig) -> RouteModule {
    let auth = AdminAuth::new(config.api.admin_api_key.as_str());
    RouteModule::new(ADMIN_PREFIX)
        .tag("admin")
        .route("/status", get(get_status))
        .route("/routes", get(get_routes))
        .dependency(
            "admin-auth",
            middleware::from_fn_with_state(auth, admin_auth_middleware),
        )
}
