//! Route modules: the handles feature code declares into the registry.
//!
//! # Responsibilities
//! - Hold an axum router fragment together with its mount prefix
//! - Carry the tags and dependency markers validators read
//! - Apply dependency layers when the fragment is handed to the host
//!
//! # Design Decisions
//! - Dependency layers are applied at bind time, so routes added after a
//!   dependency are still covered
//! - The registry never mutates a module; it only reads it and passes it on

use std::convert::Infallible;
use std::fmt;
use std::sync::Arc;

use axum::{
    extract::Request,
    response::IntoResponse,
    routing::{MethodRouter, Route},
    Router,
};
use tower::{Layer, Service};

type ApplyLayer = Arc<dyn Fn(Router) -> Router + Send + Sync>;

/// A named dependency attached to a route module.
///
/// A dependency without a layer is a pure marker (for example a route that
/// is authenticated upstream).
#[derive(Clone)]
pub struct Dependency {
    name: String,
    apply: Option<ApplyLayer>,
}

impl Dependency {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dependency")
            .field("name", &self.name)
            .field("layered", &self.apply.is_some())
            .finish()
    }
}

/// A unit of request-handling configuration, mounted under one prefix.
#[derive(Clone)]
pub struct RouteModule {
    prefix: String,
    tags: Vec<String>,
    dependencies: Vec<Dependency>,
    router: Router,
}

impl RouteModule {
    /// Create an empty module mounted at `prefix`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            tags: Vec::new(),
            dependencies: Vec::new(),
            router: Router::new(),
        }
    }

    /// Add a tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Add a route relative to the module prefix.
    pub fn route(mut self, path: &str, method_router: MethodRouter) -> Self {
        self.router = self.router.route(path, method_router);
        self
    }

    /// Merge an existing router fragment into this module.
    pub fn merge(mut self, router: Router) -> Self {
        self.router = self.router.merge(router);
        self
    }

    /// Attach a dependency marker with no layer.
    pub fn marker(mut self, name: impl Into<String>) -> Self {
        self.dependencies.push(Dependency {
            name: name.into(),
            apply: None,
        });
        self
    }

    /// Attach a dependency that wraps every route of this module in `layer`.
    pub fn dependency<L>(mut self, name: impl Into<String>, layer: L) -> Self
    where
        L: Layer<Route> + Clone + Send + Sync + 'static,
        L::Service: Service<Request> + Clone + Send + Sync + 'static,
        <L::Service as Service<Request>>::Response: IntoResponse + 'static,
        <L::Service as Service<Request>>::Error: Into<Infallible> + 'static,
        <L::Service as Service<Request>>::Future: Send + 'static,
    {
        let apply: ApplyLayer = Arc::new(move |router: Router| router.layer(layer.clone()));
        self.dependencies.push(Dependency {
            name: name.into(),
            apply: Some(apply),
        });
        self
    }

    /// Path prefix this module is mounted under.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Tags in declaration order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Dependencies in declaration order.
    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    /// Build the router fragment with all dependency layers applied.
    pub fn router(&self) -> Router {
        self.dependencies
            .iter()
            .filter_map(|dep| dep.apply.as_ref())
            .fold(self.router.clone(), |router, apply| apply(router))
    }
}

impl fmt::Debug for RouteModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteModule")
            .field("prefix", &self.prefix)
            .field("tags", &self.tags)
            .field("dependencies", &self.dependencies)
            .finish_non_exhaustive()
    }
}
