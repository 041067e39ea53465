//! The router registry.
//!
//! # Responsibilities
//! - Collect route descriptors from independent modules, rejecting duplicates
//! - Keep per-category validator chains and type handlers
//! - Run one deterministic registration pass against a host
//! - Count outcomes for startup logs and health checks
//!
//! # Design Decisions
//! - Registration order is `(priority, name)`, lowest first
//! - A failing route never aborts the pass; failures are counted
//! - Handlers return `BindError`; panics inside a handler are caught and
//!   counted the same way
//! - Nothing is removed from the pending set by `register_all`, so a second
//!   pass re-processes every route

use std::collections::{HashMap, HashSet};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::host::{BindError, RouteHost, RouteModule};
use crate::observability::metrics;
use crate::registry::category::RouteCategory;
use crate::registry::descriptor::{dedupe_key, RouteDescriptor, RouteOptions};
use crate::registry::error::RegistryError;
use crate::registry::handler::{default_handler, panic_message, TypeHandler};
use crate::registry::stats::{RegistrationReport, RegistryStatistics};
use crate::registry::validator::RouteValidator;

struct ValidatorEntry {
    category: RouteCategory,
    validator: Box<dyn RouteValidator>,
}

#[derive(Debug, Clone, Copy, Default)]
struct Counters {
    registered: usize,
    skipped: usize,
    failed: usize,
}

/// Collects route modules and binds them into a host in one pass.
pub struct RouterRegistry {
    routes: Vec<RouteDescriptor>,
    validators: Vec<ValidatorEntry>,
    type_handlers: HashMap<RouteCategory, TypeHandler>,
    added_ids: HashSet<usize>,
    added_keys: HashSet<String>,
    counters: Counters,
}

impl RouterRegistry {
    /// Create a registry with the default handler installed for every category.
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            validators: Vec::new(),
            type_handlers: default_type_handlers(),
            added_ids: HashSet::new(),
            added_keys: HashSet::new(),
            counters: Counters::default(),
        }
    }

    /// Queue a route module for registration.
    ///
    /// Returns `false` without changing anything if the same module, or a
    /// module with the same `name|prefix` key, was already added.
    pub fn add_router(&mut self, handle: Arc<RouteModule>, options: RouteOptions) -> bool {
        let id = Arc::as_ptr(&handle) as usize;
        let key = dedupe_key(options.name.as_deref(), handle.prefix());

        if self.added_ids.contains(&id) || self.added_keys.contains(&key) {
            let err = RegistryError::DuplicateRegistration { key };
            tracing::debug!(error = %err, "Skipping duplicate route");
            return false;
        }

        let descriptor = RouteDescriptor::new(handle, options);
        tracing::debug!(
            name = %descriptor.name(),
            prefix = %descriptor.prefix(),
            category = %descriptor.category(),
            priority = descriptor.priority(),
            enabled = descriptor.enabled(),
            "Route queued for registration"
        );

        self.added_ids.insert(id);
        self.added_keys.insert(key);
        self.routes.push(descriptor);
        true
    }

    /// Attach a validator to every route whose category intersects `category`.
    ///
    /// A second validator of the same kind for the same category is ignored
    /// and `false` is returned.
    pub fn register_validator<V>(&mut self, category: RouteCategory, validator: V) -> bool
    where
        V: RouteValidator + 'static,
    {
        if category.is_empty() {
            tracing::warn!(kind = validator.kind(), "Validator registered for empty category ignored");
            return false;
        }

        let kind = validator.kind();
        let duplicate = self
            .validators
            .iter()
            .any(|entry| entry.category == category && entry.validator.kind() == kind);
        if duplicate {
            let err = RegistryError::DuplicateValidator { category, kind };
            tracing::debug!(error = %err, "Skipping duplicate validator");
            return false;
        }

        tracing::debug!(category = %category, kind, "Validator registered");
        self.validators.push(ValidatorEntry {
            category,
            validator: Box::new(validator),
        });
        true
    }

    /// Replace the handler used to bind routes of `category`.
    ///
    /// A handler for the empty category could never be resolved, so it is
    /// ignored and `false` is returned.
    pub fn register_type_handler<F>(&mut self, category: RouteCategory, handler: F) -> bool
    where
        F: Fn(&RouteDescriptor, &mut dyn RouteHost) -> Result<(), BindError> + Send + Sync + 'static,
    {
        if category.is_empty() {
            tracing::warn!(
                handler = std::any::type_name::<F>(),
                "Type handler registered for empty category ignored"
            );
            return false;
        }

        tracing::debug!(
            category = %category,
            handler = std::any::type_name::<F>(),
            "Type handler registered"
        );
        self.type_handlers.insert(category, Arc::new(handler));
        true
    }

    /// Remove the handler for `category`; routes of that category then fall
    /// back to the PUBLIC handler.
    pub fn remove_type_handler(&mut self, category: RouteCategory) -> bool {
        self.type_handlers.remove(&category).is_some()
    }

    /// Bind every queued route into `host`.
    ///
    /// Routes are processed in `(priority, name)` order. Disabled routes are
    /// skipped, routes rejected by a validator or whose handler fails are
    /// counted as failed, and processing always continues with the next route.
    pub fn register_all(&mut self, host: &mut dyn RouteHost) -> RegistrationReport {
        let mut counters = Counters::default();
        let total = self.routes.len();

        let mut ordered: Vec<&RouteDescriptor> = self.routes.iter().collect();
        ordered.sort_by(|a, b| a.registration_order(b));

        tracing::info!(total, "Registering routes");

        for descriptor in ordered {
            if !descriptor.enabled() {
                tracing::info!(name = %descriptor.name(), "Skipping disabled route");
                counters.skipped += 1;
                metrics::record_route_outcome("skipped");
                continue;
            }

            match self.dispatch(descriptor, host) {
                Ok(()) => {
                    tracing::info!(
                        name = %descriptor.name(),
                        prefix = %descriptor.prefix(),
                        category = %descriptor.category(),
                        priority = descriptor.priority(),
                        "Route registered"
                    );
                    counters.registered += 1;
                    metrics::record_route_outcome("registered");
                }
                Err(err) => {
                    tracing::error!(error = %err, "Route registration failed");
                    counters.failed += 1;
                    metrics::record_route_outcome("failed");
                }
            }
        }

        self.counters = counters;
        let report = RegistrationReport {
            registered: counters.registered,
            skipped: counters.skipped,
            failed: counters.failed,
            total,
        };

        tracing::info!(
            registered = report.registered,
            skipped = report.skipped,
            failed = report.failed,
            total = report.total,
            "Route registration complete"
        );
        report
    }

    /// Validate and bind a single route.
    fn dispatch(&self, descriptor: &RouteDescriptor, host: &mut dyn RouteHost) -> Result<(), RegistryError> {
        self.run_validators(descriptor)?;

        let handler = match self.resolve_handler(descriptor.category()) {
            Some(handler) => handler,
            None => {
                tracing::warn!(
                    name = %descriptor.name(),
                    category = %descriptor.category(),
                    "No type handler for category, using the public handler"
                );
                self.type_handlers
                    .get(&RouteCategory::PUBLIC)
                    .cloned()
                    .unwrap_or_else(default_handler)
            }
        };

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| handler(descriptor, &mut *host)));
        let source = match outcome {
            Ok(Ok(())) => return Ok(()),
            Ok(Err(err)) => err,
            Err(payload) => BindError::Panicked(panic_message(payload)),
        };
        Err(RegistryError::HandlerFailed {
            name: descriptor.name().to_string(),
            source,
        })
    }

    /// Run every validator that applies to the route, stopping at the first rejection.
    fn run_validators(&self, descriptor: &RouteDescriptor) -> Result<(), RegistryError> {
        self.validators
            .iter()
            .filter(|entry| entry.category.intersects(descriptor.category()))
            .try_for_each(|entry| entry.validator.validate(descriptor))
            .map_err(|reason| RegistryError::ValidationRejected {
                name: descriptor.name().to_string(),
                reason,
            })
    }

    /// Exact match on the full category first, then the contained flags in
    /// precedence order. `None` means the caller must fall back.
    fn resolve_handler(&self, category: RouteCategory) -> Option<TypeHandler> {
        if let Some(handler) = self.type_handlers.get(&category) {
            return Some(handler.clone());
        }
        RouteCategory::HANDLER_PRECEDENCE
            .iter()
            .filter(|flag| category.includes(**flag))
            .find_map(|flag| self.type_handlers.get(flag).cloned())
    }

    /// Drop all queued routes, dedupe keys and counters.
    ///
    /// Validators and type handlers are kept. Intended for test isolation.
    pub fn clear(&mut self) {
        self.routes.clear();
        self.added_ids.clear();
        self.added_keys.clear();
        self.counters = Counters::default();
        tracing::debug!("Registry cleared");
    }

    /// Return to the freshly constructed state, validators and handlers included.
    pub fn reset(&mut self) {
        self.clear();
        self.validators.clear();
        self.type_handlers = default_type_handlers();
    }

    /// Snapshot of counters from the last run plus pending routes per category.
    pub fn get_statistics(&self) -> RegistryStatistics {
        let by_category = RouteCategory::all()
            .iter()
            .filter_map(|flag| {
                let name = flag.flag_name()?;
                let count = self
                    .routes
                    .iter()
                    .filter(|route| route.category().includes(flag))
                    .count();
                Some((name.to_string(), count))
            })
            .collect();

        RegistryStatistics {
            total_routers: self.routes.len(),
            registered: self.counters.registered,
            skipped: self.counters.skipped,
            failed: self.counters.failed,
            by_category,
        }
    }

    /// Queued routes in insertion order.
    pub fn descriptors(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    /// Number of validators that apply to routes of `category`.
    pub fn validator_count(&self, category: RouteCategory) -> usize {
        self.validators
            .iter()
            .filter(|entry| entry.category.intersects(category))
            .count()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Default for RouterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RouterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouterRegistry")
            .field("routes", &self.routes.len())
            .field("validators", &self.validators.len())
            .field("type_handlers", &self.type_handlers.len())
            .field("counters", &self.counters)
            .finish()
    }
}

fn default_type_handlers() -> HashMap<RouteCategory, TypeHandler> {
    RouteCategory::all()
        .iter()
        .map(|flag| (flag, default_handler()))
        .collect()
}
