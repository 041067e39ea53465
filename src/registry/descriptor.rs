//! Route descriptors and the options used to create them.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;

use crate::host::RouteModule;
use crate::registry::category::RouteCategory;

/// Default registration priority. Lower registers earlier.
pub const DEFAULT_PRIORITY: i32 = 100;

/// Name used when neither a name nor a prefix is supplied.
pub const UNNAMED: &str = "unnamed";

/// Registration options supplied alongside a route module.
#[derive(Debug, Clone)]
pub struct RouteOptions {
    pub category: RouteCategory,
    pub priority: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub enabled: bool,
    pub extra: BTreeMap<String, Value>,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            category: RouteCategory::default(),
            priority: DEFAULT_PRIORITY,
            name: None,
            description: None,
            enabled: true,
            extra: BTreeMap::new(),
        }
    }
}

impl RouteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: RouteCategory) -> Self {
        self.category = category;
        self
    }

    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Attach an arbitrary metadata entry.
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Registration metadata for one route module.
///
/// Created once by [`RouterRegistry::add_router`](crate::registry::RouterRegistry::add_router)
/// and immutable afterwards.
#[derive(Debug, Clone)]
pub struct RouteDescriptor {
    handle: Arc<RouteModule>,
    category: RouteCategory,
    priority: i32,
    name: String,
    description: Option<String>,
    enabled: bool,
    extra: BTreeMap<String, Value>,
}

impl RouteDescriptor {
    pub(crate) fn new(handle: Arc<RouteModule>, options: RouteOptions) -> Self {
        let name = resolve_name(options.name.as_deref(), handle.prefix());
        Self {
            handle,
            category: options.category,
            priority: options.priority,
            name,
            description: options.description,
            enabled: options.enabled,
            extra: options.extra,
        }
    }

    pub fn handle(&self) -> &RouteModule {
        &self.handle
    }

    pub fn category(&self) -> RouteCategory {
        self.category
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn extra(&self) -> &BTreeMap<String, Value> {
        &self.extra
    }

    /// Shortcut for the handle's path prefix.
    pub fn prefix(&self) -> &str {
        self.handle.prefix()
    }

    /// Registration order: ascending priority, then name.
    pub fn registration_order(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.name.cmp(&other.name))
    }
}

/// Name fallback chain: explicit name, then prefix, then [`UNNAMED`].
pub(crate) fn resolve_name(name: Option<&str>, prefix: &str) -> String {
    match name {
        Some(n) if !n.is_empty() => n.to_string(),
        _ if !prefix.is_empty() => prefix.to_string(),
        _ => UNNAMED.to_string(),
    }
}

/// Composite key rejecting a second submission of the same route.
pub(crate) fn dedupe_key(name: Option<&str>, prefix: &str) -> String {
    format!("{}|{}", resolve_name(name, prefix), prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_fallback() {
        assert_eq!(resolve_name(Some("stats"), "/api/stats"), "stats");
        assert_eq!(resolve_name(None, "/api/stats"), "/api/stats");
        assert_eq!(resolve_name(Some(""), "/api/stats"), "/api/stats");
        assert_eq!(resolve_name(None, ""), "unnamed");
    }

    #[test]
    fn test_dedupe_key_format() {
        assert_eq!(dedupe_key(Some("stats"), "/api/stats"), "stats|/api/stats");
        assert_eq!(dedupe_key(None, "/api/stats"), "/api/stats|/api/stats");
        assert_eq!(dedupe_key(None, ""), "unnamed|");
    }

    #[test]
    fn test_options_defaults() {
        let descriptor = RouteDescriptor::new(Arc::new(RouteModule::new("/x")), RouteOptions::new());
        assert_eq!(descriptor.category(), RouteCategory::default());
        assert_eq!(RouteOptions::new().category, RouteCategory::PUBLIC);
        assert_eq!(descriptor.priority(), DEFAULT_PRIORITY);
        assert_eq!(descriptor.name(), "/x");
        assert!(descriptor.enabled());
        assert!(descriptor.extra().is_empty());
        assert!(descriptor.description().is_none());
    }

    #[test]
    fn test_registration_order_breaks_ties_by_name() {
        let module = Arc::new(RouteModule::new("/x"));
        let a = RouteDescriptor::new(module.clone(), RouteOptions::new().priority(10).name("a"));
        let z = RouteDescriptor::new(module.clone(), RouteOptions::new().priority(10).name("z"));
        let b = RouteDescriptor::new(module, RouteOptions::new().priority(50).name("b"));

        assert_eq!(a.registration_order(&z), Ordering::Less);
        assert_eq!(z.registration_order(&b), Ordering::Less);
        assert_eq!(a.registration_order(&a), Ordering::Equal);
    }
}
