//! Validation strategies applied to route descriptors before binding.
//!
//! # Design Decisions
//! - Validators are pure: they read the descriptor and its module only
//! - Validators attach to a category, not to individual routes
//! - A chain runs in registration order and stops at the first rejection

use std::collections::BTreeSet;

use thiserror::Error;

use crate::registry::category::RouteCategory;
use crate::registry::descriptor::RouteDescriptor;

/// Reason a validator rejected a route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct Rejection(pub String);

impl Rejection {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// Trait for checking a route before it is bound.
pub trait RouteValidator: Send + Sync + std::fmt::Debug {
    /// Returns `Err` with a human readable reason if the route must not be bound.
    fn validate(&self, descriptor: &RouteDescriptor) -> Result<(), Rejection>;

    /// Identity used to reject a second validator of the same kind on one category.
    fn kind(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Requires the route prefix to start with a configured prefix.
#[derive(Debug, Clone, Default)]
pub struct PrefixValidator {
    required_prefix: Option<String>,
}

impl PrefixValidator {
    pub fn new(required_prefix: impl Into<String>) -> Self {
        Self {
            required_prefix: Some(required_prefix.into()),
        }
    }

    /// A validator that accepts everything.
    pub fn disabled() -> Self {
        Self::default()
    }
}

impl RouteValidator for PrefixValidator {
    fn validate(&self, descriptor: &RouteDescriptor) -> Result<(), Rejection> {
        let Some(required) = &self.required_prefix else {
            return Ok(());
        };
        let prefix = descriptor.prefix();
        if prefix.is_empty() || !prefix.starts_with(required.as_str()) {
            return Err(Rejection(format!(
                "route prefix `{}` must start with `{}`",
                prefix, required
            )));
        }
        Ok(())
    }
}

/// Requires the route to carry every configured tag.
#[derive(Debug, Clone)]
pub struct TagValidator {
    required_tags: Vec<String>,
}

impl TagValidator {
    pub fn new<I, T>(required_tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            required_tags: required_tags.into_iter().map(Into::into).collect(),
        }
    }
}

impl RouteValidator for TagValidator {
    fn validate(&self, descriptor: &RouteDescriptor) -> Result<(), Rejection> {
        let present: BTreeSet<&str> = descriptor.handle().tags().iter().map(String::as_str).collect();
        let missing: BTreeSet<&str> = self
            .required_tags
            .iter()
            .map(String::as_str)
            .filter(|tag| !present.contains(tag))
            .collect();

        if !missing.is_empty() {
            let missing: Vec<&str> = missing.into_iter().collect();
            return Err(Rejection(format!(
                "route is missing required tags: {}",
                missing.join(", ")
            )));
        }
        Ok(())
    }
}

/// Requires admin routes to declare at least one dependency.
///
/// Dependencies are how auth middleware gets attached, so an admin route
/// without any is almost certainly unprotected.
#[derive(Debug, Clone, Default)]
pub struct AdminRouteValidator;

impl AdminRouteValidator {
    pub fn new() -> Self {
        Self
    }
}

impl RouteValidator for AdminRouteValidator {
    fn validate(&self, descriptor: &RouteDescriptor) -> Result<(), Rejection> {
        if !descriptor.category().includes(RouteCategory::ADMIN) {
            return Ok(());
        }
        if descriptor.handle().dependencies().is_empty() {
            return Err(Rejection::new(
                "admin routes must declare an authentication dependency",
            ));
        }
        Ok(())
    }
}

/// Requires the listed keys to be present in the route's extra metadata.
#[derive(Debug, Clone)]
pub struct MetadataValidator {
    required_keys: Vec<String>,
}

impl MetadataValidator {
    pub fn new<I, T>(required_keys: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            required_keys: required_keys.into_iter().map(Into::into).collect(),
        }
    }
}

impl RouteValidator for MetadataValidator {
    fn validate(&self, descriptor: &RouteDescriptor) -> Result<(), Rejection> {
        let missing: Vec<&str> = self
            .required_keys
            .iter()
            .filter(|key| !descriptor.extra().contains_key(key.as_str()))
            .map(String::as_str)
            .collect();

        if !missing.is_empty() {
            return Err(Rejection(format!(
                "route is missing required metadata: {}",
                missing.join(", ")
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::RouteModule;
    use crate::registry::descriptor::RouteOptions;
    use axum::middleware::{self, Next};
    use axum::{extract::Request, response::Response};
    use std::sync::Arc;

    async fn pass(request: Request, next: Next) -> Response {
        next.run(request).await
    }

    fn descriptor(module: RouteModule, options: RouteOptions) -> RouteDescriptor {
        RouteDescriptor::new(Arc::new(module), options)
    }

    #[test]
    fn test_prefix_validator() {
        let validator = PrefixValidator::new("/api");

        let ok = descriptor(RouteModule::new("/api/v1/stats"), RouteOptions::new());
        assert!(validator.validate(&ok).is_ok());

        let bad = descriptor(RouteModule::new("/stats"), RouteOptions::new());
        let err = validator.validate(&bad).unwrap_err();
        assert!(err.0.contains("`/api`"), "{}", err);

        let root = descriptor(RouteModule::new(""), RouteOptions::new());
        assert!(validator.validate(&root).is_err());

        assert!(PrefixValidator::disabled().validate(&bad).is_ok());
    }

    #[test]
    fn test_tag_validator_lists_missing() {
        let validator = TagValidator::new(["export", "v1", "public"]);

        let ok = descriptor(
            RouteModule::new("/x").tag("v1").tag("export").tag("public").tag("extra"),
            RouteOptions::new(),
        );
        assert!(validator.validate(&ok).is_ok());

        let bad = descriptor(RouteModule::new("/x").tag("v1"), RouteOptions::new());
        let err = validator.validate(&bad).unwrap_err();
        assert_eq!(err.0, "route is missing required tags: export, public");
    }

    #[test]
    fn test_admin_validator_requires_dependency() {
        let validator = AdminRouteValidator::new();

        let bare = descriptor(
            RouteModule::new("/admin"),
            RouteOptions::new().category(RouteCategory::ADMIN),
        );
        assert!(validator.validate(&bare).is_err());

        let guarded = descriptor(
            RouteModule::new("/admin").dependency("auth", middleware::from_fn(pass)),
            RouteOptions::new().category(RouteCategory::ADMIN),
        );
        assert!(validator.validate(&guarded).is_ok());

        // combined categories still count as admin
        let combined = descriptor(
            RouteModule::new("/admin"),
            RouteOptions::new().category(RouteCategory::ADMIN | RouteCategory::API),
        );
        assert!(validator.validate(&combined).is_err());

        let public = descriptor(RouteModule::new("/open"), RouteOptions::new());
        assert!(validator.validate(&public).is_ok());
    }

    #[test]
    fn test_metadata_validator() {
        let validator = MetadataValidator::new(["owner", "version"]);

        let ok = descriptor(
            RouteModule::new("/x"),
            RouteOptions::new().extra("owner", "platform").extra("version", 2),
        );
        assert!(validator.validate(&ok).is_ok());

        let bad = descriptor(RouteModule::new("/x"), RouteOptions::new().extra("owner", "platform"));
        assert_eq!(
            validator.validate(&bad).unwrap_err(),
            Rejection::new("route is missing required metadata: version")
        );
    }

    #[test]
    fn test_kind_names_concrete_type() {
        let boxed: Box<dyn RouteValidator> = Box::new(TagValidator::new(["a"]));
        assert!(boxed.kind().ends_with("TagValidator"));
        assert_ne!(boxed.kind(), AdminRouteValidator.kind());
    }
}
