//! Per-category type handlers.

use std::any::Any;
use std::sync::Arc;

use crate::host::{BindError, RouteHost};
use crate::registry::descriptor::RouteDescriptor;

/// Binds a validated route into the host.
pub type TypeHandler =
    Arc<dyn Fn(&RouteDescriptor, &mut dyn RouteHost) -> Result<(), BindError> + Send + Sync>;

/// The handler every category starts with: one `bind` call, nothing else.
pub fn bind_route(descriptor: &RouteDescriptor, host: &mut dyn RouteHost) -> Result<(), BindError> {
    host.bind(descriptor.handle())
}

pub fn default_handler() -> TypeHandler {
    Arc::new(bind_route)
}

/// Render a caught panic payload as text.
pub(crate) fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
