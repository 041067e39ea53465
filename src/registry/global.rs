//! The process-wide registry instance.
//!
//! Feature modules add their routes here during startup and the binary runs
//! a single registration pass before serving. The instance is created on
//! first access.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use crate::registry::registry::RouterRegistry;

static REGISTRY: OnceLock<Mutex<RouterRegistry>> = OnceLock::new();

/// Lock the process-wide registry, constructing it on first use.
///
/// Do not call this from inside a type handler or validator while
/// `register_all` runs on the global instance: the guard is already held.
pub fn global() -> MutexGuard<'static, RouterRegistry> {
    REGISTRY
        .get_or_init(|| {
            tracing::debug!("Initializing global router registry");
            Mutex::new(RouterRegistry::new())
        })
        .lock()
        // the registry holds no invariant a panicking caller can break halfway
        .unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_concurrent_first_access_yields_one_instance() {
        let addrs: Vec<usize> = (0..8)
            .map(|_| thread::spawn(|| &*global() as *const RouterRegistry as usize))
            .collect::<Vec<_>>()
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect();

        assert!(addrs.windows(2).all(|w| w[0] == w[1]));
    }
}
