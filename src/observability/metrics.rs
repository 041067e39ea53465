//! Metrics collection and exposition.
//!
//! # Metrics
//! - `registry_routes_total` (counter): routes processed by a registration
//!   pass, labelled by `outcome` (registered, skipped, failed)
//!
//! # Design Decisions
//! - Recording is a no-op until a recorder is installed, so library users
//!   and tests pay nothing
//! - The Prometheus exporter is only started by the binary

use std::net::SocketAddr;

use metrics::counter;
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Count one route outcome of a registration pass.
pub fn record_route_outcome(outcome: &'static str) {
    counter!("registry_routes_total", "outcome" => outcome).increment(1);
}

/// Install the Prometheus recorder with an HTTP scrape listener on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::host::{BindError, RouteHost, RouteModule};
    use crate::registry::{RouteOptions, RouterRegistry};

    struct NullHost;

    impl RouteHost for NullHost {
        fn bind(&mut self, _module: &RouteModule) -> Result<(), BindError> {
            Ok(())
        }
    }

    #[test]
    fn test_registration_pass_reaches_installed_recorder() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        let mut registry = RouterRegistry::new();
        registry.add_router(Arc::new(RouteModule::new("/a")), RouteOptions::new().name("a"));
        registry.add_router(
            Arc::new(RouteModule::new("/b")),
            RouteOptions::new().name("b").enabled(false),
        );

        metrics::with_local_recorder(&recorder, || registry.register_all(&mut NullHost));

        let rendered = handle.render();
        assert!(rendered.contains(r#"registry_routes_total{outcome="registered"} 1"#), "{}", rendered);
        assert!(rendered.contains(r#"registry_routes_total{outcome="skipped"} 1"#), "{}", rendered);
    }
}
