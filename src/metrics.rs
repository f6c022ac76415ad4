//! Metrics exporter setup.

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

/// Installs a Prometheus exporter serving scrapes on `addr`.
///
/// The exporter owns the global recorder; all gauges and counters in the
/// crate publish through it.
pub fn build_exporter(addr: SocketAddr) -> eyre::Result<()> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    Ok(())
}
