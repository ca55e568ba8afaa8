//! Prometheus metrics

use axum::http::StatusCode;
use axum::response::IntoResponse;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use std::time::Duration;

static PROMETHEUS: OnceCell<Option<PrometheusHandle>> = OnceCell::new();

/// Install the global Prometheus recorder
///
/// Safe to call more than once; only the first call installs.
pub fn init_metrics() -> Option<PrometheusHandle> {
    PROMETHEUS
        .get_or_init(|| match PrometheusBuilder::new().install_recorder() {
            Ok(handle) => Some(handle),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to install Prometheus recorder");
                None
            }
        })
        .clone()
}

/// Render metrics in Prometheus text format
pub async fn metrics_handler() -> impl IntoResponse {
    match PROMETHEUS.get().and_then(|handle| handle.as_ref()) {
        Some(handle) => (StatusCode::OK, handle.render()),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            "metrics disabled".to_string(),
        ),
    }
}

/// Record one executed action
pub fn record_action(action: &'static str, elapsed: Duration) {
    metrics::counter!("vaulty_actions_total", "action" => action).increment(1);
    metrics::histogram!("vaulty_action_latency_seconds", "action" => action)
        .record(elapsed.as_secs_f64());
}

/// Record a failed action call
pub fn record_error(kind: &'static str) {
    metrics::counter!("vaulty_action_errors_total", "kind" => kind).increment(1);
}
