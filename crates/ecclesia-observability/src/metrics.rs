use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
    routing::get,
};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::time::{Duration, Instant};
use tracing::warn;

use crate::logging::is_observability_enabled;

/// Initialize Prometheus metrics exporter with upkeep task.
///
/// Returns None if observability is disabled or a recorder is already
/// installed. Must be called from within a tokio runtime.
pub fn init_metrics() -> Option<PrometheusHandle> {
    if !is_observability_enabled() {
        return None;
    }

    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("http_request_duration_seconds".to_string()),
            &[
                0.001, 0.005, 0.01, 0.025, 0.05, 0.075, 0.1, 0.25, 0.5, 0.75, 1.0, 2.5, 5.0,
            ],
        )
        .and_then(|builder| builder.install_recorder());

    let handle = match handle {
        Ok(handle) => handle,
        Err(e) => {
            warn!(error = %e, "Failed to install Prometheus recorder");
            return None;
        }
    };

    // Spawn upkeep task to clean stale metrics
    let upkeep_handle = handle.clone();
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(Duration::from_secs(5)).await;
            upkeep_handle.run_upkeep();
        }
    });

    Some(handle)
}

/// Metrics middleware to track HTTP requests
pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    if !is_observability_enabled() {
        return next.run(req).await;
    }

    let start = Instant::now();
    let method = req.method().as_str().to_owned();
    let uri_path = req.uri().path().to_owned();

    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or(uri_path);

    gauge!("http_requests_active").increment(1.0);

    let response = next.run(req).await;

    let latency = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();

    counter!("http_requests_total", "method" => method.clone(), "path" => path.clone(), "status" => status).increment(1);
    histogram!("http_request_duration_seconds", "method" => method, "path" => path).record(latency);

    gauge!("http_requests_active").decrement(1.0);

    response
}

/// Router for the metrics endpoint
pub fn metrics_app(handle: PrometheusHandle) -> Router {
    Router::new().route("/metrics", get(move || async move { handle.render() }))
}

// Authorization metrics helpers

/// Count a guard evaluation by the criterion that decided it
pub fn track_guard_decision(criterion: &str, granted: bool) {
    if !is_observability_enabled() {
        return;
    }
    counter!(
        "authz_guard_decisions_total",
        "criterion" => criterion.to_string(),
        "granted" => granted.to_string()
    )
    .increment(1);
}

/// Count a request rejected by an extractor or route layer
pub fn track_access_denied(reason: &str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("authz_access_denied_total", "reason" => reason.to_string()).increment(1);
}

pub fn track_assignment_validated(role: &str, is_valid: bool) {
    if !is_observability_enabled() {
        return;
    }
    let status = if is_valid { "valid" } else { "invalid" };
    counter!("authz_assignments_validated_total", "role" => role.to_string(), "status" => status)
        .increment(1);
}

/// Track role changes and how many custom grants they dropped
pub fn track_role_change(role: &str, discarded: usize) {
    if !is_observability_enabled() {
        return;
    }
    counter!("authz_role_changes_total", "role" => role.to_string()).increment(1);
    histogram!("authz_role_change_discarded_permissions").record(discarded as f64);
}
