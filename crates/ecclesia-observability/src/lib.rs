//! Ecclesia Observability Module
//!
//! Provides configurable observability features including:
//! - Structured logging to the console and a rolling JSON file
//! - HTTP request/response logging with request ids
//! - Prometheus metrics for HTTP traffic and authorization decisions
//!
//! This module can be enabled or disabled at compile time via the `observability` feature flag.
//! At runtime, observability can be further controlled via the `OBSERVABILITY_ENABLED` environment variable.
//!
//! # Features
//!
//! - `observability` (default): Enables file logging and metrics
//!
//! # Examples
//!
//! ```no_run
//! use ecclesia_observability::init_tracing;
//!
//! #[tokio::main]
//! async fn main() {
//!     init_tracing();
//!     // ... application code ...
//! }
//! ```

pub mod basic_logging;
#[cfg(feature = "observability")]
pub mod logging;
#[cfg(feature = "observability")]
pub mod metrics;

pub use basic_logging::init_basic_console_logging;

// Re-export PrometheusHandle type when observability is enabled
#[cfg(feature = "observability")]
pub use metrics_exporter_prometheus::PrometheusHandle;

// Public exports when observability is enabled
#[cfg(feature = "observability")]
pub use logging::{init_tracing, is_observability_enabled, logging_middleware};
#[cfg(feature = "observability")]
pub use metrics::{
    init_metrics, metrics_app, metrics_middleware, track_access_denied,
    track_assignment_validated, track_guard_decision, track_role_change,
};

// No-op stubs when observability is disabled
#[cfg(not(feature = "observability"))]
pub mod stubs {
    use axum::{Router, extract::Request, middleware::Next, response::Response};

    /// Stand-in for the Prometheus handle; never constructed.
    #[derive(Clone, Debug)]
    pub enum PrometheusHandle {}

    /// No-op observability check when feature disabled
    pub fn is_observability_enabled() -> bool {
        false
    }

    /// Console logging only when feature disabled
    pub fn init_tracing() {
        super::init_basic_console_logging();
    }

    /// No-op logging middleware when feature disabled
    pub async fn logging_middleware(req: Request, next: Next) -> Response {
        next.run(req).await
    }

    /// No-op metrics middleware when feature disabled
    pub async fn metrics_middleware(req: Request, next: Next) -> Response {
        next.run(req).await
    }

    /// No-op metrics initialization when feature disabled
    pub fn init_metrics() -> Option<PrometheusHandle> {
        None
    }

    pub fn metrics_app(handle: PrometheusHandle) -> Router {
        match handle {}
    }

    // No-op tracking functions
    pub fn track_guard_decision(_criterion: &str, _granted: bool) {}
    pub fn track_assignment_validated(_role: &str, _is_valid: bool) {}
    pub fn track_role_change(_role: &str, _discarded: usize) {}
    pub fn track_access_denied(_reason: &str) {}
}

#[cfg(not(feature = "observability"))]
pub use stubs::*;
