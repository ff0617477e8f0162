//! HTTP middleware shared by every service router.

pub mod metrics;
pub mod tracing;

pub use self::metrics::metrics_middleware;
pub use self::tracing::{http_trace_layer, request_id_middleware, REQUEST_ID_HEADER};
