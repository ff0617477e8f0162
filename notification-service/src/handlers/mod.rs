//! HTTP handlers for notification-service.

pub mod health;
pub mod notifications;

pub use health::{health_check, metrics_endpoint, not_found, readiness_check};
pub use notifications::{create_notification, list_notifications};
