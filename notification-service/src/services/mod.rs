pub mod fixtures;
pub mod metrics;

pub use fixtures::seed_notifications;
pub use self::metrics::record_notification;
