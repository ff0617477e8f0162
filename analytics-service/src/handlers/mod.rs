//! HTTP handlers for analytics-service.

pub mod health;
pub mod products;
pub mod sales;

pub use health::{health_check, metrics_endpoint, not_found, readiness_check};
pub use products::get_product_report;
pub use sales::{get_sales_stats, record_sale};
