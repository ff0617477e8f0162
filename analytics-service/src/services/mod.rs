pub mod aggregator;
pub mod fixtures;
pub mod metrics;

pub use aggregator::{admit_sale, compute_product_report, compute_sales_stats};
pub use fixtures::seed_sales;
pub use self::metrics::record_sale;
