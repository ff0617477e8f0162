//! Domain metrics for analytics-service.

use metrics::{counter, gauge};

/// Record a stored sale.
pub fn record_sale(quantity: u32, amount: f64) {
    counter!("sales_recorded_total").increment(1);
    counter!("sales_quantity_total").increment(u64::from(quantity));
    // Counters are integral; amounts are not, and only ever add up.
    gauge!("sales_amount_total").increment(amount);
}
