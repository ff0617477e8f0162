use chrono::{TimeZone, Utc};
use service_core::store::{RecordStore, StoreError};

use crate::models::{NewSale, Sale};

/// Seed the demo sale shown to a freshly started service.
pub fn seed_sales(store: &RecordStore<Sale>) -> Result<(), StoreError> {
    let recorded_at = Utc
        .with_ymd_and_hms(2024, 1, 15, 12, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);

    let sale = store.append_at(
        NewSale {
            product: "Розы".to_string(),
            quantity: 15,
            amount: 7500.0,
        },
        recorded_at,
    )?;

    tracing::debug!(sale_id = sale.id, product = %sale.product, "Seeded fixture sale");
    Ok(())
}
