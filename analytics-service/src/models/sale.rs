use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use service_core::store::Record;
use utoipa::ToSchema;

/// A recorded sale. Immutable once stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct Sale {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "Розы")]
    pub product: String,
    #[schema(example = 15)]
    pub quantity: u32,
    #[schema(example = 7500.0)]
    pub amount: f64,
    /// UTC calendar date the sale was recorded on.
    #[schema(value_type = String, format = Date, example = "2024-01-15")]
    pub date: NaiveDate,
}

/// Caller-supplied part of a sale.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSale {
    pub product: String,
    pub quantity: u32,
    pub amount: f64,
}

impl Record for Sale {
    type Draft = NewSale;

    fn from_draft(id: u64, draft: NewSale, appended_at: DateTime<Utc>) -> Self {
        Sale {
            id,
            product: draft.product,
            quantity: draft.quantity,
            amount: draft.amount,
            date: appended_at.date_naive(),
        }
    }
}
