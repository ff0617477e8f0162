pub mod sales;

use serde::Serialize;
use utoipa::ToSchema;

pub use sales::{CreateSaleRequest, ProductReport, ProductTotals, SalesStats};

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "OK")]
    pub status: String,
    #[schema(example = "Analytics Service")]
    pub service: String,
    #[schema(example = "0.1.0")]
    pub version: String,
}
