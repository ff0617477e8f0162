use axum::{extract::State, Json};
use service_core::error::{AppError, ErrorResponse};

use crate::dtos::ProductReport;
use crate::services::compute_product_report;
use crate::startup::AppState;

/// Quantity and amount totals per product
#[utoipa::path(
    get,
    path = "/analytics/products",
    responses(
        (status = 200, description = "Object keyed by product name", body = ProductReport),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Analytics"
)]
pub async fn get_product_report(
    State(state): State<AppState>,
) -> Result<Json<ProductReport>, AppError> {
    let sales = state.sales.list()?;
    let report = compute_product_report(&sales);

    tracing::debug!(products = report.len(), "Computed product report");

    Ok(Json(report))
}
