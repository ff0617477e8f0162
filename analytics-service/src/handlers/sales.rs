use axum::{extract::State, http::StatusCode, Json};
use service_core::error::{AppError, ErrorResponse};
use service_core::utils::ValidatedJson;

use crate::dtos::{CreateSaleRequest, SalesStats};
use crate::models::Sale;
use crate::services::{admit_sale, compute_sales_stats, metrics};
use crate::startup::AppState;

/// Summary statistics over every recorded sale
#[utoipa::path(
    get,
    path = "/analytics/sales",
    responses(
        (status = 200, description = "Totals, count, mean and the full sales list", body = SalesStats),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Analytics"
)]
pub async fn get_sales_stats(State(state): State<AppState>) -> Result<Json<SalesStats>, AppError> {
    let sales = state.sales.list()?;
    let stats = compute_sales_stats(sales);

    tracing::debug!(
        sales_count = stats.sales_count,
        total_sales = stats.total_sales,
        "Computed sales stats"
    );

    Ok(Json(stats))
}

/// Record a sale
#[utoipa::path(
    post,
    path = "/analytics/sales",
    request_body = CreateSaleRequest,
    responses(
        (status = 201, description = "Sale recorded", body = Sale),
        (status = 400, description = "Body is not a valid sale", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Analytics"
)]
pub async fn record_sale(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateSaleRequest>,
) -> Result<(StatusCode, Json<Sale>), AppError> {
    let sale = state.sales.try_append(payload.into(), admit_sale)?;

    tracing::info!(
        sale_id = sale.id,
        product = %sale.product,
        quantity = sale.quantity,
        amount = sale.amount,
        "Recorded sale"
    );
    metrics::record_sale(sale.quantity, sale.amount);

    Ok((StatusCode::CREATED, Json(sale)))
}
