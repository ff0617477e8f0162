//! Pure folds over the sales sequence. Recomputed on every read.

use service_core::error::AppError;
use std::borrow::Cow;
use validator::{ValidationError, ValidationErrors};

use crate::dtos::{ProductReport, SalesStats};
use crate::models::{NewSale, Sale};

/// Reject a sale whose amount would push the running total past what an
/// `f64` can represent. Per-product totals are bounded by the running total.
pub fn admit_sale(existing: &[Sale], sale: &NewSale) -> Result<(), AppError> {
    let total: f64 = existing.iter().map(|sale| sale.amount).sum();
    if (total + sale.amount).is_finite() {
        return Ok(());
    }

    let mut error = ValidationError::new("total_overflow");
    error.message = Some(Cow::from("Amount would overflow the sales total"));
    let mut errors = ValidationErrors::new();
    errors.add("amount", error);
    Err(AppError::ValidationError(errors))
}

/// Totals, count and mean over `sales`, which is returned unchanged as
/// `sales_data`.
///
/// The mean of an empty sequence is reported as `0`.
pub fn compute_sales_stats(sales: Vec<Sale>) -> SalesStats {
    let total_sales: f64 = sales.iter().map(|sale| sale.amount).sum();
    let total_quantity: u64 = sales.iter().map(|sale| u64::from(sale.quantity)).sum();
    let sales_count = sales.len();

    let average_sale = if sales_count == 0 {
        0.0
    } else {
        total_sales / sales_count as f64
    };

    SalesStats {
        total_sales,
        total_quantity,
        average_sale,
        sales_count,
        sales_data: sales,
    }
}

/// Group by exact product name and sum quantity and amount per group.
pub fn compute_product_report(sales: &[Sale]) -> ProductReport {
    sales
        .iter()
        .fold(ProductReport::new(), |mut report, sale| {
            report.accumulate(&sale.product, sale.quantity, sale.amount);
            report
        })
}
