use contracts::dashboards::d402_sales_analytics::{DailySalesRecord, ProductSalesEntry};

use super::error::SalesAnalyticsError;
use crate::shared::format::round_cents;

pub const NO_TOP_PRODUCT: &str = "N/A";

/// Rollup aggregates of one report
#[derive(Debug, Clone, PartialEq)]
pub struct SalesTotals {
    pub total_revenue: f64,
    pub total_orders: u64,
    pub average_order_value: f64,
    pub top_selling_product: String,
}

/// Revenue (unrounded) and order sums of a daily series
pub fn sum_series(series: &[DailySalesRecord]) -> (f64, u64) {
    series.iter().fold((0.0, 0), |(revenue, orders), day| {
        (revenue + day.revenue, orders + day.orders as u64)
    })
}

pub fn aggregate(
    series: &[DailySalesRecord],
    top_products: &[ProductSalesEntry],
) -> Result<SalesTotals, SalesAnalyticsError> {
    let (revenue, total_orders) = sum_series(series);
    if !revenue.is_finite() {
        return Err(SalesAnalyticsError::InternalComputationFailure(format!(
            "revenue sum is not finite over {} days",
            series.len()
        )));
    }

    let average_order_value = if total_orders > 0 {
        round_cents(revenue / total_orders as f64)
    } else {
        0.0
    };

    let top_selling_product = top_products
        .first()
        .map(|entry| entry.product_name.clone())
        .unwrap_or_else(|| NO_TOP_PRODUCT.to_string());

    Ok(SalesTotals {
        total_revenue: round_cents(revenue),
        total_orders,
        average_order_value,
        top_selling_product,
    })
}
