use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use chrono::Utc;
use contracts::dashboards::d402_sales_analytics::{
    SalesAnalyticsRequest, SalesAnalyticsResponse, SalesSummaryResponse,
};

use crate::api::error::ApiError;
use crate::dashboards::d402_sales_analytics::{RngSource, SalesAnalyticsError};
use crate::state::AppState;

const SALES_FAILURE: &str = "Failed to fetch sales data";
const SUMMARY_FAILURE: &str = "Failed to fetch sales summary";

/// GET /api/sales?startDate=2024-01-01&endDate=2024-01-31
pub async fn get_sales_analytics(
    State(state): State<AppState>,
    query: Result<Query<SalesAnalyticsRequest>, QueryRejection>,
) -> Result<Json<SalesAnalyticsResponse>, ApiError> {
    // e.g. a repeated startDate: the bound has no single date value
    let Query(request) = query.map_err(|rejection| {
        tracing::warn!("D402 Dashboard: Unreadable query: {}", rejection.body_text());
        ApiError::from_analytics(SalesAnalyticsError::InvalidDateFormat, SALES_FAILURE)
    })?;

    tracing::info!(
        "D402 Dashboard: Getting sales analytics for {:?}..{:?}",
        request.start_date,
        request.end_date
    );

    let result = {
        let mut rng = RngSource::thread_local();
        state.sales_analytics.build_report(&request, &mut rng)
    };

    let report = result.map_err(|e| ApiError::from_analytics(e, SALES_FAILURE))?;
    tracing::info!(
        "D402 Dashboard: Returning {} days, top seller {}",
        report.daily_sales.len(),
        report.top_selling_product
    );
    Ok(Json(report))
}

/// GET /api/sales/summary
pub async fn get_sales_summary(
    State(state): State<AppState>,
) -> Result<Json<SalesSummaryResponse>, ApiError> {
    let today = Utc::now().date_naive();

    let result = {
        let mut rng = RngSource::thread_local();
        state.sales_analytics.summary(today, &mut rng)
    };

    let summary = result.map_err(|e| ApiError::from_analytics(e, SUMMARY_FAILURE))?;
    tracing::info!(
        "D402 Dashboard: Summary for {}: {} orders",
        summary.period,
        summary.total_orders
    );
    Ok(Json(summary))
}
