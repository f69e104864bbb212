use chrono::NaiveDate;
use contracts::dashboards::d402_sales_analytics::{
    ReportDateRange, SalesAnalyticsRequest, SalesAnalyticsResponse, SalesSummaryResponse,
};

use super::aggregator::{aggregate, sum_series};
use super::catalog::ProductCatalog;
use super::date_range::DateRange;
use super::error::SalesAnalyticsError;
use super::generator::generate_daily_series;
use super::random::RandomSource;
use super::ranker::rank_top_products;
use crate::shared::config::AnalyticsConfig;
use crate::shared::format::round_cents;

/// Builds sales analytics reports over synthetic data.
///
/// Holds no mutable state: one instance is shared by every request and the
/// randomness source is supplied per call.
#[derive(Debug, Clone)]
pub struct SalesAnalyticsService {
    catalog: ProductCatalog,
    max_range_days: u32,
    summary_window_days: u32,
}

impl SalesAnalyticsService {
    pub fn new(catalog: ProductCatalog, max_range_days: u32, summary_window_days: u32) -> Self {
        Self {
            catalog,
            max_range_days,
            summary_window_days,
        }
    }

    /// Uses the catalog from the config, or the built-in collection when none is set
    pub fn from_config(config: &AnalyticsConfig) -> Self {
        let catalog = match &config.catalog {
            Some(products) => ProductCatalog::new(products.clone()),
            None => ProductCatalog::default(),
        };
        Self::new(catalog, config.max_range_days, config.summary_window_days)
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    pub fn max_range_days(&self) -> u32 {
        self.max_range_days
    }

    /// Validate the raw query and build the full report
    pub fn build_report<R>(
        &self,
        request: &SalesAnalyticsRequest,
        rng: &mut R,
    ) -> Result<SalesAnalyticsResponse, SalesAnalyticsError>
    where
        R: RandomSource + ?Sized,
    {
        let range = DateRange::parse(request.start_date.as_deref(), request.end_date.as_deref())?
            .ensure_within(self.max_range_days)?;
        self.report_for_range(range, rng)
    }

    pub fn report_for_range<R>(
        &self,
        range: DateRange,
        rng: &mut R,
    ) -> Result<SalesAnalyticsResponse, SalesAnalyticsError>
    where
        R: RandomSource + ?Sized,
    {
        let daily_sales = generate_daily_series(&range, rng);
        let top_products = rank_top_products(&self.catalog, rng);
        let totals = aggregate(&daily_sales, &top_products)?;

        tracing::debug!(
            "Sales report {}..={}: {} days, {} orders",
            range.start(),
            range.end(),
            daily_sales.len(),
            totals.total_orders
        );

        Ok(SalesAnalyticsResponse {
            daily_sales,
            top_products,
            total_revenue: totals.total_revenue,
            total_orders: totals.total_orders,
            average_order_value: totals.average_order_value,
            top_selling_product: totals.top_selling_product,
            date_range: ReportDateRange {
                start: range.start(),
                end: range.end(),
            },
        })
    }

    /// Trailing window ending at `today`, both ends included
    pub fn summary_range(&self, today: NaiveDate) -> Result<DateRange, SalesAnalyticsError> {
        DateRange::trailing(today, self.summary_window_days)
    }

    pub fn summary_period_label(&self) -> String {
        format!("Last {} Days", self.summary_window_days)
    }

    pub fn summary<R>(
        &self,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<SalesSummaryResponse, SalesAnalyticsError>
    where
        R: RandomSource + ?Sized,
    {
        let range = self.summary_range(today)?;
        let daily_sales = generate_daily_series(&range, rng);
        let (revenue, total_orders) = sum_series(&daily_sales);

        Ok(SalesSummaryResponse {
            total_revenue: round_cents(revenue),
            total_orders,
            period: self.summary_period_label(),
        })
    }
}

impl Default for SalesAnalyticsService {
    fn default() -> Self {
        Self::from_config(&AnalyticsConfig::default())
    }
}
