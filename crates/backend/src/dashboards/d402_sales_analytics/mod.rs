//! D402 sales analytics dashboard.
//!
//! Synthesizes a daily revenue/orders series for a date range, ranks the
//! catalog by units sold and rolls both up into a single report:
//!
//! ```text
//! validate(startDate, endDate) -> DateRange
//!    -> generate_daily_series(DateRange) -> [DailySalesRecord]
//!    -> rank_top_products(catalog)       -> [ProductSalesEntry]
//!    -> aggregate(series, top_products)  -> SalesAnalyticsResponse
//! ```

pub mod aggregator;
pub mod catalog;
pub mod date_range;
pub mod error;
pub mod generator;
pub mod random;
pub mod ranker;
pub mod service;

pub use catalog::{CatalogProduct, ProductCatalog};
pub use date_range::{DateRange, DateSpan};
pub use error::SalesAnalyticsError;
pub use random::{RandomSource, RngSource};
pub use service::SalesAnalyticsService;
