use std::path::PathBuf;
use std::sync::Arc;

use crate::dashboards::d402_sales_analytics::SalesAnalyticsService;
use crate::shared::config::Config;

/// Shared, read-only application state handed to every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub sales_analytics: Arc<SalesAnalyticsService>,
    pub uploads_dir: PathBuf,
}

impl AppState {
    pub fn new(sales_analytics: SalesAnalyticsService, uploads_dir: PathBuf) -> Self {
        Self {
            sales_analytics: Arc::new(sales_analytics),
            uploads_dir,
        }
    }

    pub fn from_config(config: &Config, uploads_dir: PathBuf) -> Self {
        Self::new(
            SalesAnalyticsService::from_config(&config.analytics),
            uploads_dir,
        )
    }
}
