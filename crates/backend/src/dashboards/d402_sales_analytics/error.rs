use thiserror::Error;

/// Ошибки расчёта аналитики продаж
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SalesAnalyticsError {
    #[error("Start date and end date are required")]
    MissingParameter,

    #[error("Invalid date format")]
    InvalidDateFormat,

    #[error("Start date must be before end date")]
    InvalidRange,

    #[error("Date range must not exceed {max_days} days")]
    RangeTooLarge { max_days: u32 },

    #[error("{0}")]
    InternalComputationFailure(String),
}

impl SalesAnalyticsError {
    /// Client errors are caused by the request and are not worth retrying
    pub fn is_client_error(&self) -> bool {
        !matches!(self, SalesAnalyticsError::InternalComputationFailure(_))
    }
}
