use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use contracts::shared::api::ErrorResponse;

use crate::dashboards::d402_sales_analytics::SalesAnalyticsError;

/// Error returned by the JSON API handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl ApiError {
    pub fn bad_request(error: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorResponse::new(error),
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            body: ErrorResponse::new("Not found"),
        }
    }

    /// 500 with a generic `error` and the cause in `message`
    pub fn internal(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: ErrorResponse::with_message(error, message),
        }
    }

    /// Map an analytics failure; `failure` is the generic text used for 500s
    pub fn from_analytics(err: SalesAnalyticsError, failure: &str) -> Self {
        if err.is_client_error() {
            tracing::warn!("Rejected sales analytics request: {}", err);
            Self::bad_request(err.to_string())
        } else {
            tracing::error!("{}: {}", failure, err);
            Self::internal(failure, err.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
