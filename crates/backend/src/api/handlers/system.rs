use axum::Json;
use contracts::shared::api::MessageResponse;

use crate::api::error::ApiError;

/// GET /
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Xerjoff API Server"))
}

/// GET /api/test
pub async fn api_test() -> Json<MessageResponse> {
    Json(MessageResponse::new("Backend is working!"))
}

/// Any route not registered above
pub async fn not_found() -> ApiError {
    ApiError::not_found()
}
