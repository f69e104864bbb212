use std::any::Any;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any as AnyOrigin, CorsLayer};
use tower_http::services::ServeDir;

use crate::api::handlers;
use crate::shared::config::CorsConfig;
use crate::state::AppState;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    let uploads = ServeDir::new(&state.uploads_dir);

    Router::new()
        .route("/", get(handlers::system::root))
        .route("/health", get(|| async { "ok" }))
        .route("/api/test", get(handlers::system::api_test))
        // ========================================
        // D402 SALES ANALYTICS
        // ========================================
        .route(
            "/api/sales",
            get(handlers::d402_sales_analytics::get_sales_analytics),
        )
        .route(
            "/api/sales/summary",
            get(handlers::d402_sales_analytics::get_sales_summary),
        )
        // Profile pictures
        .nest_service("/uploads", uploads)
        .fallback(handlers::system::not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

/// CORS for the storefront client. An empty list or "*" allows any origin.
pub fn cors_layer(config: &CorsConfig) -> anyhow::Result<CorsLayer> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let any = config.allowed_origins.is_empty()
        || config.allowed_origins.iter().any(|origin| origin == "*");
    if any {
        return Ok(layer.allow_origin(AnyOrigin));
    }

    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|e| anyhow::anyhow!("invalid CORS origin {:?}: {}", origin, e))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    // credentials are only allowed together with an explicit origin list
    Ok(layer
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true))
}

/// Last-resort handler: a panic in a handler becomes a JSON 500
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    tracing::error!("Handler panicked: {}", details);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "success": false,
            "message": "Something went wrong!",
            "error": details,
        })),
    )
        .into_response()
}
