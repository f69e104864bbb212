use axum::body::to_bytes;
use axum::body::Body;
use axum::http::{header, HeaderMap, Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;

use crate::shared::format::format_number;

/// Middleware для логирования HTTP запросов
///
/// Выводит в консоль:
/// - Время (локальное)
/// - Длительность (ms)
/// - Размер ответа (форматированный)
/// - Статус код
/// - Метод и путь
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    // Файлы из /uploads приходят с Content-Length: тело не буферизуем
    let (response, size) = match content_length(response.headers()) {
        Some(len) => (response, format_number(len)),
        None => {
            let (parts, body) = response.into_parts();
            match to_bytes(body, usize::MAX).await {
                Ok(bytes) => {
                    let size = format_number(bytes.len());
                    (Response::from_parts(parts, Body::from(bytes)), size)
                }
                Err(e) => {
                    tracing::warn!("{} {}: cannot read response body: {}", method, path, e);
                    (Response::from_parts(parts, Body::empty()), "error".to_string())
                }
            }
        }
    };

    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        status_color(response.status()),
        Local::now().format("%H:%M:%S"),
        start.elapsed().as_millis(),
        size,
        response.status().as_u16(),
        method,
        path
    );

    response
}

fn content_length(headers: &HeaderMap) -> Option<usize> {
    headers
        .get(header::CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

/// Голубой для 2xx, коричневый для 4xx, красный для 5xx
fn status_color(status: StatusCode) -> &'static str {
    if status.is_server_error() {
        "31"
    } else if status.is_success() {
        "36"
    } else {
        "33"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use axum::routing::get;
    use axum::{middleware, Router};
    use tower::ServiceExt;

    #[test]
    fn test_status_color() {
        assert_eq!(status_color(StatusCode::OK), "36");
        assert_eq!(status_color(StatusCode::BAD_REQUEST), "33");
        assert_eq!(status_color(StatusCode::INTERNAL_SERVER_ERROR), "31");
    }

    #[test]
    fn test_content_length() {
        let mut headers = HeaderMap::new();
        assert_eq!(content_length(&headers), None);

        headers.insert(header::CONTENT_LENGTH, HeaderValue::from_static("1048576"));
        assert_eq!(content_length(&headers), Some(1_048_576));

        headers.insert(header::CONTENT_LENGTH, HeaderValue::from_static("lots"));
        assert_eq!(content_length(&headers), None);
    }

    async fn body_through_logger(app: Router, uri: &str) -> (Option<usize>, String) {
        let app = app.layer(middleware::from_fn(request_logger));
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let declared = content_length(response.headers());
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (declared, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_sized_body_passes_through_untouched() {
        let app = Router::new().route(
            "/file",
            get(|| async { ([(header::CONTENT_LENGTH, "11")], "profile.png") }),
        );
        let (declared, body) = body_through_logger(app, "/file").await;
        assert_eq!(declared, Some(11));
        assert_eq!(body, "profile.png");
    }

    #[tokio::test]
    async fn test_unsized_body_is_preserved() {
        let app = Router::new().route("/json", get(|| async { r#"{"ok":true}"# }));
        let (_, body) = body_through_logger(app, "/json").await;
        assert_eq!(body, r#"{"ok":true}"#);
    }
}
