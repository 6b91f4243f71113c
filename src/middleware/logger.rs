use axum::{extract::Request, middleware::Next, response::Response};

/// Log method, path and arrival time of every request, then continue.
pub async fn request_logger(req: Request, next: Next) -> Response {
    tracing::info!(
        method = %req.method(),
        uri = %req.uri(),
        timestamp = %chrono::Utc::now().to_rfc3339(),
        "request"
    );
    next.run(req).await
}
