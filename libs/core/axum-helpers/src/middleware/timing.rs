use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::info;

/// Response header carrying the handling time in milliseconds.
pub const PROCESS_TIME_HEADER: HeaderName = HeaderName::from_static("x-process-time-ms");

/// Rounds to two decimal places.
fn round_ms(ms: f64) -> f64 {
    (ms * 100.0).round() / 100.0
}

/// Logs every request and stamps the response with [`PROCESS_TIME_HEADER`].
pub async fn timing(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let start = Instant::now();

    info!(%method, %path, "Request received");

    let mut response = next.run(request).await;
    let elapsed_ms = round_ms(start.elapsed().as_secs_f64() * 1000.0);

    if let Ok(value) = HeaderValue::from_str(&elapsed_ms.to_string()) {
        response.headers_mut().insert(PROCESS_TIME_HEADER, value);
    }

    info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms,
        "Request completed"
    );

    response
}
