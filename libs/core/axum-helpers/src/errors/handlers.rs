use axum::{
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};

use super::{ErrorCode, ErrorContext, ErrorResponse};

/// Fallback for requests that match no route.
pub async fn not_found(uri: Uri) -> Response {
    tracing::debug!(error_code = ErrorCode::RouteNotFound.code(), path = %uri.path(), "No route matched");

    ErrorResponse::new(
        StatusCode::NOT_FOUND,
        ErrorCode::RouteNotFound.default_message(),
        Some(ErrorContext::identifier(uri.path())),
    )
    .into_response()
}

/// Fallback for a known path hit with a method it does not serve.
pub async fn method_not_allowed(method: Method, uri: Uri) -> Response {
    tracing::debug!(
        error_code = ErrorCode::MethodNotAllowed.code(),
        %method,
        path = %uri.path(),
        "Method not allowed"
    );

    ErrorResponse::new(
        StatusCode::METHOD_NOT_ALLOWED,
        ErrorCode::MethodNotAllowed.default_message(),
        Some(ErrorContext::identifier(uri.path())),
    )
    .into_response()
}
