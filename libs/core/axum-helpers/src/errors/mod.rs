pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Extra detail carried in the `data` field of an error envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct ErrorContext {
    /// Kind of entity involved, e.g. `"User"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    /// Identifier the client supplied (an id or an email).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// Per-field validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub errors: Option<serde_json::Value>,
}

impl ErrorContext {
    pub fn resource(resource: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            resource: Some(resource.into()),
            identifier: Some(identifier.into()),
            errors: None,
        }
    }

    pub fn identifier(identifier: impl Into<String>) -> Self {
        Self {
            identifier: Some(identifier.into()),
            ..Self::default()
        }
    }

    pub fn errors(errors: serde_json::Value) -> Self {
        Self {
            errors: Some(errors),
            ..Self::default()
        }
    }

    fn is_empty(&self) -> bool {
        self.resource.is_none() && self.identifier.is_none() && self.errors.is_none()
    }
}

/// Error envelope returned for every failed request.
///
/// ```json
/// {
///   "success": false,
///   "statusCode": 404,
///   "message": "User not found with identifier: 68eeafce05740b9d36aab307",
///   "data": { "resource": "User", "identifier": "68eeafce05740b9d36aab307" }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,
    /// Mirrors the HTTP status
    pub status_code: u16,
    pub message: String,
    pub data: Option<ErrorContext>,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>, data: Option<ErrorContext>) -> Self {
        Self {
            success: false,
            status_code: status.as_u16(),
            message: message.into(),
            data: data.filter(|ctx| !ctx.is_empty()),
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Application error type that renders as an [`ErrorResponse`].
///
/// Domain crates convert their own errors into this at the HTTP boundary.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Bad Request: {message}")]
    BadRequest {
        message: String,
        context: ErrorContext,
    },

    #[error("Not Found: {message}")]
    NotFound {
        message: String,
        context: ErrorContext,
    },

    #[error("Conflict: {message}")]
    Conflict {
        message: String,
        context: ErrorContext,
    },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::BadRequest {
            message: message.into(),
            context,
        }
    }

    pub fn not_found(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::NotFound {
            message: message.into(),
            context,
        }
    }

    pub fn conflict(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::Conflict {
            message: message.into(),
            context,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::JsonExtractorRejection(_) | AppError::ValidationError(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Database(_) | AppError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Flattens `validator` output into `{ field: [{ code, message }] }`.
fn field_errors(errors: &ValidationErrors) -> serde_json::Value {
    let fields = errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let entries: Vec<serde_json::Value> = errors
                .iter()
                .map(|err| {
                    serde_json::json!({
                        "code": err.code,
                        "message": err.message,
                    })
                })
                .collect();
            (field.to_string(), serde_json::Value::Array(entries))
        })
        .collect::<serde_json::Map<_, _>>();

    serde_json::Value::Object(fields)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (message, context) = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::info!(
                    error_code = ErrorCode::InvalidJson.code(),
                    "JSON extraction error: {}",
                    e.body_text()
                );
                (
                    ErrorCode::InvalidJson.default_message().to_string(),
                    Some(ErrorContext::errors(serde_json::json!({
                        "body": [e.body_text()]
                    }))),
                )
            }
            AppError::ValidationError(e) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Validation error: {}",
                    e
                );
                (
                    ErrorCode::ValidationError.default_message().to_string(),
                    Some(ErrorContext::errors(field_errors(&e))),
                )
            }
            AppError::BadRequest { message, context } => {
                tracing::info!(
                    error_code = ErrorCode::InvalidIdentifier.code(),
                    "Bad request: {}",
                    message
                );
                (message, Some(context))
            }
            AppError::NotFound { message, context } => {
                tracing::info!(
                    error_code = ErrorCode::NotFound.code(),
                    "Not found: {}",
                    message
                );
                (message, Some(context))
            }
            AppError::Conflict { message, context } => {
                tracing::info!(
                    error_code = ErrorCode::Conflict.code(),
                    "Conflict: {}",
                    message
                );
                (message, Some(context))
            }
            AppError::Database(detail) => {
                tracing::error!(
                    error_code = ErrorCode::DatabaseError.code(),
                    "Database error: {}",
                    detail
                );
                (ErrorCode::DatabaseError.default_message().to_string(), None)
            }
            AppError::InternalServerError(detail) => {
                tracing::error!(
                    error_code = ErrorCode::InternalError.code(),
                    "Internal server error: {}",
                    detail
                );
                (ErrorCode::InternalError.default_message().to_string(), None)
            }
        };

        ErrorResponse::new(status, message, context).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use validator::Validate;

    async fn render(error: AppError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_carries_context() {
        let (status, body) = render(AppError::not_found(
            "User not found with identifier: 68eeafce05740b9d36aab307",
            ErrorContext::resource("User", "68eeafce05740b9d36aab307"),
        ))
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({
                "success": false,
                "statusCode": 404,
                "message": "User not found with identifier: 68eeafce05740b9d36aab307",
                "data": { "resource": "User", "identifier": "68eeafce05740b9d36aab307" }
            })
        );
    }

    #[tokio::test]
    async fn test_internal_errors_do_not_leak_detail() {
        for error in [
            AppError::Database("connection reset by peer at 10.0.0.7".into()),
            AppError::InternalServerError("argon2 params invalid".into()),
        ] {
            let (status, body) = render(error).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body["message"], "An internal server error occurred");
            assert_eq!(body["data"], Value::Null);
        }
    }

    #[derive(Validate)]
    struct Signup {
        #[validate(email)]
        email: String,
    }

    #[tokio::test]
    async fn test_validation_errors_are_unprocessable() {
        let errors = Signup {
            email: "not-an-email".into(),
        }
        .validate()
        .unwrap_err();

        let (status, body) = render(AppError::from(errors)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["success"], false);
        assert_eq!(body["statusCode"], 422);
        assert_eq!(body["data"]["errors"]["email"][0]["code"], "email");
    }

    #[tokio::test]
    async fn test_empty_context_serializes_as_null() {
        let (status, body) = render(AppError::bad_request("Invalid user id", ErrorContext::default())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["data"], Value::Null);
    }
}
