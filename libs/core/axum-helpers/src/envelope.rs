//! Success envelope shared by every JSON endpoint.
//!
//! ```json
//! { "success": true, "statusCode": 200, "message": "Found 2 users", "data": [...], "count": 2 }
//! ```
//!
//! Failures use [`crate::errors::ErrorResponse`], which has the same outer
//! fields with `success: false`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Serialize, Serializer};
use utoipa::ToSchema;

fn serialize_status<S: Serializer>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u16(status.as_u16())
}

/// Successful response wrapper.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// `false` only for [`ApiResponse::failure`]
    pub success: bool,
    #[serde(rename = "statusCode", serialize_with = "serialize_status")]
    #[schema(value_type = u16, example = 200)]
    pub status: StatusCode,
    pub message: String,
    pub data: T,
    /// Number of items in `data`; list responses only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn new(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            status,
            message: message.into(),
            data,
            count: None,
        }
    }

    /// 200 OK.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self::new(StatusCode::OK, message, data)
    }

    /// 201 Created.
    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self::new(StatusCode::CREATED, message, data)
    }

    /// Failure that still carries a typed payload, e.g. per-dependency
    /// health labels. Plain errors use [`crate::errors::ErrorResponse`].
    pub fn failure(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        Self {
            success: false,
            ..Self::new(status, message, data)
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// 200 OK with `count` set to the number of items.
    pub fn list(message: impl Into<String>, items: Vec<T>) -> Self {
        let count = items.len();
        Self {
            count: Some(count),
            ..Self::ok(message, items)
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};

    async fn render<T: Serialize>(response: ApiResponse<T>) -> (StatusCode, Value) {
        let response = response.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_created_envelope() {
        let (status, body) = render(ApiResponse::created(
            "User created successfully",
            json!({ "name": "Juan Pérez" }),
        ))
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body,
            json!({
                "success": true,
                "statusCode": 201,
                "message": "User created successfully",
                "data": { "name": "Juan Pérez" }
            })
        );
    }

    #[tokio::test]
    async fn test_list_envelope_counts_items() {
        let (status, body) = render(ApiResponse::list("Found 3 users", vec![1, 2, 3])).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 3);
        assert_eq!(body["data"].as_array().map(Vec::len), Some(3));
    }

    #[tokio::test]
    async fn test_empty_list_still_has_count() {
        let (_, body) = render(ApiResponse::list("Found 0 users", Vec::<u8>::new())).await;
        assert_eq!(body["count"], 0);
        assert_eq!(body["data"], json!([]));
    }

    #[tokio::test]
    async fn test_failure_envelope_keeps_data() {
        let (status, body) = render(ApiResponse::failure(
            StatusCode::SERVICE_UNAVAILABLE,
            "System unhealthy",
            json!({ "database": "disconnected" }),
        ))
        .await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            body,
            json!({
                "success": false,
                "statusCode": 503,
                "message": "System unhealthy",
                "data": { "database": "disconnected" }
            })
        );
    }

    #[tokio::test]
    async fn test_custom_status_is_mirrored() {
        let (status, body) = render(ApiResponse::new(
            StatusCode::ACCEPTED,
            "queued",
            Value::Null,
        ))
        .await;
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(body["statusCode"], 202);
        assert_eq!(body["success"], true);
    }
}
