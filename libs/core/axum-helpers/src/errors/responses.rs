//! Reusable OpenAPI response components for error envelopes.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Malformed identifier",
    content_type = "application/json",
    example = json!({
        "success": false,
        "statusCode": 400,
        "message": "Invalid user id",
        "data": { "identifier": "123abc" }
    })
)]
pub struct BadRequestIdentifierResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Request body is malformed or fails validation",
    content_type = "application/json",
    example = json!({
        "success": false,
        "statusCode": 422,
        "message": "Request validation failed",
        "data": {
            "errors": {
                "password": [{ "code": "length", "message": null }]
            }
        }
    })
)]
pub struct UnprocessableEntityResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "success": false,
        "statusCode": 404,
        "message": "User not found with identifier: 68eeafce05740b9d36aab307",
        "data": { "resource": "User", "identifier": "68eeafce05740b9d36aab307" }
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource already exists",
    content_type = "application/json",
    example = json!({
        "success": false,
        "statusCode": 409,
        "message": "User already exists with: email juan@email.com",
        "data": { "resource": "User", "identifier": "juan@email.com" }
    })
)]
pub struct ConflictResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "success": false,
        "statusCode": 500,
        "message": "An internal server error occurred",
        "data": null
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);
