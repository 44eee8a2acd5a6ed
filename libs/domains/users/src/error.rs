use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, ErrorContext};
use thiserror::Error;

/// Resource name reported in error messages and envelopes.
pub const USER_RESOURCE: &str = "User";

#[derive(Debug, Error)]
pub enum UserError {
    #[error("Invalid user id")]
    InvalidIdentifier { identifier: String },

    #[error("{resource} already exists with: {field} {identifier}")]
    AlreadyExists {
        resource: &'static str,
        field: &'static str,
        identifier: String,
    },

    #[error("{resource} not found with identifier: {identifier}")]
    NotFound {
        resource: &'static str,
        identifier: String,
    },

    #[error("Password hashing failed: {0}")]
    HashingUnavailable(String),

    #[error("User store unavailable: {0}")]
    StoreUnavailable(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl UserError {
    pub fn not_found(identifier: impl Into<String>) -> Self {
        UserError::NotFound {
            resource: USER_RESOURCE,
            identifier: identifier.into(),
        }
    }

    pub fn email_taken(email: impl Into<String>) -> Self {
        UserError::AlreadyExists {
            resource: USER_RESOURCE,
            field: "email",
            identifier: email.into(),
        }
    }
}

/// Convert UserError to AppError for standardized error responses
impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        let message = err.to_string();
        match err {
            UserError::InvalidIdentifier { identifier } => {
                AppError::bad_request(message, ErrorContext::identifier(identifier))
            }
            UserError::AlreadyExists {
                resource,
                identifier,
                ..
            } => AppError::conflict(message, ErrorContext::resource(resource, identifier)),
            UserError::NotFound {
                resource,
                identifier,
            } => AppError::not_found(message, ErrorContext::resource(resource, identifier)),
            UserError::HashingUnavailable(detail) => AppError::InternalServerError(detail),
            UserError::StoreUnavailable(detail) => AppError::Database(detail),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

impl From<mongodb::error::Error> for UserError {
    fn from(err: mongodb::error::Error) -> Self {
        UserError::StoreUnavailable(err.to_string())
    }
}
