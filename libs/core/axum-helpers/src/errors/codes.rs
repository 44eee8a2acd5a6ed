//! Numeric error codes attached to error logs.
//!
//! Codes appear in logs only, never in response bodies.

/// Error classification used in structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request body failed field validation
    ValidationError,

    /// Path identifier is not in the expected format
    InvalidIdentifier,

    /// Request body is not parseable JSON for the target type
    InvalidJson,

    /// Requested resource was not found
    NotFound,

    /// Request conflicts with existing state (e.g. a duplicate email)
    Conflict,

    /// No route matches the request path
    RouteNotFound,

    /// The path exists but does not accept the request method
    MethodNotAllowed,

    // Server errors
    /// An unexpected internal server error occurred
    InternalError,

    // Database errors (2000-2999)
    /// The document store rejected or failed an operation
    DatabaseError,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier.
    ///
    /// ```rust
    /// use axum_helpers::errors::ErrorCode;
    ///
    /// assert_eq!(ErrorCode::InvalidIdentifier.as_str(), "INVALID_IDENTIFIER");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidIdentifier => "INVALID_IDENTIFIER",
            Self::InvalidJson => "INVALID_JSON",
            Self::NotFound => "NOT_FOUND",
            Self::Conflict => "CONFLICT",
            Self::RouteNotFound => "ROUTE_NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::InternalError => "INTERNAL_ERROR",
            Self::DatabaseError => "DATABASE_ERROR",
        }
    }

    /// Integer code for log fields.
    ///
    /// - 1000-1999: client errors and generic server errors
    /// - 2000-2999: database errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidIdentifier => 1002,
            Self::InvalidJson => 1003,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::Conflict => 1008,
            Self::RouteNotFound => 1012,
            Self::MethodNotAllowed => 1013,
            Self::DatabaseError => 2003,
        }
    }

    /// Message used when the caller supplies none, and for every 5xx
    /// response so internal detail stays in the logs.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidIdentifier => "Invalid identifier",
            Self::InvalidJson => "Request body is not valid JSON",
            Self::NotFound => "Resource not found",
            Self::Conflict => "Resource already exists",
            Self::RouteNotFound => "The requested resource was not found",
            Self::MethodNotAllowed => "Method not allowed",
            Self::InternalError => "An internal server error occurred",
            Self::DatabaseError => "An internal server error occurred",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
