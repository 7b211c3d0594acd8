/// Error types for Post Service
///
/// This module defines all error types that can occur in the service.
/// Errors are converted to appropriate HTTP responses for API clients.
/// Nothing propagates past the handler boundary; the process stays up.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use std::fmt;

/// Result type for post-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Debug)]
pub enum AppError {
    /// The store rejected the supplied fields or id
    ValidationError(String),

    /// No record matches the given id (expected outcome, not a failure)
    NotFound(String),

    /// The store could not be reached or failed unexpectedly
    DatabaseError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let error_msg = self.to_string();

        // One log entry per failed request. A missing id is an expected
        // outcome and stays at info level.
        match self {
            AppError::NotFound(_) => tracing::info!(status = status.as_u16(), "{}", error_msg),
            _ => tracing::error!(status = status.as_u16(), "{}", error_msg),
        }

        HttpResponse::build(status).json(serde_json::json!({
            "error": error_msg,
            "status": status.as_u16(),
        }))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            // Constraint and data-shape rejections are the caller's fault.
            sqlx::Error::Database(db) => match db.kind() {
                sqlx::error::ErrorKind::UniqueViolation
                | sqlx::error::ErrorKind::ForeignKeyViolation
                | sqlx::error::ErrorKind::NotNullViolation
                | sqlx::error::ErrorKind::CheckViolation => {
                    AppError::ValidationError(db.to_string())
                }
                _ => AppError::DatabaseError(db.to_string()),
            },
            other => AppError::DatabaseError(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

/// Routes malformed JSON bodies through the validation error path, so the
/// response carries the standard `{"error", "status"}` body and the failure
/// is logged like any other 400. Registered via `web::JsonConfig`.
pub fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    AppError::ValidationError(err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_error_taxonomy() {
        assert_eq!(
            AppError::ValidationError("bad fields".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("no such post".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::DatabaseError("connection refused".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn connectivity_failures_map_to_database_error() {
        let err: AppError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, AppError::DatabaseError(_)));
    }

    #[test]
    fn display_includes_detail() {
        let err = AppError::NotFound("post 42".into());
        assert_eq!(err.to_string(), "Not found: post 42");
    }
}
