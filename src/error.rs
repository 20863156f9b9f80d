//! Error types for the Libra catalog service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Numeric error codes carried in every error response body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    BadValue = 2,
    NoSuchBook = 3,
    BookAlreadyExists = 4,
    NoSuchReference = 5,
    DbUnavailable = 6,
    DbFailure = 7,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("Backend error: {0}")]
    BackendError(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Turn a failed name lookup into an invalid reference.
    ///
    /// Only `NotFound` is rewritten; store failures keep their class so the
    /// caller can still tell an outage from a bad name.
    pub fn into_invalid_reference(self) -> Self {
        match self {
            AppError::NotFound(msg) => AppError::InvalidReference(msg),
            other => other,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::NotFound(_) => ErrorCode::NoSuchBook,
            AppError::Conflict(_) => ErrorCode::BookAlreadyExists,
            AppError::InvalidReference(_) => ErrorCode::NoSuchReference,
            AppError::Validation(_) => ErrorCode::BadValue,
            AppError::BackendUnavailable(_) => ErrorCode::DbUnavailable,
            AppError::BackendError(_) => ErrorCode::DbFailure,
            AppError::Internal(_) => ErrorCode::Failure,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::InvalidReference(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::BackendUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::BackendError(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// SQLSTATE classes meaning the server could not serve the statement at all:
// connection exception, insufficient resources, operator intervention.
const UNAVAILABLE_SQLSTATE_CLASSES: [&str; 3] = ["08", "53", "57"];

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict(db.message().to_string())
            }
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                AppError::InvalidReference(db.message().to_string())
            }
            sqlx::Error::Database(db) if db.is_check_violation() => {
                AppError::Validation(db.message().to_string())
            }
            sqlx::Error::Database(db) => {
                let unavailable = db
                    .code()
                    .map(|code| UNAVAILABLE_SQLSTATE_CLASSES.iter().any(|class| code.starts_with(class)))
                    .unwrap_or(false);
                if unavailable {
                    AppError::BackendUnavailable(err.to_string())
                } else {
                    AppError::BackendError(err.to_string())
                }
            }
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => AppError::BackendUnavailable(err.to_string()),
            _ => AppError::BackendError(err.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();
        let message = match &self {
            AppError::NotFound(msg)
            | AppError::Conflict(msg)
            | AppError::InvalidReference(msg)
            | AppError::Validation(msg) => msg.clone(),
            AppError::BackendUnavailable(msg) => {
                tracing::error!("Database unavailable: {}", msg);
                "Database unavailable".to_string()
            }
            AppError::BackendError(msg) => {
                tracing::error!("Database error: {}", msg);
                "Database error".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error".to_string()
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_becomes_invalid_reference() {
        let err = AppError::NotFound("Author 'Nobody' not found".to_string()).into_invalid_reference();
        assert!(matches!(err, AppError::InvalidReference(ref msg) if msg.contains("Nobody")));
    }

    #[test]
    fn test_backend_unavailable_is_not_rewritten() {
        let err = AppError::BackendUnavailable("connection refused".to_string()).into_invalid_reference();
        assert!(matches!(err, AppError::BackendUnavailable(_)));
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::NotFound(String::new()).status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::Conflict(String::new()).status(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::InvalidReference(String::new()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::BackendUnavailable(String::new()).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::BackendError(String::new()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_pool_timeout_is_unavailable() {
        let err = AppError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, AppError::BackendUnavailable(_)));
    }

    #[test]
    fn test_row_decode_failure_is_backend_error() {
        let err = AppError::from(sqlx::Error::ColumnNotFound("pbYear".to_string()));
        assert!(matches!(err, AppError::BackendError(_)));
    }
}
