//! Unified service error type
//!
//! `ApiError` covers the full error taxonomy of the service and knows how to
//! render itself as an HTTP response, so handlers can use `?` throughout.
//! Store errors (`sqlx::Error`) are translated in one place via `From`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Convenience alias for handler results
pub type ApiResult<T> = Result<T, ApiError>;

/// Service error taxonomy
#[derive(Debug, Error)]
pub enum ApiError {
    /// Unknown identifier (404)
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// Missing required fields (400)
    #[error("{message}")]
    Validation { message: String },

    /// Uniqueness constraint violated (409)
    #[error("{resource} already exists")]
    Conflict { resource: String },

    /// Datastore failure (500)
    #[error("database error: {message}")]
    Database { message: String },
}

impl ApiError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn conflict(resource: impl Into<String>) -> Self {
        Self::Conflict {
            resource: resource.into(),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation { .. } => "VALIDATION",
            Self::Conflict { .. } => "CONFLICT",
            Self::Database { .. } => "DATABASE",
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::RowNotFound => Self::not_found("record"),
            sqlx::Error::Database(db)
                if matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation) =>
            {
                Self::conflict("email")
            }
            _ => {
                tracing::error!(error = %e, "datastore error");
                Self::Database {
                    message: e.to_string(),
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        // Internal failures keep their detail in the log, not the response.
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            "internal server error".to_string()
        } else {
            self.to_string()
        };

        let body = Json(json!({
            "code": self.code(),
            "message": message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_the_taxonomy() {
        assert_eq!(
            ApiError::not_found("employee 1").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::validation("missing required fields: email").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::conflict("email").status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::Database {
                message: "boom".into()
            }
            .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn row_not_found_maps_to_not_found() {
        let err: ApiError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, ApiError::NotFound { .. }));
    }
}
