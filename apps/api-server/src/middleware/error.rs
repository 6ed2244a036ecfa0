//! Error handling - RFC 7807 compliant responses.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use geoblog_shared::ErrorResponse;
use thiserror::Error;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation errors: {0:?}")]
    Validation(Vec<String>),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// One "`<field>` is required" entry per missing field.
    pub fn missing_fields(fields: &[&str]) -> Self {
        AppError::Validation(
            fields
                .iter()
                .map(|field| format!("{field} is required"))
                .collect(),
        )
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::Validation(errors) => {
                ErrorResponse::new(400, "Validation Failed").with_detail(errors.join(", "))
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl From<geoblog_core::DomainError> for AppError {
    fn from(err: geoblog_core::DomainError) -> Self {
        match err {
            geoblog_core::DomainError::Validation(msg) => AppError::Validation(vec![msg]),
        }
    }
}

impl From<geoblog_core::error::RepoError> for AppError {
    fn from(err: geoblog_core::error::RepoError) -> Self {
        match err {
            geoblog_core::error::RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

/// Turns malformed or mistyped JSON bodies into a problem response
/// instead of actix's plain-text default.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message() {
        let err = AppError::missing_fields(&["lat", "long"]);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        match err {
            AppError::Validation(errors) => {
                assert_eq!(errors, vec!["lat is required", "long is required"])
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_domain_validation_is_validation_problem() {
        let err: AppError = geoblog_core::DomainError::Validation("user is required".into()).into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let resp = err.error_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        match err {
            AppError::Validation(errors) => assert_eq!(errors, vec!["user is required"]),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_repo_errors_hide_details() {
        let err: AppError = geoblog_core::error::RepoError::Query("syntax error".into()).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.to_string().contains("syntax"));
    }
}
