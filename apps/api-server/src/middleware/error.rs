//! Error handling middleware.

use actix_web::{HttpRequest, HttpResponse, ResponseError, error::JsonPayloadError, http::StatusCode};
use blog_core::PersistenceError;
use blog_shared::ErrorResponse;
use std::fmt;

/// Application-level error type.
///
/// Storage failures of every kind become `Internal`, which answers with a
/// bare 500 and keeps the cause in the logs.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::BadRequest(detail) => {
                HttpResponse::build(self.status_code()).json(ErrorResponse::bad_request(detail))
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                HttpResponse::build(self.status_code()).finish()
            }
        }
    }
}

impl From<PersistenceError> for AppError {
    fn from(err: PersistenceError) -> Self {
        if let PersistenceError::Validation(msg) = &err {
            tracing::warn!("Post rejected by repository: {}", msg);
        }
        AppError::Internal(err.to_string())
    }
}

/// Rejects bodies the JSON extractor cannot parse.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use actix_web::body::MessageBody;

    use super::*;

    #[test]
    fn test_every_persistence_error_is_internal() {
        let errors = [
            PersistenceError::Validation("`title` is required".to_string()),
            PersistenceError::not_found("507asdghajsdhjgasd"),
            PersistenceError::Connection("server selection timeout".to_string()),
            PersistenceError::Query("write rejected".to_string()),
        ];

        for err in errors {
            let app_err = AppError::from(err);
            assert_eq!(app_err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

            let body = app_err.error_response().into_body().try_into_bytes().unwrap();
            assert!(body.is_empty());
        }
    }

    #[test]
    fn test_bad_request_carries_problem_details() {
        let response = AppError::BadRequest("expected value".to_string()).error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response.into_body().try_into_bytes().unwrap();
        let problem: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(problem.status, 400);
        assert_eq!(problem.detail.as_deref(), Some("expected value"));
    }
}
