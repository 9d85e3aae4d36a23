// Centralized error handling for the service layer

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

/// Every service-layer failure is one of these; handlers never see a raw
/// exception from below. Each variant maps to a status code and a
/// `{success: false, error}` JSON body.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Missing or malformed form fields, recovered locally by the caller.
    #[error("{0}")]
    Validation(String),

    /// Missing/expired session or invalid credentials.
    #[error("{0}")]
    Auth(String),

    /// Duplicate registration number.
    #[error("{0}")]
    Conflict(String),

    /// Network or backing-store failure, message surfaced verbatim where
    /// the backend provided one.
    #[error("{0}")]
    Store(String),

    /// Malformed persisted state. The session store hardens this to
    /// "no session" before it ever reaches a caller.
    #[error("{0}")]
    Parse(String),
}

impl ServiceError {
    pub fn invalid_credentials() -> Self {
        ServiceError::Auth("Invalid registration number or password".to_string())
    }

    pub fn session_expired() -> Self {
        ServiceError::Auth("Your session has expired. Please login again.".to_string())
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        use crate::models::api::ErrorResponse;

        let status = match &self {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::Auth(_) => StatusCode::UNAUTHORIZED,
            ServiceError::Conflict(_) => StatusCode::CONFLICT,
            ServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServiceError::Parse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            Json(ErrorResponse {
                success: false,
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                ServiceError::Validation("bad".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (ServiceError::Auth("no".to_string()), StatusCode::UNAUTHORIZED),
            (
                ServiceError::Conflict("dup".to_string()),
                StatusCode::CONFLICT,
            ),
            (
                ServiceError::Store("down".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ServiceError::Parse("junk".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_invalid_credentials_message() {
        let err = ServiceError::invalid_credentials();
        assert_eq!(err.to_string(), "Invalid registration number or password");
    }

    #[test]
    fn test_session_expired_message() {
        let err = ServiceError::session_expired();
        assert_eq!(
            err.to_string(),
            "Your session has expired. Please login again."
        );
    }
}
