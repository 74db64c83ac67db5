// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Every failure the page or the HBNB API client can hit
/// Each variant maps to appropriate HTTP status code and error response
#[derive(Error, Debug)]
pub enum PageError {
    #[error("HBNB API unreachable: {0}")]
    Unreachable(String),

    #[error("HBNB API error: {0}")]
    ExternalApiError(String),

    #[error("Invalid response from HBNB API: {0}")]
    InvalidResponse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl PageError {
    fn code(&self) -> (StatusCode, &'static str) {
        match self {
            PageError::Unreachable(_) => (StatusCode::BAD_GATEWAY, "API_UNREACHABLE"),
            PageError::ExternalApiError(_) => (StatusCode::BAD_GATEWAY, "EXTERNAL_API_ERROR"),
            PageError::InvalidResponse(_) => (StatusCode::BAD_GATEWAY, "INVALID_RESPONSE"),
            PageError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "INVALID_INPUT"),
            PageError::Configuration(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "CONFIGURATION_ERROR")
            }
        }
    }
}

/// Convert PageError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON responses
impl ResponseError for PageError {
    fn error_response(&self) -> HttpResponse {
        let (status, error_code) = self.code();

        let body = json!({
            "error": {
                "code": error_code,
                "message": self.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(status).json(body)
    }

    fn status_code(&self) -> StatusCode {
        self.code().0
    }
}
