//! Error types shared across services and routes.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// Failure talking to a third-party data provider.
///
/// Callers never surface these to clients; every call site logs the error
/// and substitutes its fallback data.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("{0} is not configured")]
    NotConfigured(&'static str),

    #[error("request to {provider} failed: {source}")]
    Http {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} returned status {status}")]
    Status { provider: &'static str, status: u16 },

    #[error("unexpected response from {provider}: {message}")]
    Unexpected {
        provider: &'static str,
        message: String,
    },

    #[error("authentication with {provider} failed: {message}")]
    Auth {
        provider: &'static str,
        message: String,
    },
}

impl ProviderError {
    pub fn http(provider: &'static str, source: reqwest::Error) -> Self {
        Self::Http { provider, source }
    }

    pub fn unexpected<S: Into<String>>(provider: &'static str, message: S) -> Self {
        Self::Unexpected {
            provider,
            message: message.into(),
        }
    }
}

/// Malformed itinerary text returned by the language model.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("no JSON array or object found in response")]
    NoJson,

    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("expected a JSON array of days")]
    NotAnArray,

    #[error("day {index} is malformed: {message}")]
    InvalidDay { index: usize, message: String },
}

/// One rejected request field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Errors rendered to HTTP clients as `{ "success": false, "message": ... }`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Validation failed")]
    InvalidFields(Vec<FieldError>),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Message safe to show to the client.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Database(_) => "Server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidFields(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Database(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("{}", self);
        }
        let body = match self {
            ApiError::InvalidFields(errors) => json!({
                "success": false,
                "message": self.user_message(),
                "errors": errors,
            }),
            _ => json!({
                "success": false,
                "message": self.user_message(),
            }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::validation("bad").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Unauthorized("no".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::internal("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_message_is_passed_through() {
        let err = ApiError::validation("Missing required fields");
        assert_eq!(err.user_message(), "Missing required fields");
    }

    #[test]
    fn test_field_errors_are_listed() {
        let err = ApiError::InvalidFields(vec![FieldError {
            field: "password",
            message: "Password must be at least 6 characters long",
        }]);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.user_message(), "Validation failed");
    }

    #[test]
    fn test_provider_error_display() {
        let err = ProviderError::Status {
            provider: "amadeus",
            status: 503,
        };
        assert_eq!(err.to_string(), "amadeus returned status 503");
        assert_eq!(
            ProviderError::NotConfigured("google_maps").to_string(),
            "google_maps is not configured"
        );
    }
}
