//! # Error Handling
//!
//! HTTP-facing error type for the gloss server and its mapping to JSON
//! responses.
//!
//! ## JSON Response Format:
//! ```json
//! {
//!   "error": {
//!     "type": "dictionary_unavailable",
//!     "message": "dictionary source not found: data/isl_gloss.json",
//!     "timestamp": "2025-01-01T12:00:00Z"
//!   }
//! }
//! ```
//!
//! ## Status Mapping:
//! - `BadRequest` / `ValidationError` → 400
//! - `NotFound` → 404
//! - `DictionaryUnavailable` → 503

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use sign_gloss::DictionaryLoadError;
use std::fmt;

/// Errors returned from request handlers.
#[derive(Debug)]
pub enum AppError {
    /// Client sent malformed data
    BadRequest(String),

    /// Requested resource does not exist
    NotFound(String),

    /// Input was well-formed but failed a limit or rule
    ValidationError(String),

    /// The sign dictionary could not be loaded; nothing can be translated
    DictionaryUnavailable(String),
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, &str) {
        match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.as_str()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.as_str()),
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, "validation_error", msg.as_str()),
            AppError::DictionaryUnavailable(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, "dictionary_unavailable", msg.as_str())
            }
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::DictionaryUnavailable(msg) => write!(f, "Dictionary unavailable: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.parts().0
    }

    fn error_response(&self) -> HttpResponse {
        let (status, error_type, message) = self.parts();

        HttpResponse::build(status).json(json!({
            "error": {
                "type": error_type,
                "message": message,
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        }))
    }
}

impl From<DictionaryLoadError> for AppError {
    fn from(err: DictionaryLoadError) -> Self {
        AppError::DictionaryUnavailable(err.to_string())
    }
}

/// JSON bodies are client input, so parse failures are 400s.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::BadRequest(format!("JSON parsing error: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::BadRequest("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::NotFound("x".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::ValidationError("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::DictionaryUnavailable("x".into()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_dictionary_error_maps_to_503() {
        let err: AppError = DictionaryLoadError::Missing {
            path: "data/isl_gloss.json".to_string(),
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(err.to_string().contains("data/isl_gloss.json"));
    }

    #[test]
    fn test_json_error_is_bad_request() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: AppError = parse_err.into();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
