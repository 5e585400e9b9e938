use std::any::Any;

use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use serde::Serialize;
use tracing::error;

/// Generic 500 message for failures nothing anticipated.
pub const INTERNAL_ERROR_MESSAGE: &str = "Terjadi kesalahan server.";

/// JSON body of every error response: a human-readable `message`, plus the
/// backend's `error` detail for store failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorBody {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
        }
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.error = Some(detail.into());
        self
    }
}

/// Response used when a request handler panics.
///
/// Installed through `CatchPanicLayer::custom`, so the process keeps serving.
#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    error!(panic = %detail, "Request handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody::new(INTERNAL_ERROR_MESSAGE)),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_json_format() {
        let parsed = serde_json::to_value(ErrorBody::new("Item tidak ditemukan.")).unwrap();
        assert_eq!(parsed["message"], "Item tidak ditemukan.");
        assert!(parsed.get("error").is_none());
    }

    #[test]
    fn test_error_body_with_detail() {
        let body = ErrorBody::new("Gagal menambah item").with_detail("duplicate key");
        let parsed = serde_json::to_value(body).unwrap();
        assert_eq!(parsed["message"], "Gagal menambah item");
        assert_eq!(parsed["error"], "duplicate key");
    }

    #[tokio::test]
    async fn test_panic_response_is_generic_500() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed, serde_json::json!({"message": INTERNAL_ERROR_MESSAGE}));
    }
}
