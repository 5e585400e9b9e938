use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;

use crate::item::{ItemError, StoreOperation};
use crate::server::structured_error::{ErrorBody, INTERNAL_ERROR_MESSAGE};

pub const VALIDATION_MESSAGE: &str = "Nama dan deskripsi harus diisi.";
pub const NOT_FOUND_MESSAGE: &str = "Item tidak ditemukan.";

/// Trait for mapping domain errors to an HTTP status and JSON error body.
pub trait ToHttpError {
    fn to_http_error(&self) -> (StatusCode, ErrorBody);
}

/// Message for a store failure during `operation`.
#[must_use]
pub fn store_failure_message(operation: StoreOperation) -> &'static str {
    match operation {
        StoreOperation::Fetch => "Gagal mengambil item",
        StoreOperation::Insert => "Gagal menambah item",
        StoreOperation::Update => "Gagal memperbarui item",
        StoreOperation::Delete => "Gagal menghapus item",
    }
}

impl ToHttpError for ItemError {
    fn to_http_error(&self) -> (StatusCode, ErrorBody) {
        match self {
            ItemError::Validation => (StatusCode::BAD_REQUEST, ErrorBody::new(VALIDATION_MESSAGE)),
            ItemError::NotFound(_) => (StatusCode::NOT_FOUND, ErrorBody::new(NOT_FOUND_MESSAGE)),
            ItemError::Store { source, .. } if source.is_unexpected() => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::new(INTERNAL_ERROR_MESSAGE),
            ),
            ItemError::Store { operation, source } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::new(store_failure_message(*operation)).with_detail(source.to_string()),
            ),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let (status, body) = self.to_http_error();
        (status, Json(body)).into_response()
    }
}
