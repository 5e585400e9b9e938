use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};

pub const COLLECTION_METHODS: &str = "GET, POST";
pub const MEMBER_METHODS: &str = "GET, PUT, DELETE";

#[allow(clippy::unused_async)]
pub async fn collection_method_not_allowed(method: Method) -> Response {
    method_not_allowed(&method, COLLECTION_METHODS)
}

#[allow(clippy::unused_async)]
pub async fn member_method_not_allowed(method: Method) -> Response {
    method_not_allowed(&method, MEMBER_METHODS)
}

/// 405 with an `Allow` header listing what the path supports.
fn method_not_allowed(method: &Method, allowed: &'static str) -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, allowed)],
        format!("Method {method} Not Allowed"),
    )
        .into_response()
}
