//! HTTP surface of the daemon: routes, error rendering, and middleware.

pub mod error_mapping;
pub mod handlers;
pub mod http_logging;
pub mod shutdown;
pub mod structured_error;

use axum::routing::get;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;

use crate::item::ItemResource;
use handlers::{
    collection_method_not_allowed, create_item, delete_item, get_item, list_items,
    member_method_not_allowed, update_item,
};
use http_logging::HttpLoggingLayer;
use structured_error::panic_response;

pub use error_mapping::ToHttpError;
pub use shutdown::shutdown_signal;
pub use structured_error::ErrorBody;

/// The item collection.
pub const COLLECTION_PATH: &str = "/api/items";
/// A single item, addressed by identifier.
pub const MEMBER_PATH: &str = "/api/items/:id";

/// Build the item API router over `resource`.
///
/// Unsupported methods on a known path get 405 with an `Allow` header;
/// unknown paths fall through to axum's 404. A panicking handler is turned
/// into a generic 500 so the server keeps serving.
#[must_use]
pub fn build_router(resource: ItemResource) -> Router {
    Router::new()
        .route(
            COLLECTION_PATH,
            get(list_items)
                .post(create_item)
                .fallback(collection_method_not_allowed),
        )
        .route(
            MEMBER_PATH,
            get(get_item)
                .put(update_item)
                .delete(delete_item)
                .fallback(member_method_not_allowed),
        )
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(HttpLoggingLayer)
        .with_state(resource)
}
