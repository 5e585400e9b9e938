use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::item::{Item, ItemError, ItemPayload, ItemResource};

pub async fn create_item(
    State(resource): State<ItemResource>,
    body: Bytes,
) -> Result<(StatusCode, Json<Item>), ItemError> {
    let payload = ItemPayload::from_json(&body)?;
    let item = resource.create(payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}
