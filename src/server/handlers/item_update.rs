use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::Json;

use crate::item::{Item, ItemError, ItemPayload, ItemResource};

/// Full replacement of `name` and `description`; both are required.
pub async fn update_item(
    State(resource): State<ItemResource>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Item>, ItemError> {
    let payload = ItemPayload::from_json(&body)?;
    resource.update(&id, payload).await.map(Json)
}
