use axum::extract::State;
use axum::Json;

use crate::item::{Item, ItemError, ItemResource};

pub async fn list_items(
    State(resource): State<ItemResource>,
) -> Result<Json<Vec<Item>>, ItemError> {
    resource.list().await.map(Json)
}
