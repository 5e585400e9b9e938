use axum::extract::{Path, State};
use axum::Json;

use crate::item::{Item, ItemError, ItemResource};

pub async fn get_item(
    State(resource): State<ItemResource>,
    Path(id): Path<String>,
) -> Result<Json<Item>, ItemError> {
    resource.get(&id).await.map(Json)
}
