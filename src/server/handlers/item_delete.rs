use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::item::{ItemError, ItemResource};

pub async fn delete_item(
    State(resource): State<ItemResource>,
    Path(id): Path<String>,
) -> Result<StatusCode, ItemError> {
    resource.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
