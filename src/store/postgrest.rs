//! Item store backed by a hosted table exposed through a `PostgREST`
//! endpoint (the REST surface of Supabase and similar services).

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Deserialize;

use super::{ItemStore, StoreError};
use crate::item::{Item, ItemFields, ItemId};

/// Table used when none is configured.
pub const DEFAULT_TABLE: &str = "items";

/// Ask `PostgREST` to echo affected rows back in the response body.
const RETURN_REPRESENTATION: &str = "return=representation";

/// Error body returned by `PostgREST` on a non-2xx response.
#[derive(Deserialize)]
struct PostgrestErrorBody {
    message: Option<String>,
}

/// Remote store reached over HTTP.
///
/// Authenticates every request with the service key, both as `apikey` and
/// as a bearer token. Concurrency control is left to the database.
pub struct PostgrestStore {
    client: Client,
    table_url: String,
    api_key: String,
}

impl PostgrestStore {
    pub fn new(base_url: &str, table: &str, api_key: &str) -> Result<Self, StoreError> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, base_url, table, api_key))
    }

    /// Use an existing HTTP client (shared connection pool, custom timeouts).
    #[must_use]
    pub fn with_client(client: Client, base_url: &str, table: &str, api_key: &str) -> Self {
        let table_url = format!("{}/rest/v1/{table}", base_url.trim_end_matches('/'));
        Self {
            client,
            table_url,
            api_key: api_key.to_string(),
        }
    }

    fn request(&self, method: Method) -> RequestBuilder {
        self.client
            .request(method, &self.table_url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn send(builder: RequestBuilder) -> Result<Vec<Item>, StoreError> {
        let response = builder.send().await?;
        read_rows(response).await
    }
}

fn id_filter(id: ItemId) -> [(&'static str, String); 1] {
    [("id", format!("eq.{id}"))]
}

/// Decode a response into rows, or the backend's rejection.
///
/// A body that cannot be read is a transport failure. Rows that do not have
/// the item shape (e.g. a table keyed by uuid) are reported as `Decode`.
async fn read_rows(response: Response) -> Result<Vec<Item>, StoreError> {
    let status = response.status();
    let body = response.bytes().await?;
    if status.is_success() {
        return serde_json::from_slice::<Vec<Item>>(&body).map_err(StoreError::Decode);
    }
    let message = serde_json::from_slice::<PostgrestErrorBody>(&body)
        .ok()
        .and_then(|parsed| parsed.message)
        .unwrap_or_else(|| status.to_string());
    Err(StoreError::Rejected { message })
}

#[async_trait]
impl ItemStore for PostgrestStore {
    async fn insert(&self, fields: ItemFields) -> Result<Item, StoreError> {
        let rows = Self::send(
            self.request(Method::POST)
                .header("Prefer", RETURN_REPRESENTATION)
                .json(&[&fields]),
        )
        .await?;
        rows.into_iter().next().ok_or_else(|| StoreError::Rejected {
            message: "insert returned no rows".to_string(),
        })
    }

    async fn list_all(&self) -> Result<Vec<Item>, StoreError> {
        Self::send(self.request(Method::GET).query(&[("select", "*")])).await
    }

    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>, StoreError> {
        let rows = Self::send(
            self.request(Method::GET)
                .query(&[("select", "*")])
                .query(&id_filter(id)),
        )
        .await?;
        Ok(rows.into_iter().next())
    }

    async fn update_by_id(
        &self,
        id: ItemId,
        fields: ItemFields,
    ) -> Result<Option<Item>, StoreError> {
        let rows = Self::send(
            self.request(Method::PATCH)
                .query(&id_filter(id))
                .header("Prefer", RETURN_REPRESENTATION)
                .json(&fields),
        )
        .await?;
        Ok(rows.into_iter().next())
    }

    async fn delete_by_id(&self, id: ItemId) -> Result<bool, StoreError> {
        let rows = Self::send(
            self.request(Method::DELETE)
                .query(&id_filter(id))
                .header("Prefer", RETURN_REPRESENTATION),
        )
        .await?;
        Ok(!rows.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_url_trims_trailing_slash() {
        let store = PostgrestStore::with_client(Client::new(), "https://db.example.co/", "items", "k");
        assert_eq!(store.table_url, "https://db.example.co/rest/v1/items");
    }

    #[test]
    fn test_custom_table() {
        let store = PostgrestStore::with_client(Client::new(), "http://localhost:54321", "inventory", "k");
        assert_eq!(store.table_url, "http://localhost:54321/rest/v1/inventory");
    }

    #[test]
    fn test_id_filter_uses_eq_operator() {
        assert_eq!(id_filter(ItemId::new(12)), [("id", "eq.12".to_string())]);
    }
}
