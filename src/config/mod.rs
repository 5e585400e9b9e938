//! Startup configuration: store selection resolved from CLI/env overrides
//! and the optional user config file.

mod user_config;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::DEFAULT_TABLE;

pub use user_config::{
    load_user_config, load_user_config_from, user_config_path, StoreConfig, UserConfig,
    UserConfigError,
};

/// Which backend holds the items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Process-local map; contents are lost on restart.
    #[default]
    Memory,
    /// Hosted table behind a `PostgREST` endpoint.
    Postgrest,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("The postgrest store needs a base URL (--store-url or ITEM_DAEMON_STORE_URL)")]
    MissingStoreUrl,

    #[error("The postgrest store needs a service key (--store-key or ITEM_DAEMON_STORE_KEY)")]
    MissingStoreKey,
}

/// Values given on the command line or through the environment.
///
/// These win over the user config file.
#[derive(Debug, Clone, Default)]
pub struct StoreOverrides {
    pub backend: Option<StoreBackend>,
    pub url: Option<String>,
    pub table: Option<String>,
    pub api_key: Option<String>,
    pub seed: Option<bool>,
}

/// Connection details for the hosted store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostgrestSettings {
    pub url: String,
    pub table: String,
    pub api_key: String,
}

/// Fully resolved store selection. `postgrest: None` selects the memory store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreSettings {
    pub seed: bool,
    pub postgrest: Option<PostgrestSettings>,
}

/// Merge overrides with the user config file, overrides first.
pub fn resolve_store_settings(
    overrides: StoreOverrides,
    config: &UserConfig,
) -> Result<StoreSettings, ConfigError> {
    let backend = overrides.backend.or(config.store.backend).unwrap_or_default();
    let seed = overrides.seed.or(config.store.seed).unwrap_or(false);

    let postgrest = match backend {
        StoreBackend::Memory => None,
        StoreBackend::Postgrest => {
            let url = overrides
                .url
                .or_else(|| config.store.url.clone())
                .filter(|url| !url.is_empty())
                .ok_or(ConfigError::MissingStoreUrl)?;
            let api_key = overrides
                .api_key
                .filter(|key| !key.is_empty())
                .ok_or(ConfigError::MissingStoreKey)?;
            let table = overrides
                .table
                .or_else(|| config.store.table.clone())
                .unwrap_or_else(|| DEFAULT_TABLE.to_string());
            Some(PostgrestSettings {
                url,
                table,
                api_key,
            })
        }
    };

    Ok(StoreSettings { seed, postgrest })
}
