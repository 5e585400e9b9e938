//! User-level configuration loaded from `~/.item-daemon/config.toml`.
//!
//! The file is optional; if it does not exist all fields fall back to their
//! `Default` values. Secrets (the hosted store key) are never read from it.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use super::StoreBackend;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum UserConfigError {
    #[error("Failed to read user config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse user config TOML: {0}")]
    Toml(Box<toml::de::Error>),
}

impl From<toml::de::Error> for UserConfigError {
    fn from(err: toml::de::Error) -> Self {
        UserConfigError::Toml(Box::new(err))
    }
}

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// Store selection (`[store]` table in the TOML file).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// `memory` or `postgrest`.
    #[serde(default)]
    pub backend: Option<StoreBackend>,
    /// Base URL of the hosted project, e.g. `https://xyz.supabase.co`.
    #[serde(default)]
    pub url: Option<String>,
    /// Table holding the items.
    #[serde(default)]
    pub table: Option<String>,
    /// Preload the demo items into the memory store.
    #[serde(default)]
    pub seed: Option<bool>,
}

/// Top-level user configuration.
///
/// All fields are optional at the TOML level; missing fields resolve to their
/// `Default` values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserConfig {
    #[serde(default)]
    pub store: StoreConfig,
}

// ---------------------------------------------------------------------------
// Loader
// ---------------------------------------------------------------------------

/// Resolve the canonical path for the user config file.
#[must_use]
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".item-daemon").join("config.toml"))
}

/// Load the user configuration from its canonical location.
///
/// Returns `Ok(UserConfig::default())` if the home directory is unknown or
/// the file does not exist.
pub fn load_user_config() -> Result<UserConfig, UserConfigError> {
    let Some(path) = user_config_path() else {
        warn!("Could not determine user config directory; using defaults");
        return Ok(UserConfig::default());
    };
    load_user_config_from(&path)
}

/// Load the user configuration from an explicit path.
pub fn load_user_config_from(path: &Path) -> Result<UserConfig, UserConfigError> {
    if !path.exists() {
        debug!(
            "User config not found at {}; using defaults",
            path.display()
        );
        return Ok(UserConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: UserConfig = toml::from_str(&content)?;
    debug!("Loaded user config from {}", path.display());
    Ok(config)
}
