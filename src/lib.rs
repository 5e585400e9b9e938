// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

pub mod config;
pub mod cors;
pub mod item;
pub mod logging;
pub mod server;
pub mod store;

// Re-export commonly used types
pub use config::{
    load_user_config, resolve_store_settings, ConfigError, StoreBackend, StoreOverrides,
    StoreSettings, UserConfig,
};
pub use item::{Item, ItemError, ItemFields, ItemId, ItemPayload, ItemResource, StoreOperation};
pub use server::{build_router, shutdown_signal};
pub use store::{build_store, ItemStore, MemoryStore, PostgrestStore, StoreError};
