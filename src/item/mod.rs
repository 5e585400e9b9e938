//! The item domain: the record type, request validation, and the resource
//! that turns CRUD calls into store operations.

pub mod core;
pub mod resource;
pub mod validation;

pub use self::core::error::{ItemError, StoreOperation};
pub use self::core::id::ItemId;
pub use self::core::types::{Item, ItemFields};
pub use resource::ItemResource;
pub use validation::ItemPayload;
