//! HTTP handlers for the item API.
//!
//! Each handler extracts the request, calls into [`ItemResource`], and lets
//! [`ItemError`]'s `IntoResponse` impl render failures.
//!
//! [`ItemResource`]: crate::item::ItemResource
//! [`ItemError`]: crate::item::ItemError

mod item_create;
mod item_delete;
mod item_list;
mod item_read;
mod item_update;
mod method_not_allowed;

pub use item_create::create_item;
pub use item_delete::delete_item;
pub use item_list::list_items;
pub use item_read::get_item;
pub use item_update::update_item;
pub use method_not_allowed::{collection_method_not_allowed, member_method_not_allowed};
