//! Core item domain types.

pub mod error;
pub mod id;
pub mod types;
