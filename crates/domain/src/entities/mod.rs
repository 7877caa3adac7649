//! Domain entities

pub mod catalog;
pub mod character;

pub use catalog::{find_by_name, CatalogEntry, CatalogKind};
pub use character::{CatalogRef, Character};
