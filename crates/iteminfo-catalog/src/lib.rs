//! Catalogue lookup collaborators for the item information service.
//!
//! Request handlers never own catalogue data. They query a [`CatalogLookup`]
//! implementation read-only to classify an identifier and to fetch the display
//! fields rendered into a reply.
//!
//! Two implementations ship with the crate:
//!
//! - [`StaticCatalog`] classifies identifiers by suffix (`BK` for books, `MV`
//!   for movies) and returns fixed display values.
//! - [`TableCatalog`] holds explicit [`CatalogRecord`]s, typically loaded from
//!   a JSON document on disk.
//!
//! # Example
//!
//! ```
//! use iteminfo_catalog::{CatalogLookup, ItemCategory, StaticCatalog};
//!
//! let catalog = StaticCatalog::new();
//! assert_eq!(catalog.category("1234BK"), ItemCategory::Book);
//! assert_eq!(catalog.category("013579"), ItemCategory::Unknown);
//! ```

mod error;
mod lookup;
mod static_catalog;
mod table;

pub use self::error::CatalogError;
pub use self::lookup::{CatalogLookup, ItemCategory};
pub use self::static_catalog::StaticCatalog;
pub use self::table::{CatalogRecord, TableCatalog, UNPRICED};
