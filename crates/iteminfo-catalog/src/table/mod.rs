//! Table-backed catalogue loaded from explicit records.
//!
//! The [`TableCatalog`] stores [`CatalogRecord`]s keyed by identifier.
//! Identifiers missing from the table classify as
//! [`ItemCategory::Unknown`](crate::ItemCategory::Unknown) and report
//! [`UNPRICED`] for both prices. Duplicate and empty identifiers are rejected
//! at load time.

use std::collections::HashMap;
use std::fs;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CatalogError;
use crate::lookup::{CatalogLookup, ItemCategory};

/// Price reported for identifiers without a catalogue record.
pub const UNPRICED: &str = "0.00";

const CATALOG_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::table");

/// A single catalogue entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
    /// Catalogue identifier.
    pub id: String,
    /// Classification of the item.
    #[serde(default)]
    pub category: ItemCategory,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// ISBN, meaningful for books.
    #[serde(default)]
    pub isbn: String,
    /// Content rating, meaningful for movies.
    #[serde(default)]
    pub rating: String,
    /// Current selling price.
    #[serde(default = "unpriced")]
    pub price: String,
    /// Listed (catalogue) price.
    #[serde(default = "unpriced")]
    pub list_price: String,
}

fn unpriced() -> String {
    UNPRICED.to_owned()
}

impl CatalogRecord {
    /// Creates a record with empty display fields and unset prices.
    #[must_use]
    pub fn new(id: impl Into<String>, category: ItemCategory) -> Self {
        Self {
            id: id.into(),
            category,
            title: String::new(),
            isbn: String::new(),
            rating: String::new(),
            price: unpriced(),
            list_price: unpriced(),
        }
    }

    /// Sets the display title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the ISBN.
    #[must_use]
    pub fn with_isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = isbn.into();
        self
    }

    /// Sets the content rating.
    #[must_use]
    pub fn with_rating(mut self, rating: impl Into<String>) -> Self {
        self.rating = rating.into();
        self
    }

    /// Sets the selling and listed prices.
    #[must_use]
    pub fn with_prices(mut self, price: impl Into<String>, list_price: impl Into<String>) -> Self {
        self.price = price.into();
        self.list_price = list_price.into();
        self
    }
}

/// Catalogue backed by an in-memory table of records.
///
/// # Example
///
/// ```
/// use iteminfo_catalog::{CatalogLookup, CatalogRecord, ItemCategory, TableCatalog};
///
/// let catalog = TableCatalog::from_records([
///     CatalogRecord::new("0596007124", ItemCategory::Book)
///         .with_title("Head First Design Patterns")
///         .with_prices("39.99", "44.99"),
/// ])
/// .expect("records are valid");
///
/// assert!(catalog.is_book("0596007124"));
/// assert_eq!(catalog.price("missing"), "0.00");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableCatalog {
    records: HashMap<String, CatalogRecord>,
}

impl TableCatalog {
    /// Creates an empty catalogue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalogue from the given records.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyIdentifier`] when a record has a blank
    /// identifier and [`CatalogError::DuplicateIdentifier`] when two records
    /// share an identifier.
    pub fn from_records(
        records: impl IntoIterator<Item = CatalogRecord>,
    ) -> Result<Self, CatalogError> {
        let mut table = HashMap::new();
        for (index, record) in records.into_iter().enumerate() {
            if record.id.trim().is_empty() {
                return Err(CatalogError::EmptyIdentifier { index });
            }
            if table.contains_key(&record.id) {
                return Err(CatalogError::duplicate_identifier(record.id));
            }
            table.insert(record.id.clone(), record);
        }
        Ok(Self { records: table })
    }

    /// Parses a JSON array of records.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed JSON and any error
    /// produced by [`TableCatalog::from_records`].
    pub fn from_json_str(document: &str) -> Result<Self, CatalogError> {
        let records: Vec<CatalogRecord> =
            serde_json::from_str(document).map_err(CatalogError::parse)?;
        Self::from_records(records)
    }

    /// Reads and parses a JSON catalogue file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] when the file cannot be read, or any error
    /// produced by [`TableCatalog::from_json_str`].
    pub fn load(path: &Utf8Path) -> Result<Self, CatalogError> {
        let document =
            fs::read_to_string(path).map_err(|source| CatalogError::io(path, source))?;
        let catalog = Self::from_json_str(&document)?;
        debug!(
            target: CATALOG_TARGET,
            path = %path,
            records = catalog.len(),
            "loaded catalogue"
        );
        Ok(catalog)
    }

    /// Looks up a record by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CatalogRecord> {
        self.records.get(id)
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when the catalogue holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn field(&self, id: &str, select: impl FnOnce(&CatalogRecord) -> &str) -> String {
        self.get(id).map(select).unwrap_or_default().to_owned()
    }

    fn price_field(&self, id: &str, select: impl FnOnce(&CatalogRecord) -> &str) -> String {
        self.get(id).map_or(UNPRICED, select).to_owned()
    }
}

impl CatalogLookup for TableCatalog {
    fn is_book(&self, id: &str) -> bool {
        self.get(id)
            .is_some_and(|record| record.category == ItemCategory::Book)
    }

    fn is_movie(&self, id: &str) -> bool {
        self.get(id)
            .is_some_and(|record| record.category == ItemCategory::Movie)
    }

    fn title(&self, id: &str) -> String {
        self.field(id, |record| &record.title)
    }

    fn isbn(&self, id: &str) -> String {
        self.field(id, |record| &record.isbn)
    }

    fn rating(&self, id: &str) -> String {
        self.field(id, |record| &record.rating)
    }

    fn price(&self, id: &str) -> String {
        self.price_field(id, |record| &record.price)
    }

    fn list_price(&self, id: &str) -> String {
        self.price_field(id, |record| &record.list_price)
    }
}
