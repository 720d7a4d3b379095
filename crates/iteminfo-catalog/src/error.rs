//! Errors raised while loading catalogue data.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors encountered while building a [`TableCatalog`](crate::TableCatalog).
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalogue file could not be read.
    #[error("failed to read catalogue '{path}': {source}")]
    Io {
        /// Path that was being read.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: Arc<std::io::Error>,
    },

    /// The catalogue document is not valid JSON or does not match the record
    /// schema.
    #[error("failed to parse catalogue: {source}")]
    Parse {
        /// Underlying JSON error.
        #[source]
        source: Arc<serde_json::Error>,
    },

    /// Two records share the same identifier.
    #[error("duplicate catalogue identifier '{id}'")]
    DuplicateIdentifier {
        /// Identifier that appeared more than once.
        id: String,
    },

    /// A record carried an empty identifier.
    #[error("catalogue record {index} has an empty identifier")]
    EmptyIdentifier {
        /// Zero-based position of the offending record.
        index: usize,
    },
}

impl CatalogError {
    /// Creates an `Io` error for the given path.
    #[must_use]
    pub fn io(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source: Arc::new(source),
        }
    }

    /// Creates a `Parse` error.
    #[must_use]
    pub fn parse(source: serde_json::Error) -> Self {
        Self::Parse {
            source: Arc::new(source),
        }
    }

    /// Creates a `DuplicateIdentifier` error.
    #[must_use]
    pub fn duplicate_identifier(id: impl Into<String>) -> Self {
        Self::DuplicateIdentifier { id: id.into() }
    }
}
