//! Inbound item requests.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors raised while constructing an [`ItemRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The identifier was empty or contained only whitespace.
    #[error("item identifier must not be empty")]
    EmptyIdentifier,
}

/// A single lookup request for one catalogue identifier.
///
/// The identifier is opaque: it is echoed back verbatim and handed to the
/// catalogue for classification. It is guaranteed to be non-blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemRequest {
    id: String,
}

impl ItemRequest {
    /// Creates a request for the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::EmptyIdentifier`] when the identifier is empty
    /// or whitespace-only.
    pub fn new(id: impl Into<String>) -> Result<Self, RequestError> {
        let identifier = id.into();
        if identifier.trim().is_empty() {
            return Err(RequestError::EmptyIdentifier);
        }
        Ok(Self { id: identifier })
    }

    /// The catalogue identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl FromStr for ItemRequest {
    type Err = RequestError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::new(value)
    }
}

impl fmt::Display for ItemRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}
