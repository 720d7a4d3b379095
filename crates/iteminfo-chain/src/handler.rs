//! The handler capability and the fixed positions a handler may occupy.

use std::fmt;

use iteminfo_catalog::CatalogLookup;

use crate::reply::Reply;
use crate::request::ItemRequest;

/// Position of a handler within the chain.
///
/// Variants are declared in chain order; the derived ordering is the order in
/// which handlers must be linked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandlerKind {
    /// Echoes the identifier and its prices.
    General,
    /// Adds book details for book identifiers.
    Book,
    /// Adds movie details for movie identifiers.
    Movie,
    /// Catch-all that terminates any reply still open.
    Unknown,
}

impl HandlerKind {
    /// Every kind in chain order.
    pub const CHAIN: [Self; 4] = [Self::General, Self::Book, Self::Movie, Self::Unknown];

    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Book => "book",
            Self::Movie => "movie",
            Self::Unknown => "unknown",
        }
    }

    /// Returns the kind that must follow this one, or `None` for the
    /// catch-all.
    #[must_use]
    pub const fn successor(self) -> Option<Self> {
        match self {
            Self::General => Some(Self::Book),
            Self::Book => Some(Self::Movie),
            Self::Movie => Some(Self::Unknown),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for HandlerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One link in the request chain.
///
/// Implementations inspect the request, query the catalogue, and return the
/// reply with any contribution appended. A handler that produces a conclusive
/// answer calls [`Reply::terminate`]; the dispatcher then stops forwarding.
///
/// Handlers hold no per-request state, so a wired chain can be shared across
/// threads.
pub trait Handler: Send + Sync {
    /// The chain position this handler occupies.
    fn kind(&self) -> HandlerKind;

    /// Contributes to the reply for `request`.
    fn contribute(&self, lookup: &dyn CatalogLookup, request: &ItemRequest, reply: Reply) -> Reply;
}

impl<H: Handler + ?Sized> Handler for Box<H> {
    fn kind(&self) -> HandlerKind {
        (**self).kind()
    }

    fn contribute(&self, lookup: &dyn CatalogLookup, request: &ItemRequest, reply: Reply) -> Reply {
        (**self).contribute(lookup, request, reply)
    }
}
