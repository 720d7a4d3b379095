//! Concrete handlers wired into the canonical chain.

use iteminfo_catalog::CatalogLookup;

use crate::handler::{Handler, HandlerKind};
use crate::reply::{Reply, UNKNOWN_MARKER};
use crate::request::ItemRequest;

/// Echoes the identifier with its listed and selling prices.
///
/// Runs for every request and never terminates the reply.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneralHandler;

impl Handler for GeneralHandler {
    fn kind(&self) -> HandlerKind {
        HandlerKind::General
    }

    fn contribute(
        &self,
        lookup: &dyn CatalogLookup,
        request: &ItemRequest,
        mut reply: Reply,
    ) -> Reply {
        let id = request.id();
        reply.push_field("ASIN", id);
        reply.push_field("ListedPrice", &lookup.list_price(id));
        reply.push_field("Price", &lookup.price(id));
        reply
    }
}

/// Adds title and ISBN for books, then terminates.
#[derive(Debug, Clone, Copy, Default)]
pub struct BookHandler;

impl Handler for BookHandler {
    fn kind(&self) -> HandlerKind {
        HandlerKind::Book
    }

    fn contribute(
        &self,
        lookup: &dyn CatalogLookup,
        request: &ItemRequest,
        mut reply: Reply,
    ) -> Reply {
        let id = request.id();
        if lookup.is_book(id) {
            reply.push_field("BookTitle", &lookup.title(id));
            reply.push_field("ISBN", &lookup.isbn(id));
            reply.terminate();
        }
        reply
    }
}

/// Adds title and content rating for movies, then terminates.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovieHandler;

impl Handler for MovieHandler {
    fn kind(&self) -> HandlerKind {
        HandlerKind::Movie
    }

    fn contribute(
        &self,
        lookup: &dyn CatalogLookup,
        request: &ItemRequest,
        mut reply: Reply,
    ) -> Reply {
        let id = request.id();
        if lookup.is_movie(id) {
            reply.push_field("MovieTitle", &lookup.title(id));
            reply.push_field("MovieRating", &lookup.rating(id));
            reply.terminate();
        }
        reply
    }
}

/// Catch-all that marks the request unrecognised and terminates.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnknownHandler;

impl Handler for UnknownHandler {
    fn kind(&self) -> HandlerKind {
        HandlerKind::Unknown
    }

    fn contribute(
        &self,
        _lookup: &dyn CatalogLookup,
        _request: &ItemRequest,
        mut reply: Reply,
    ) -> Reply {
        reply.push_marker(UNKNOWN_MARKER);
        reply.terminate();
        reply
    }
}
