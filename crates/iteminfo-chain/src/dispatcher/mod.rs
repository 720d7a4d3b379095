//! Chain wiring and request dispatch.
//!
//! [`ChainBuilder`] collects handlers and validates the links once. The
//! resulting [`RequestDispatcher`] holds the handlers as an immutable slice and
//! iterates it for each request, stopping at the first terminal reply.

use std::fmt;

use iteminfo_catalog::CatalogLookup;
use tracing::{debug, trace, warn};

use crate::errors::HandlerWiringError;
use crate::handler::{Handler, HandlerKind};
use crate::handlers::{BookHandler, GeneralHandler, MovieHandler, UnknownHandler};
use crate::reply::Reply;
use crate::request::ItemRequest;

/// Tracing target for dispatch operations.
pub const DISPATCH_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::dispatch");

/// Collects handlers and wires them into a [`RequestDispatcher`].
///
/// Handlers must be linked in [`HandlerKind::CHAIN`] order, each kind exactly
/// once, ending with the catch-all [`UnknownHandler`].
///
/// ```
/// use iteminfo_catalog::StaticCatalog;
/// use iteminfo_chain::{
///     BookHandler, ChainBuilder, GeneralHandler, HandlerWiringError, HandlerKind,
/// };
///
/// let error = ChainBuilder::new()
///     .link(GeneralHandler)
///     .link(BookHandler)
///     .build(StaticCatalog::new())
///     .expect_err("chain stops before the catch-all");
/// assert_eq!(
///     error,
///     HandlerWiringError::missing_successor(HandlerKind::Book, HandlerKind::Movie),
/// );
/// ```
#[derive(Default)]
pub struct ChainBuilder {
    handlers: Vec<Box<dyn Handler>>,
}

impl ChainBuilder {
    /// Creates a builder with no handlers linked.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder with the canonical chain already linked.
    #[must_use]
    pub fn canonical() -> Self {
        Self::new()
            .link(GeneralHandler)
            .link(BookHandler)
            .link(MovieHandler)
            .link(UnknownHandler)
    }

    /// Links `handler` as the successor of the last linked handler.
    #[must_use]
    pub fn link(self, handler: impl Handler + 'static) -> Self {
        self.link_boxed(Box::new(handler))
    }

    /// Links an already boxed handler.
    #[must_use]
    pub fn link_boxed(mut self, handler: Box<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Validates the links and produces a dispatcher backed by `lookup`.
    ///
    /// # Errors
    ///
    /// Returns a [`HandlerWiringError`] when the chain is empty, links a kind
    /// twice, links kinds out of order, or ends before the catch-all.
    pub fn build<L>(self, lookup: L) -> Result<RequestDispatcher<L>, HandlerWiringError> {
        let kinds = kinds_of(&self.handlers);
        validate_links(&kinds)?;
        debug!(
            target: DISPATCH_TARGET,
            chain = %ChainDisplay(&kinds),
            "wired handler chain"
        );
        Ok(RequestDispatcher {
            handlers: self.handlers,
            lookup,
        })
    }
}

impl fmt::Debug for ChainBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainBuilder")
            .field("handlers", &kinds_of(&self.handlers))
            .finish()
    }
}

fn validate_links(kinds: &[HandlerKind]) -> Result<(), HandlerWiringError> {
    let mut expected = Some(HandlerKind::General);
    let mut previous: Option<HandlerKind> = None;

    for &kind in kinds {
        let Some(required) = expected else {
            // Everything has been linked once the catch-all is in place.
            return Err(HandlerWiringError::duplicate(kind));
        };
        if kind != required {
            return Err(if kind < required {
                HandlerWiringError::duplicate(kind)
            } else {
                HandlerWiringError::out_of_order(kind, required)
            });
        }
        previous = Some(kind);
        expected = kind.successor();
    }

    match (previous, expected) {
        (None, _) => Err(HandlerWiringError::EmptyChain),
        (Some(after), Some(missing)) => Err(HandlerWiringError::missing_successor(after, missing)),
        (Some(_), None) => Ok(()),
    }
}

fn kinds_of(handlers: &[Box<dyn Handler>]) -> Vec<HandlerKind> {
    handlers.iter().map(|handler| handler.kind()).collect()
}

struct ChainDisplay<'a>(&'a [HandlerKind]);

impl fmt::Display for ChainDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, kind) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{kind}")?;
        }
        Ok(())
    }
}

/// Routes item requests through a wired handler chain.
///
/// The chain and lookup are immutable after construction; all per-request
/// state lives in the [`Reply`] threaded through the handlers. A dispatcher is
/// therefore `Send + Sync` whenever its lookup is, and [`handle`] may be called
/// concurrently through a shared reference.
///
/// [`handle`]: RequestDispatcher::handle
pub struct RequestDispatcher<L> {
    handlers: Vec<Box<dyn Handler>>,
    lookup: L,
}

impl<L> RequestDispatcher<L> {
    /// Wires the canonical chain `general -> book -> movie -> unknown`.
    ///
    /// # Errors
    ///
    /// Propagates any [`HandlerWiringError`] raised while linking the chain.
    pub fn new(lookup: L) -> Result<Self, HandlerWiringError> {
        ChainBuilder::canonical().build(lookup)
    }

    /// Returns the wired handler kinds in chain order.
    pub fn chain(&self) -> impl Iterator<Item = HandlerKind> + '_ {
        self.handlers.iter().map(|handler| handler.kind())
    }
}

impl<L: CatalogLookup> RequestDispatcher<L> {
    /// Routes `request` through the chain and returns the structured reply.
    ///
    /// Each handler receives the reply produced by its predecessor. Forwarding
    /// stops as soon as a handler terminates the reply. A reply still open
    /// after the last handler is terminated here, so every returned reply
    /// ends with [`END_MARKER`](crate::END_MARKER).
    #[must_use]
    pub fn dispatch(&self, request: &ItemRequest) -> Reply {
        let mut reply = Reply::new();
        for handler in &self.handlers {
            reply = handler.contribute(&self.lookup, request, reply);
            trace!(
                target: DISPATCH_TARGET,
                handler = %handler.kind(),
                id = request.id(),
                terminal = reply.is_terminal(),
                "handler contributed"
            );
            if reply.is_terminal() {
                debug!(
                    target: DISPATCH_TARGET,
                    handler = %handler.kind(),
                    id = request.id(),
                    "chain terminated"
                );
                break;
            }
        }
        if !reply.is_terminal() {
            warn!(
                target: DISPATCH_TARGET,
                id = request.id(),
                reply = %reply,
                "chain finished without terminating the reply"
            );
            reply.terminate();
        }
        reply
    }

    /// Routes `request` through the chain and returns the reply text.
    #[must_use]
    pub fn handle(&self, request: &ItemRequest) -> String {
        self.dispatch(request).into_text()
    }
}

impl<L: fmt::Debug> fmt::Debug for RequestDispatcher<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestDispatcher")
            .field("handlers", &kinds_of(&self.handlers))
            .field("lookup", &self.lookup)
            .finish()
    }
}
