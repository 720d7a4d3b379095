//! Chain-of-responsibility dispatch for catalogue item requests.
//!
//! A [`RequestDispatcher`] owns an ordered, immutable sequence of
//! [`Handler`]s. Each request starts with an empty [`Reply`] that is threaded
//! by value through the chain. Every handler may append fields to the reply
//! and may mark it terminal; the dispatcher stops at the first terminal reply,
//! so later handlers never observe or overwrite a conclusive answer.
//!
//! The canonical chain is
//!
//! ```text
//! general -> book -> movie -> unknown
//! ```
//!
//! where the trailing `unknown` handler is a catch-all that guarantees every
//! request produces a terminal reply.
//!
//! # Wiring
//!
//! Chains are assembled with [`ChainBuilder`] and validated once, before the
//! dispatcher exists. Missing, duplicated, or reordered links are reported as
//! [`HandlerWiringError`]s; dispatch itself cannot fail.
//!
//! # Example
//!
//! ```
//! use iteminfo_catalog::StaticCatalog;
//! use iteminfo_chain::{ItemRequest, RequestDispatcher};
//!
//! let dispatcher = RequestDispatcher::new(StaticCatalog::new()).expect("canonical chain");
//! let request = ItemRequest::new("1234BK").expect("non-empty identifier");
//! let reply = dispatcher.handle(&request);
//! assert!(reply.contains("BookTitle:JAVA Blackbook"));
//! assert!(reply.ends_with("|EOF"));
//! ```

mod dispatcher;
mod errors;
mod handler;
mod handlers;
mod reply;
mod request;

pub use self::dispatcher::{ChainBuilder, DISPATCH_TARGET, RequestDispatcher};
pub use self::errors::HandlerWiringError;
pub use self::handler::{Handler, HandlerKind};
pub use self::handlers::{BookHandler, GeneralHandler, MovieHandler, UnknownHandler};
pub use self::reply::{END_MARKER, Reply, SEPARATOR, UNKNOWN_MARKER};
pub use self::request::{ItemRequest, RequestError};

#[cfg(test)]
mod tests;
