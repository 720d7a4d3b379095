//! Error types for chain wiring failures.
//!
//! Wiring is validated once, when a [`ChainBuilder`](crate::ChainBuilder)
//! produces a dispatcher. A chain that fails validation never yields a
//! dispatcher, so dispatch itself has no error path.

use thiserror::Error;

use crate::handler::HandlerKind;

/// Errors raised while linking handlers into a chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandlerWiringError {
    /// No handlers were linked.
    #[error("handler chain is empty")]
    EmptyChain,

    /// The chain ended before the catch-all handler was linked.
    #[error("handler '{after}' has no successor; expected '{expected}'")]
    MissingSuccessor {
        /// Last handler linked.
        after: HandlerKind,
        /// Handler that should have followed it.
        expected: HandlerKind,
    },

    /// A handler kind was linked into more than one position.
    #[error("handler '{handler}' is already linked into the chain")]
    DuplicateHandler {
        /// Kind linked twice.
        handler: HandlerKind,
    },

    /// A handler was linked out of chain order.
    #[error("handler '{handler}' linked where '{expected}' was expected")]
    OutOfOrder {
        /// Kind that was linked.
        handler: HandlerKind,
        /// Kind required at that position.
        expected: HandlerKind,
    },
}

impl HandlerWiringError {
    /// Creates a missing successor error.
    #[must_use]
    pub const fn missing_successor(after: HandlerKind, expected: HandlerKind) -> Self {
        Self::MissingSuccessor { after, expected }
    }

    /// Creates a duplicate handler error.
    #[must_use]
    pub const fn duplicate(handler: HandlerKind) -> Self {
        Self::DuplicateHandler { handler }
    }

    /// Creates an out-of-order error.
    #[must_use]
    pub const fn out_of_order(handler: HandlerKind, expected: HandlerKind) -> Self {
        Self::OutOfOrder { handler, expected }
    }
}
