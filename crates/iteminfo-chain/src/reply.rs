//! Reply text accumulated while a request travels the chain.

use std::fmt;

use tracing::warn;

use crate::dispatcher::DISPATCH_TARGET;

/// Separator placed between reply segments.
pub const SEPARATOR: char = '|';

/// Segment appended when a reply becomes terminal.
pub const END_MARKER: &str = "EOF";

/// Segment appended by the catch-all handler.
pub const UNKNOWN_MARKER: &str = "UNKNOWN";

/// Accumulated reply for a single dispatch.
///
/// Segments are joined with [`SEPARATOR`]. Once [`Reply::terminate`] has been
/// called the reply ends with [`END_MARKER`] and rejects further segments.
///
/// ```
/// use iteminfo_chain::Reply;
///
/// let mut reply = Reply::new();
/// reply.push_field("ASIN", "1234BK");
/// reply.terminate();
/// assert!(!reply.push_field("Price", "1.00"));
/// assert_eq!(reply.text(), "ASIN:1234BK|EOF");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    text: String,
    terminal: bool,
}

impl Reply {
    /// Creates an empty, non-terminal reply.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            terminal: false,
        }
    }

    /// Appends a `label:value` segment.
    ///
    /// Returns `false`, leaving the reply untouched, when the reply is
    /// already terminal.
    pub fn push_field(&mut self, label: &str, value: &str) -> bool {
        self.push_segment(|text| {
            text.push_str(label);
            text.push(':');
            text.push_str(value);
        })
    }

    /// Appends a bare marker segment.
    ///
    /// Returns `false`, leaving the reply untouched, when the reply is
    /// already terminal.
    pub fn push_marker(&mut self, marker: &str) -> bool {
        self.push_segment(|text| text.push_str(marker))
    }

    /// Appends [`END_MARKER`] and marks the reply terminal.
    ///
    /// Terminating an already terminal reply is a no-op.
    pub fn terminate(&mut self) {
        if self.terminal {
            return;
        }
        self.push_marker(END_MARKER);
        self.terminal = true;
    }

    /// Returns `true` once the reply has been terminated.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Returns `true` when nothing has been appended yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The accumulated text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consumes the reply, returning the accumulated text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }

    fn push_segment(&mut self, write: impl FnOnce(&mut String)) -> bool {
        if self.terminal {
            warn!(
                target: DISPATCH_TARGET,
                reply = %self.text,
                "ignored append to terminal reply"
            );
            return false;
        }
        if !self.text.is_empty() {
            self.text.push(SEPARATOR);
        }
        write(&mut self.text);
        true
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
