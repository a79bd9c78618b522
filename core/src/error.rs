//! Error type for the load operation.
//!
//! # Design
//! Only one user-visible error class exists — "load failed" — but the
//! variants keep the underlying cause (transport failure, unexpected
//! status, malformed payload) so [`TodoStore`](crate::TodoStore) can
//! log it before collapsing to the fixed message. `remove` has no error
//! type: filtering a collection is total.

use std::fmt;

/// Reasons a load can fail. All of them surface to the user as the
/// same fixed message; the detail exists for diagnostics only.
#[derive(Debug)]
pub enum LoadError {
    /// The executing caller could not complete the round-trip at all
    /// (connection refused, DNS failure, interrupted body).
    Transport(String),

    /// The server answered with a non-success status.
    Http { status: u16, body: String },

    /// The response body could not be deserialized into a todo listing.
    Deserialization(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Transport(msg) => write!(f, "transport failed: {msg}"),
            LoadError::Http { status, body } => write!(f, "HTTP {status}: {body}"),
            LoadError::Deserialization(msg) => write!(f, "deserialization failed: {msg}"),
        }
    }
}

impl std::error::Error for LoadError {}
