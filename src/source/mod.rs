//! Data-source abstraction between the TUI and the aggregator backend.
//!
//! This module defines the `NodeSource` trait that allows the TUI to work
//! with different backends (live HTTP or in-memory test data) through a
//! unified interface.

mod http;
mod mock;

pub use http::HttpNodeSource;
pub use mock::MockSource;

use crate::model::{Agreement, NodeId, Role};

/// Error types that can occur while fetching from the backend.
#[derive(Debug, Clone)]
pub enum SourceError {
    /// Transport-level failure (connect, timeout, TLS).
    Http(String),
    /// Backend answered with a non-success status code.
    Status(u16),
    /// Response body was not the expected JSON shape.
    Decode(String),
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::Http(msg) => write!(f, "HTTP error: {}", msg),
            SourceError::Status(code) => write!(f, "unexpected status: {}", code),
            SourceError::Decode(msg) => write!(f, "decode error: {}", msg),
        }
    }
}

impl std::error::Error for SourceError {}

/// Abstraction for the two reputation collections.
///
/// Fetches run on worker threads, so implementations must be shareable
/// across threads behind an `Arc`.
pub trait NodeSource: Send + Sync {
    /// Fetches the node collection for `role`.
    ///
    /// Returns the identifiers verbatim, in backend order.
    fn fetch_nodes(&self, role: Role) -> Result<Vec<NodeId>, SourceError>;

    /// Fetches the agreement history of a single node.
    fn fetch_agreements(&self, role: Role, node: &NodeId)
    -> Result<Vec<Agreement>, SourceError>;
}
