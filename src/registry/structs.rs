//! Data structures for the peer registry.

/// Integer identifier of a content item.
pub mod content_hash;

/// Holder identity derived from the remote endpoint of a connection.
pub mod peer_address;

/// The two synchronized indexes.
pub mod registry_index;

/// Shared registry handle: configuration, locked index and statistics.
pub mod peer_registry;
