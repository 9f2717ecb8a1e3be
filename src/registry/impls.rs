//! Implementation blocks for registry data structures.
//!
//! Implementations are organized by the struct they extend; `PeerRegistry`
//! operations are split per request kind.

/// ContentHash implementation: Display and conversions.
pub mod content_hash;

/// PeerAddress implementation: Display and conversions.
pub mod peer_address;

/// RegistryIndex implementation: lock-free index mutations and checks.
pub mod registry_index;

/// PeerRegistry core implementation: construction and read helpers.
pub mod peer_registry;

/// PeerRegistry announce operations (`store`, `create`).
pub mod peer_registry_announce;

/// PeerRegistry withdraw operation (`delete`).
pub mod peer_registry_withdraw;

/// PeerRegistry query operation (`query`).
pub mod peer_registry_query;

/// PeerRegistry disconnect cleanup.
pub mod peer_registry_purge;
