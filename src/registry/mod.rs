//! Core peer registry implementation.
//!
//! This module contains the bidirectional index that maps content hashes to the
//! peers announcing them, and peers back to the hashes they announced.
//!
//! # Architecture
//!
//! Both indexes live in a single `RegistryIndex` behind one `parking_lot::RwLock`:
//! - `announce_many`, `announce_one`, `withdraw` and `purge_peer` take the write lock
//! - `query` and the read helpers take the read lock
//! - Every registry method is synchronous, so a guard is never held across an `.await`
//!
//! # Main Components
//!
//! - `PeerRegistry` - The shared registry handle used by every session
//! - `RegistryIndex` - The two indexes and the pure operations on them
//! - `ContentHash` - Opaque integer identifier of a content item
//! - `PeerAddress` - Holder identity, the remote `ip:port` of a connection
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use torrust_registry::config::structs::configuration::Configuration;
//! use torrust_registry::registry::structs::peer_registry::PeerRegistry;
//!
//! let registry = PeerRegistry::new(Arc::new(Configuration::init()));
//! registry.announce_one(&PeerAddress::from("10.0.0.1:5000"), ContentHash(10));
//! assert_eq!(registry.query(ContentHash(10)).len(), 1);
//! ```

/// Implementation blocks for registry structs.
pub mod impls;

/// Data structures for the registry.
pub mod structs;

/// Unit tests for registry functionality.
pub mod tests;
