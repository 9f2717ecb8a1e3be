//! # Torrust Registry
//!
//! A peer registry service: clients announce which content items (identified by
//! an integer hash) they hold, ask which peers hold a given item, and lose all
//! their announcements when they disconnect.
//!
//! ## Overview
//!
//! The service keeps two indexes behind one lock, hash to holders and holder to
//! hashes, and serves them over plain TCP. Each connection is one peer, named by
//! its remote address. A session reads request cycles until the client goes
//! away, then purges everything that peer announced.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use torrust_registry::config::structs::configuration::Configuration;
//! use torrust_registry::registry::structs::peer_registry::PeerRegistry;
//! use torrust_registry::tcp::tcp::tcp_service;
//!
//! let config = Arc::new(Configuration::load_from_file("config.toml", false)?);
//! let registry = Arc::new(PeerRegistry::new(config.clone()));
//! let (tx, rx) = tokio::sync::watch::channel(false);
//! let (addr, handle) = tcp_service(registry, &config.tcp_server, rx).await?;
//! ```
//!
//! ## Modules
//!
//! - [`client`] - Async client for the wire protocol
//! - [`common`] - Logging setup, shutdown helper and error type
//! - [`config`] - Configuration management and TOML parsing
//! - [`protocol`] - Length-prefixed frames and request tags
//! - [`registry`] - The two indexes and their operations
//! - [`stats`] - Atomic counters and snapshots
//! - [`structs`] - CLI argument parsing
//! - [`tcp`] - Listener and per-connection sessions

/// Async client for the registry wire protocol.
///
/// Used by the integration tests and by anything that wants to announce or
/// look up content programmatically.
pub mod client;

/// Common utilities and shared functionality.
///
/// Contains logging setup, the shutdown helper and `CustomError`.
pub mod common;

/// Configuration management module.
///
/// Handles loading, validating and saving the TOML configuration file.
pub mod config;

/// Wire protocol module.
///
/// Frame codec (MessagePack or JSON bodies behind a u32 length prefix),
/// request tags and wire errors.
pub mod protocol;

/// Registry module.
///
/// The bidirectional hash and peer indexes and the `PeerRegistry` operations
/// (announce, withdraw, query, purge).
pub mod registry;

/// Statistics module.
///
/// Atomic counters for index sizes, connections and handled requests.
pub mod stats;

/// CLI argument structures.
pub mod structs;

/// TCP server module.
///
/// Listener, per-connection session and the cleanup guard.
pub mod tcp;
