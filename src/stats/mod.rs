//! Real-time statistics tracking and monitoring module.
//!
//! This module provides atomic counters for tracking all registry activity,
//! reported periodically on the console.
//!
//! # Statistics Categories
//!
//! ## Index Metrics
//! - Distinct content hashes, peers and (hash, peer) announcements
//!
//! ## Connection Metrics
//! - Active and total handled connections
//! - Disconnect cleanups
//!
//! ## Request Metrics
//! - `store`, `create`, `delete` and `query` requests handled
//! - Unknown request tags and decode failures
//!
//! # Thread Safety
//!
//! All statistics are stored as atomic integers, allowing safe concurrent
//! updates from every session task without locking overhead.
//!
//! # Example
//!
//! ```rust,ignore
//! use torrust_registry::stats::enums::stats_event::StatsEvent;
//!
//! // Update statistics
//! registry.update_stats(StatsEvent::QueryHandled, 1);
//!
//! // Read statistics
//! let stats = registry.get_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters).
pub mod structs;
