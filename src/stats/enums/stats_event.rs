//! Statistics event types for tracking various metrics.

use serde::{Deserialize, Serialize};

/// Enumeration of all trackable statistics events.
///
/// Each variant represents a specific counter that can be incremented
/// or set. Used with `PeerRegistry::update_stats()` to update counters.
///
/// # Categories
///
/// - **Index**: Hashes, Peers, Announcements
/// - **Connections**: ConnectionsActive, ConnectionsHandled, Purges
/// - **Requests**: *Handled variants, UnknownRequests, DecodeFailures
///
/// # Example
///
/// ```rust,ignore
/// use torrust_registry::stats::enums::stats_event::StatsEvent;
///
/// // Increment store counter
/// registry.update_stats(StatsEvent::StoreHandled, 1);
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    Hashes,
    Peers,
    Announcements,
    ConnectionsActive,
    ConnectionsHandled,
    StoreHandled,
    CreateHandled,
    DeleteHandled,
    QueryHandled,
    UnknownRequests,
    DecodeFailures,
    Purges,
}
