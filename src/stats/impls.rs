//! Implementation blocks for statistics.

/// StatsAtomics counter lookup.
pub mod stats_atomics;

/// PeerRegistry statistics accessors.
pub mod peer_registry;
