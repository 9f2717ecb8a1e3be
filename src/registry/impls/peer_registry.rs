use std::sync::Arc;
use std::sync::atomic::AtomicI64;
use chrono::Utc;
use parking_lot::RwLock;
use crate::config::structs::configuration::Configuration;
use crate::registry::structs::content_hash::ContentHash;
use crate::registry::structs::peer_address::PeerAddress;
use crate::registry::structs::peer_registry::PeerRegistry;
use crate::registry::structs::registry_index::RegistryIndex;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl PeerRegistry {
    #[tracing::instrument(level = "debug")]
    pub fn new(config: Arc<Configuration>) -> PeerRegistry
    {
        PeerRegistry {
            config,
            index: Arc::new(RwLock::new(RegistryIndex::new())),
            stats: Arc::new(StatsAtomics {
                started: AtomicI64::new(Utc::now().timestamp()),
                hashes: AtomicI64::new(0),
                peers: AtomicI64::new(0),
                announcements: AtomicI64::new(0),
                connections_active: AtomicI64::new(0),
                connections_handled: AtomicI64::new(0),
                store_handled: AtomicI64::new(0),
                create_handled: AtomicI64::new(0),
                delete_handled: AtomicI64::new(0),
                query_handled: AtomicI64::new(0),
                unknown_requests: AtomicI64::new(0),
                decode_failures: AtomicI64::new(0),
                purges: AtomicI64::new(0),
            }),
        }
    }

    /// Copies the index size counters into the statistics. Call with the lock held.
    pub(crate) fn refresh_index_stats(&self, index: &RegistryIndex)
    {
        self.set_stats(StatsEvent::Hashes, index.hash_count() as i64);
        self.set_stats(StatsEvent::Peers, index.peer_count() as i64);
        self.set_stats(StatsEvent::Announcements, index.announcement_count() as i64);
    }

    pub fn hashes_of(&self, peer: &PeerAddress) -> Vec<ContentHash>
    {
        self.index.read().hashes_of(peer)
    }

    /// Owned copy of both indexes, taken under the read lock.
    pub fn snapshot(&self) -> RegistryIndex
    {
        self.index.read().clone()
    }

    pub fn dump_index(&self) -> String
    {
        self.index.read().render()
    }

    /// Returns `(hashes, peers, announcements)`.
    pub fn counts(&self) -> (usize, usize, u64)
    {
        let lock = self.index.read();
        (lock.hash_count(), lock.peer_count(), lock.announcement_count())
    }

    /// Checks the index against the configured duplicate policy.
    pub fn check_consistency(&self) -> Result<(), String>
    {
        self.index.read().check_consistency(self.config.registry_config.deduplicate_announcements)
    }
}
