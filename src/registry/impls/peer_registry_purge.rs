use log::info;
use crate::registry::structs::peer_address::PeerAddress;
use crate::registry::structs::peer_registry::PeerRegistry;
use crate::stats::enums::stats_event::StatsEvent;

impl PeerRegistry {
    /// Removes everything `peer` announced, including its reverse-index entry.
    ///
    /// Returns the number of announcements dropped.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn purge_peer(&self, peer: &PeerAddress) -> u64
    {
        let removed = {
            let mut lock = self.index.write();
            let removed = lock.remove_peer(peer);
            self.refresh_index_stats(&lock);
            removed
        };

        self.update_stats(StatsEvent::Purges, 1);
        info!("[REGISTRY] Cleaned up data for peer: {peer} ({removed} announcements)");
        removed
    }
}
