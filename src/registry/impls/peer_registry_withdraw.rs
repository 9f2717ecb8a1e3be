use log::info;
use crate::registry::structs::content_hash::ContentHash;
use crate::registry::structs::peer_address::PeerAddress;
use crate::registry::structs::peer_registry::PeerRegistry;

impl PeerRegistry {
    /// Removes one announcement of `hash` by `peer`. Absent pairs are a no-op.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn withdraw(&self, peer: &PeerAddress, hash: ContentHash) -> bool
    {
        let removed = {
            let mut lock = self.index.write();
            let removed = lock.remove(hash, peer);
            self.refresh_index_stats(&lock);
            removed
        };

        info!("[REGISTRY] Content deleted by {peer}: Hash {hash}");
        removed
    }
}
