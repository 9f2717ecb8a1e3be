use log::{debug, info, log_enabled, Level};
use crate::registry::structs::content_hash::ContentHash;
use crate::registry::structs::peer_address::PeerAddress;
use crate::registry::structs::peer_registry::PeerRegistry;

impl PeerRegistry {
    /// Announces every hash in order for `peer`, returning how many entries were added.
    ///
    /// Input duplicates are not collapsed; whether a repeated pair adds a second entry
    /// depends on `registry_config.deduplicate_announcements`.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn announce_many(&self, peer: &PeerAddress, hashes: &[ContentHash]) -> u64
    {
        let registry_config = &self.config.registry_config;
        let (added, dump) = {
            let mut lock = self.index.write();
            let mut added = 0u64;
            for hash in hashes {
                if lock.insert(*hash, peer, registry_config.deduplicate_announcements) {
                    added += 1;
                }
            }
            self.refresh_index_stats(&lock);
            let dump = if registry_config.dump_on_store && log_enabled!(Level::Debug) {
                Some(lock.render())
            } else {
                None
            };
            (added, dump)
        };

        if let Some(dump) = dump {
            debug!("[REGISTRY] Store by {peer}, index now:\n{dump}");
        }
        added
    }

    /// Announces a single hash for `peer`. Returns whether an entry was added.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn announce_one(&self, peer: &PeerAddress, hash: ContentHash) -> bool
    {
        let added = {
            let mut lock = self.index.write();
            let added = lock.insert(hash, peer, self.config.registry_config.deduplicate_announcements);
            self.refresh_index_stats(&lock);
            added
        };

        info!("[REGISTRY] Content created by {peer}: Hash {hash}");
        added
    }
}
