use crate::registry::structs::content_hash::ContentHash;
use crate::registry::structs::peer_address::PeerAddress;
use crate::registry::structs::peer_registry::PeerRegistry;

impl PeerRegistry {
    /// Holders of `hash` in registration order, as an owned copy. Empty when unknown.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn query(&self, hash: ContentHash) -> Vec<PeerAddress>
    {
        self.index.read().holders(hash)
    }
}
