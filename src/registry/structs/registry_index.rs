use std::collections::BTreeMap;
use crate::registry::structs::content_hash::ContentHash;
use crate::registry::structs::peer_address::PeerAddress;

/// The bidirectional relation between content hashes and holders.
///
/// `by_hash` and `by_peer` describe the same set of (hash, peer) announcements from
/// both sides: a peer occurs in `by_hash[hash]` exactly as often as `hash` occurs in
/// `by_peer[peer]`. Emptied entries are pruned from both maps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryIndex {
    pub by_hash: BTreeMap<ContentHash, Vec<PeerAddress>>,
    pub by_peer: BTreeMap<PeerAddress, Vec<ContentHash>>,
    /// Number of (hash, peer) entries in `by_hash`, duplicates included.
    pub announcements: u64,
}
