use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt::Write;
use crate::registry::structs::content_hash::ContentHash;
use crate::registry::structs::peer_address::PeerAddress;
use crate::registry::structs::registry_index::RegistryIndex;

/// Removes the first element equal to `value`, keeping the order of the rest.
fn remove_first<T: PartialEq>(items: &mut Vec<T>, value: &T) -> bool
{
    match items.iter().position(|item| item == value) {
        None => false,
        Some(position) => {
            items.remove(position);
            true
        }
    }
}

impl RegistryIndex {
    pub fn new() -> RegistryIndex {
        RegistryIndex::default()
    }

    /// Appends one (hash, peer) announcement to both sides.
    ///
    /// With `deduplicate` set an already present pair is left alone and `false` is
    /// returned; otherwise the pair is appended again.
    pub fn insert(&mut self, hash: ContentHash, peer: &PeerAddress, deduplicate: bool) -> bool
    {
        let holders = self.by_hash.entry(hash).or_default();
        if deduplicate && holders.contains(peer) {
            return false;
        }
        holders.push(peer.clone());

        match self.by_peer.get_mut(peer) {
            Some(hashes) => hashes.push(hash),
            None => {
                self.by_peer.insert(peer.clone(), vec![hash]);
            }
        }
        self.announcements += 1;
        true
    }

    /// Removes the first occurrence of the pair from both sides, pruning emptied entries.
    pub fn remove(&mut self, hash: ContentHash, peer: &PeerAddress) -> bool
    {
        let removed = match self.by_hash.entry(hash) {
            Entry::Vacant(_) => false,
            Entry::Occupied(mut o) => {
                let removed = remove_first(o.get_mut(), peer);
                if o.get().is_empty() {
                    o.remove();
                }
                removed
            }
        };

        if let Some(hashes) = self.by_peer.get_mut(peer) {
            remove_first(hashes, &hash);
            if hashes.is_empty() {
                self.by_peer.remove(peer);
            }
        }

        if removed {
            self.announcements -= 1;
        }
        removed
    }

    /// Drops every announcement owned by `peer` and its reverse-index entry.
    ///
    /// Returns the number of (hash, peer) entries removed from `by_hash`.
    pub fn remove_peer(&mut self, peer: &PeerAddress) -> u64
    {
        let Some(hashes) = self.by_peer.remove(peer) else {
            return 0;
        };

        let mut removed = 0u64;
        for hash in hashes {
            if let Entry::Occupied(mut o) = self.by_hash.entry(hash) {
                if remove_first(o.get_mut(), peer) {
                    removed += 1;
                }
                if o.get().is_empty() {
                    o.remove();
                }
            }
        }
        self.announcements -= removed;
        removed
    }

    pub fn holders(&self, hash: ContentHash) -> Vec<PeerAddress>
    {
        self.by_hash.get(&hash).cloned().unwrap_or_default()
    }

    pub fn hashes_of(&self, peer: &PeerAddress) -> Vec<ContentHash>
    {
        self.by_peer.get(peer).cloned().unwrap_or_default()
    }

    pub fn hash_count(&self) -> usize
    {
        self.by_hash.len()
    }

    pub fn peer_count(&self) -> usize
    {
        self.by_peer.len()
    }

    pub fn announcement_count(&self) -> u64
    {
        self.announcements
    }

    pub fn is_empty(&self) -> bool
    {
        self.by_hash.is_empty() && self.by_peer.is_empty()
    }

    /// Verifies the structural invariants, returning the first violation found.
    ///
    /// With `deduplicate` set a (hash, peer) pair held more than once is a violation.
    pub fn check_consistency(&self, deduplicate: bool) -> Result<(), String>
    {
        let mut forward: BTreeMap<(&ContentHash, &PeerAddress), i64> = BTreeMap::new();
        let mut total = 0u64;

        for (hash, holders) in &self.by_hash {
            if holders.is_empty() {
                return Err(format!("hash {hash} is kept with no holders"));
            }
            for peer in holders {
                let count = forward.entry((hash, peer)).or_default();
                *count += 1;
                if deduplicate && *count > 1 {
                    return Err(format!("pair ({hash}, {peer}) is held {count} times in a deduplicated index"));
                }
                total += 1;
            }
        }

        for (peer, hashes) in &self.by_peer {
            if hashes.is_empty() {
                return Err(format!("peer {peer} is kept with no hashes"));
            }
            for hash in hashes {
                *forward.entry((hash, peer)).or_default() -= 1;
            }
        }

        if let Some(((hash, peer), delta)) = forward.iter().find(|(_, delta)| **delta != 0) {
            return Err(format!("pair ({hash}, {peer}) differs by {delta} between the two indexes"));
        }

        if total != self.announcements {
            return Err(format!("announcement counter is {} but the index holds {total}", self.announcements));
        }
        Ok(())
    }

    /// Multiset form of the check, valid under either duplicate policy.
    pub fn is_consistent(&self) -> bool
    {
        self.check_consistency(false).is_ok()
    }

    /// Human readable dump of the forward index, one holder per line.
    pub fn render(&self) -> String
    {
        let mut output = String::from("Hash Map:");
        for (hash, holders) in &self.by_hash {
            let _ = write!(output, "\nHash: {hash}\n  Peers:");
            for peer in holders {
                let _ = write!(output, "\n    {peer}");
            }
        }
        output
    }
}
