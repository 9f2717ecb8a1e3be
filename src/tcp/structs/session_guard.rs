use std::sync::Arc;
use crate::registry::structs::peer_address::PeerAddress;
use crate::registry::structs::peer_registry::PeerRegistry;

/// Registers a live connection and purges its peer from the registry on drop.
#[derive(Debug)]
pub struct SessionGuard {
    pub(crate) registry: Arc<PeerRegistry>,
    pub(crate) peer: PeerAddress,
}
