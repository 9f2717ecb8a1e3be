use std::sync::Arc;
use log::debug;
use crate::registry::structs::peer_address::PeerAddress;
use crate::registry::structs::peer_registry::PeerRegistry;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tcp::structs::session_guard::SessionGuard;

impl SessionGuard {
    pub fn new(registry: Arc<PeerRegistry>, peer: PeerAddress) -> SessionGuard
    {
        registry.update_stats(StatsEvent::ConnectionsHandled, 1);
        registry.update_stats(StatsEvent::ConnectionsActive, 1);
        SessionGuard { registry, peer }
    }
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        debug!("[SESSION] Releasing {}", self.peer);
        self.registry.purge_peer(&self.peer);
        self.registry.update_stats(StatsEvent::ConnectionsActive, -1);
    }
}
