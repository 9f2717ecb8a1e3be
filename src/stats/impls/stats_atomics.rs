use std::sync::atomic::AtomicI64;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl StatsAtomics {
    pub fn counter(&self, event: StatsEvent) -> &AtomicI64
    {
        match event {
            StatsEvent::Hashes => &self.hashes,
            StatsEvent::Peers => &self.peers,
            StatsEvent::Announcements => &self.announcements,
            StatsEvent::ConnectionsActive => &self.connections_active,
            StatsEvent::ConnectionsHandled => &self.connections_handled,
            StatsEvent::StoreHandled => &self.store_handled,
            StatsEvent::CreateHandled => &self.create_handled,
            StatsEvent::DeleteHandled => &self.delete_handled,
            StatsEvent::QueryHandled => &self.query_handled,
            StatsEvent::UnknownRequests => &self.unknown_requests,
            StatsEvent::DecodeFailures => &self.decode_failures,
            StatsEvent::Purges => &self.purges,
        }
    }
}
