use std::sync::atomic::Ordering;
use crate::registry::structs::peer_registry::PeerRegistry;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;

impl PeerRegistry {
    pub fn get_stats(&self) -> Stats
    {
        Stats {
            started: self.stats.started.load(Ordering::SeqCst),
            hashes: self.stats.hashes.load(Ordering::SeqCst),
            peers: self.stats.peers.load(Ordering::SeqCst),
            announcements: self.stats.announcements.load(Ordering::SeqCst),
            connections_active: self.stats.connections_active.load(Ordering::SeqCst),
            connections_handled: self.stats.connections_handled.load(Ordering::SeqCst),
            store_handled: self.stats.store_handled.load(Ordering::SeqCst),
            create_handled: self.stats.create_handled.load(Ordering::SeqCst),
            delete_handled: self.stats.delete_handled.load(Ordering::SeqCst),
            query_handled: self.stats.query_handled.load(Ordering::SeqCst),
            unknown_requests: self.stats.unknown_requests.load(Ordering::SeqCst),
            decode_failures: self.stats.decode_failures.load(Ordering::SeqCst),
            purges: self.stats.purges.load(Ordering::SeqCst),
        }
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64)
    {
        let counter = self.stats.counter(event);
        if value > 0 { counter.fetch_add(value, Ordering::SeqCst); }
        if value < 0 { counter.fetch_sub(-value, Ordering::SeqCst); }
    }

    pub fn set_stats(&self, event: StatsEvent, value: i64)
    {
        self.stats.counter(event).store(value, Ordering::SeqCst);
    }
}
