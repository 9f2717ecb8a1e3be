use std::sync::atomic::AtomicI64;

#[derive(Debug)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub hashes: AtomicI64,
    pub peers: AtomicI64,
    pub announcements: AtomicI64,
    pub connections_active: AtomicI64,
    pub connections_handled: AtomicI64,
    pub store_handled: AtomicI64,
    pub create_handled: AtomicI64,
    pub delete_handled: AtomicI64,
    pub query_handled: AtomicI64,
    pub unknown_requests: AtomicI64,
    pub decode_failures: AtomicI64,
    pub purges: AtomicI64,
}
