use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub started: i64,
    pub hashes: i64,
    pub peers: i64,
    pub announcements: i64,
    pub connections_active: i64,
    pub connections_handled: i64,
    pub store_handled: i64,
    pub create_handled: i64,
    pub delete_handled: i64,
    pub query_handled: i64,
    pub unknown_requests: i64,
    pub decode_failures: i64,
    pub purges: i64,
}
