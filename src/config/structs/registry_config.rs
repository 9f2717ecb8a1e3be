use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Treat a repeated (hash, peer) announcement as a no-op instead of a second entry.
    pub deduplicate_announcements: bool,
    /// Log the full index after every `store` request (debug level).
    pub dump_on_store: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        RegistryConfig {
            deduplicate_announcements: false,
            dump_on_store: true,
        }
    }
}
