use std::sync::Arc;
use parking_lot::RwLock;
use crate::config::structs::configuration::Configuration;
use crate::registry::structs::registry_index::RegistryIndex;
use crate::stats::structs::stats_atomics::StatsAtomics;

#[derive(Debug)]
pub struct PeerRegistry {
    pub config: Arc<Configuration>,
    pub index: Arc<RwLock<RegistryIndex>>,
    pub stats: Arc<StatsAtomics>,
}
