use serde::{Deserialize, Serialize};

/// Opaque content identifier supplied by clients. The registry never hashes anything itself.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[serde(transparent)]
pub struct ContentHash(pub i64);
