use serde::{Deserialize, Serialize};

/// Remote endpoint of a connection in `ip:port` form, used as the holder identity.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[serde(transparent)]
pub struct PeerAddress(pub String);
