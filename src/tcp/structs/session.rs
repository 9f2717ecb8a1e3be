use std::sync::Arc;
use crate::protocol::structs::wire_codec::WireCodec;
use crate::registry::structs::peer_address::PeerAddress;
use crate::registry::structs::peer_registry::PeerRegistry;
use crate::tcp::enums::session_state::SessionState;

#[derive(Debug)]
pub struct Session<S> {
    pub stream: S,
    pub peer: PeerAddress,
    pub registry: Arc<PeerRegistry>,
    pub codec: WireCodec,
    pub state: SessionState,
    pub requests_handled: u64,
}
