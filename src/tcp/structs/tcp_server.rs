use std::sync::Arc;
use tokio::net::TcpListener;
use crate::protocol::structs::wire_codec::WireCodec;
use crate::registry::structs::peer_registry::PeerRegistry;

#[derive(Debug)]
pub struct TcpServer {
    pub listener: TcpListener,
    pub registry: Arc<PeerRegistry>,
    pub codec: WireCodec,
}
