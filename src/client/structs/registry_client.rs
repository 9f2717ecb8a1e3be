use tokio::net::TcpStream;
use crate::protocol::structs::wire_codec::WireCodec;

#[derive(Debug)]
pub struct RegistryClient {
    pub(crate) stream: TcpStream,
    pub(crate) codec: WireCodec,
}
