use std::io;
use std::net::SocketAddr;
use serde::Serialize;
use tokio::io::AsyncWriteExt;
use tokio::net::{TcpStream, ToSocketAddrs};
use crate::client::structs::registry_client::RegistryClient;
use crate::protocol::enums::request_tag::RequestTag;
use crate::protocol::enums::wire_error::WireError;
use crate::protocol::structs::wire_codec::WireCodec;
use crate::registry::structs::content_hash::ContentHash;
use crate::registry::structs::peer_address::PeerAddress;

impl RegistryClient {
    /// Connects to a server. `codec` must use the server's encoding.
    pub async fn connect<A: ToSocketAddrs>(addr: A, codec: WireCodec) -> io::Result<RegistryClient>
    {
        let stream = TcpStream::connect(addr).await?;
        stream.set_nodelay(true)?;
        Ok(RegistryClient { stream, codec })
    }

    /// The address the server sees as this client's peer address.
    pub fn local_addr(&self) -> io::Result<SocketAddr>
    {
        self.stream.local_addr()
    }

    pub fn peer_address(&self) -> io::Result<PeerAddress>
    {
        self.local_addr().map(PeerAddress::from)
    }

    pub async fn store(&mut self, hashes: &[ContentHash]) -> Result<(), WireError>
    {
        self.send_raw(RequestTag::Store.as_str(), hashes).await
    }

    pub async fn create(&mut self, hash: ContentHash) -> Result<(), WireError>
    {
        self.send_raw(RequestTag::Create.as_str(), &hash).await
    }

    pub async fn delete(&mut self, hash: ContentHash) -> Result<(), WireError>
    {
        self.send_raw(RequestTag::Delete.as_str(), &hash).await
    }

    /// Asks for the holders of `hash` and waits for the answer.
    ///
    /// Requests are served in order, so the answer also confirms that every
    /// earlier request on this connection has been applied.
    pub async fn query(&mut self, hash: ContentHash) -> Result<Vec<PeerAddress>, WireError>
    {
        self.send_raw(RequestTag::Query.as_str(), &hash).await?;
        self.codec.expect_value(&mut self.stream).await
    }

    /// Sends an arbitrary tag and payload without waiting for anything.
    pub async fn send_raw<T: Serialize + ?Sized>(&mut self, tag: &str, payload: &T) -> Result<(), WireError>
    {
        self.codec.write_value(&mut self.stream, tag).await?;
        self.codec.write_value(&mut self.stream, payload).await
    }

    /// Writes raw bytes, bypassing the frame encoder.
    pub async fn send_bytes(&mut self, bytes: &[u8]) -> Result<(), WireError>
    {
        self.stream.write_all(bytes).await?;
        self.stream.flush().await?;
        Ok(())
    }

    /// Waits for the server to close the connection.
    ///
    /// Returns `Ok(())` on a clean close and an error when the server sent data
    /// instead.
    pub async fn wait_closed(&mut self) -> Result<(), WireError>
    {
        match self.codec.read_frame(&mut self.stream).await {
            Ok(None) => Ok(()),
            Ok(Some(body)) => Err(WireError::Decode(format!("unexpected frame of {} bytes", body.len()))),
            Err(WireError::Io(error)) if error.kind() == io::ErrorKind::ConnectionReset => Ok(()),
            Err(error) => Err(error),
        }
    }

    /// Half-closes the connection; the server then purges this peer.
    pub async fn close(mut self) -> Result<(), WireError>
    {
        self.stream.shutdown().await?;
        self.wait_closed().await
    }
}
