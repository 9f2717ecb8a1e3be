use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use log::{debug, error, info};
use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;
use crate::config::structs::tcp_server_config::TcpServerConfig;
use crate::protocol::structs::wire_codec::WireCodec;
use crate::registry::structs::peer_address::PeerAddress;
use crate::registry::structs::peer_registry::PeerRegistry;
use crate::tcp::structs::session::Session;
use crate::tcp::structs::tcp_server::TcpServer;

impl TcpServer {
    /// Binds the listening socket. Must be called inside a tokio runtime.
    #[tracing::instrument(level = "debug", skip(registry))]
    pub fn new(registry: Arc<PeerRegistry>, config: &TcpServerConfig) -> io::Result<TcpServer>
    {
        let bind_address: SocketAddr = config.bind_address.parse().map_err(io::Error::other)?;
        let domain = if bind_address.is_ipv4() { Domain::IPV4 } else { Domain::IPV6 };
        let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

        socket.set_reuse_address(config.reuse_address)?;
        socket.bind(&bind_address.into())?;
        socket.listen(config.backlog)?;
        socket.set_nonblocking(true)?;

        let std_listener: std::net::TcpListener = socket.into();
        let listener = TcpListener::from_std(std_listener)?;
        info!("[TCP] Server is listening on {} ({} encoding)", listener.local_addr()?, config.encoding);

        Ok(TcpServer {
            listener,
            registry,
            codec: WireCodec::from_config(config),
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr>
    {
        self.listener.local_addr()
    }

    /// Accepts connections until `rx` changes, one spawned session per connection.
    pub async fn start(self, mut rx: tokio::sync::watch::Receiver<bool>)
    {
        let local_addr = self.local_addr().map(|addr| addr.to_string()).unwrap_or_default();
        loop {
            tokio::select! {
                _ = rx.changed() => {
                    info!("[TCP] Stopping server on {local_addr}...");
                    break;
                }
                result = self.listener.accept() => {
                    match result {
                        Ok((stream, remote_addr)) => {
                            if let Err(error) = stream.set_nodelay(true) {
                                debug!("[TCP] Unable to set TCP_NODELAY for {remote_addr}: {error}");
                            }
                            let session = Session::new(stream, PeerAddress::from(remote_addr), self.registry.clone(), self.codec);
                            tokio::spawn(session.run());
                        }
                        Err(error) => {
                            error!("[TCP] Error accepting connection: {error}");
                        }
                    }
                }
            }
        }
    }
}
