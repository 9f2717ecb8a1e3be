use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinHandle;
use crate::config::structs::tcp_server_config::TcpServerConfig;
use crate::registry::structs::peer_registry::PeerRegistry;
use crate::tcp::structs::tcp_server::TcpServer;

/// Binds the listener and spawns its accept loop.
///
/// Returns the bound address (useful with port 0) and the accept loop handle,
/// which finishes once `rx` changes.
pub async fn tcp_service(
    registry: Arc<PeerRegistry>,
    config: &TcpServerConfig,
    rx: tokio::sync::watch::Receiver<bool>
) -> io::Result<(SocketAddr, JoinHandle<()>)>
{
    let server = TcpServer::new(registry, config)?;
    let local_addr = server.local_addr()?;
    let handle = tokio::spawn(server.start(rx));
    Ok((local_addr, handle))
}
