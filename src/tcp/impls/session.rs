use std::sync::Arc;
use log::{debug, error, info, warn};
use tokio::io::{AsyncRead, AsyncWrite};
use crate::protocol::enums::request_tag::RequestTag;
use crate::protocol::enums::wire_error::WireError;
use crate::protocol::structs::wire_codec::WireCodec;
use crate::registry::structs::content_hash::ContentHash;
use crate::registry::structs::peer_address::PeerAddress;
use crate::registry::structs::peer_registry::PeerRegistry;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tcp::enums::session_state::SessionState;
use crate::tcp::structs::session::Session;
use crate::tcp::structs::session_guard::SessionGuard;

impl<S: AsyncRead + AsyncWrite + Unpin + Send> Session<S> {
    pub fn new(stream: S, peer: PeerAddress, registry: Arc<PeerRegistry>, codec: WireCodec) -> Session<S>
    {
        Session {
            stream,
            peer,
            registry,
            codec,
            state: SessionState::AwaitingRequestTag,
            requests_handled: 0,
        }
    }

    /// Serves request cycles until the client goes away or sends something undecodable.
    ///
    /// The peer's announcements are purged when this returns or unwinds, and the
    /// stream is closed when the session is dropped. Returns the number of requests
    /// handled.
    pub async fn run(mut self) -> u64
    {
        let _guard = SessionGuard::new(self.registry.clone(), self.peer.clone());
        info!("[SESSION] Client connected: {}", self.peer);

        loop {
            self.state = SessionState::AwaitingRequestTag;
            let tag = match self.codec.read_value::<String, _>(&mut self.stream).await {
                Ok(Some(tag)) => RequestTag::parse(&tag),
                Ok(None) => {
                    info!("[SESSION] Client disconnected: {}", self.peer);
                    break;
                }
                Err(error) => {
                    self.registry.update_stats(StatsEvent::DecodeFailures, 1);
                    error!("[SESSION] Error decoding request type from {}: {error}", self.peer);
                    break;
                }
            };

            self.state = SessionState::Dispatching(tag.clone());
            match self.dispatch(tag).await {
                Ok(()) => {}
                Err(WireError::ConnectionClosed) => {
                    info!("[SESSION] Client disconnected mid-request: {} ({:?})", self.peer, self.state);
                    break;
                }
                Err(error @ (WireError::Decode(_) | WireError::FrameTooLarge { .. } | WireError::UnexpectedEof)) => {
                    self.registry.update_stats(StatsEvent::DecodeFailures, 1);
                    error!("[SESSION] Error decoding request from {} ({:?}): {error}", self.peer, self.state);
                    break;
                }
                Err(error) => {
                    error!("[SESSION] Error handling request from {} ({:?}): {error}", self.peer, self.state);
                    break;
                }
            }
            self.requests_handled += 1;
        }

        let last_state = std::mem::replace(&mut self.state, SessionState::Closed);
        debug!("[SESSION] Closed {} after {} requests, last state {last_state:?}", self.peer, self.requests_handled);
        self.requests_handled
    }

    /// Reads the payload for `tag`, applies it to the registry and answers `query`.
    ///
    /// The registry call finishes before any response is written, so no lock is held
    /// across network I/O.
    pub async fn dispatch(&mut self, tag: RequestTag) -> Result<(), WireError>
    {
        match tag {
            RequestTag::Store => {
                let hashes: Vec<ContentHash> = self.codec.expect_value(&mut self.stream).await?;
                self.registry.announce_many(&self.peer, &hashes);
                self.registry.update_stats(StatsEvent::StoreHandled, 1);
            }
            RequestTag::Create => {
                let hash: ContentHash = self.codec.expect_value(&mut self.stream).await?;
                self.registry.announce_one(&self.peer, hash);
                self.registry.update_stats(StatsEvent::CreateHandled, 1);
            }
            RequestTag::Delete => {
                let hash: ContentHash = self.codec.expect_value(&mut self.stream).await?;
                self.registry.withdraw(&self.peer, hash);
                self.registry.update_stats(StatsEvent::DeleteHandled, 1);
            }
            RequestTag::Query => {
                let hash: ContentHash = self.codec.expect_value(&mut self.stream).await?;
                let holders = self.registry.query(hash);
                self.codec.write_value(&mut self.stream, &holders).await?;
                self.registry.update_stats(StatsEvent::QueryHandled, 1);
            }
            RequestTag::Unknown(tag) => {
                let skipped = self.codec.skip_frame(&mut self.stream).await?;
                self.registry.update_stats(StatsEvent::UnknownRequests, 1);
                warn!("[SESSION] Unknown request type from {}: {tag:?} ({skipped} payload bytes skipped)", self.peer);
            }
        }
        Ok(())
    }
}
