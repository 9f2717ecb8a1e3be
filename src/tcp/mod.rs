//! TCP listener and per-connection sessions.
//!
//! The listener accepts connections and spawns one `Session` task per
//! connection. A session reads request cycles (tag frame, payload frame) until
//! the client disconnects or sends something undecodable, calling into the
//! shared `PeerRegistry` for each request.
//!
//! # Session lifecycle
//!
//! ```text
//! AwaitingRequestTag --tag--> Dispatching --done--> AwaitingRequestTag
//!         |                        |
//!         +--- EOF / error --------+----> Closed
//! ```
//!
//! Every session owns a `SessionGuard`; dropping it purges the peer's
//! announcements, so cleanup happens exactly once on every exit path,
//! including a panicking session task.

/// Session state enumeration.
pub mod enums;

/// Listener, session and guard structures.
pub mod structs;

/// Implementation blocks for the TCP structures.
pub mod impls;

/// Service entry point used by the binary.
#[allow(clippy::module_inception)]
pub mod tcp;
