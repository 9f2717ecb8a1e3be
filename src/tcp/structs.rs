//! TCP data structures.

/// The accepting listener.
pub mod tcp_server;

/// One connected client.
pub mod session;

/// Drop guard that purges a peer when its session ends.
pub mod session_guard;
