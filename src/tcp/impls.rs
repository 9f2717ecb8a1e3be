//! Implementation blocks for the TCP structures.

/// TcpServer binding and accept loop.
pub mod tcp_server;

/// Session request loop and dispatch.
pub mod session;

/// SessionGuard registration and Drop cleanup.
pub mod session_guard;
