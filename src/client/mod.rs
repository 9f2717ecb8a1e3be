//! Async client speaking the registry wire protocol.
//!
//! One `RegistryClient` wraps one TCP connection; the server identifies the
//! client by that connection's address, so dropping the client withdraws
//! everything it announced.

/// Client structures.
pub mod structs;

/// Implementation blocks for the client.
pub mod impls;
