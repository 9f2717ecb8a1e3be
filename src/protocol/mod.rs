//! Wire protocol shared by the TCP server and the client.
//!
//! Every value on the wire travels in its own frame:
//!
//! ```text
//! +----------------------+-------------------------------+
//! | length: u32 (BE)     | body: `length` encoded bytes  |
//! +----------------------+-------------------------------+
//! ```
//!
//! The body is a self-describing value encoded with the configured
//! [`WireEncoding`](crate::config::enums::wire_encoding::WireEncoding)
//! (MessagePack by default, JSON optionally).
//!
//! A request is two frames: the request tag (a string) followed by its payload
//! (an integer array for `store`, a single integer for `create`, `delete` and
//! `query`). Only `query` is answered, with one frame holding the array of peer
//! addresses. Because the payload is always a full frame, an unknown tag can be
//! skipped without losing track of the stream.

/// Protocol enumerations (request tags, errors).
pub mod enums;

/// Protocol data structures (the frame codec).
pub mod structs;

/// Implementation blocks for protocol types.
pub mod impls;
