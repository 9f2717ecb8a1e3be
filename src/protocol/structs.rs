//! Protocol data structures.

/// Length-prefixed frame reader/writer bound to one value encoding.
pub mod wire_codec;
