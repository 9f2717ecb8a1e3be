//! Implementation blocks for protocol types.

/// RequestTag parsing and Display.
pub mod request_tag;

/// WireCodec framing and value (de)serialization.
pub mod wire_codec;
