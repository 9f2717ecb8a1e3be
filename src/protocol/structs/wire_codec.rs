use crate::config::enums::wire_encoding::WireEncoding;

/// Reads and writes length-prefixed frames whose bodies use `encoding`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireCodec {
    pub encoding: WireEncoding,
    pub max_frame_size: u32,
}
