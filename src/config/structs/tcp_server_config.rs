use serde::{Deserialize, Serialize};
use crate::config::enums::wire_encoding::WireEncoding;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TcpServerConfig {
    pub enabled: bool,
    pub bind_address: String,
    pub encoding: WireEncoding,
    pub max_frame_size: u32,
    pub backlog: i32,
    pub reuse_address: bool,
}
