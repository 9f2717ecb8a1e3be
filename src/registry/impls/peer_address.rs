use std::fmt;
use std::fmt::Formatter;
use std::net::SocketAddr;
use crate::registry::structs::peer_address::PeerAddress;

impl PeerAddress {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PeerAddress {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<SocketAddr> for PeerAddress {
    fn from(addr: SocketAddr) -> Self {
        PeerAddress(addr.to_string())
    }
}

impl From<&str> for PeerAddress {
    fn from(addr: &str) -> Self {
        PeerAddress(addr.to_string())
    }
}

impl From<String> for PeerAddress {
    fn from(addr: String) -> Self {
        PeerAddress(addr)
    }
}

impl From<PeerAddress> for String {
    fn from(addr: PeerAddress) -> Self {
        addr.0
    }
}
