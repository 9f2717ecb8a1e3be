use std::fmt;
use crate::config::enums::wire_encoding::WireEncoding;

impl fmt::Display for WireEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireEncoding::msgpack => write!(f, "msgpack"),
            WireEncoding::json => write!(f, "json"),
        }
    }
}
