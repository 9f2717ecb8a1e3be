use std::fmt;
use std::fmt::Formatter;
use crate::registry::structs::content_hash::ContentHash;

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ContentHash {
    fn from(hash: i64) -> Self {
        ContentHash(hash)
    }
}

impl From<ContentHash> for i64 {
    fn from(hash: ContentHash) -> Self {
        hash.0
    }
}
