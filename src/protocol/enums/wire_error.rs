use thiserror::Error;

#[derive(Error, Debug)]
pub enum WireError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("connection closed in the middle of a frame")]
    UnexpectedEof,

    #[error("connection closed")]
    ConnectionClosed,

    #[error("frame of {size} bytes exceeds the limit of {max} bytes")]
    FrameTooLarge { size: u64, max: u32 },

    #[error("Serialization error: {0}")]
    Encode(String),

    #[error("Deserialization error: {0}")]
    Decode(String),
}
