//! Protocol enumerations.

/// Request tags understood by the registry.
pub mod request_tag;

/// Errors raised while reading or writing frames.
pub mod wire_error;
