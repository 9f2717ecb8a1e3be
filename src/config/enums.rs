//! Configuration enumerations.

/// Value encoding used inside wire frames.
pub mod wire_encoding;

/// Errors raised while loading, saving or validating configuration.
pub mod configuration_error;
