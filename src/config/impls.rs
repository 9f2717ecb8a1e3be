//! Implementation blocks for configuration types.

/// Configuration loading, saving, defaults and validation.
pub mod configuration;

/// ConfigurationError Display and Error implementations.
pub mod configuration_error;

/// WireEncoding Display implementation.
pub mod wire_encoding;
