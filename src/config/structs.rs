//! Configuration data structures.
//!
//! This module contains all the struct definitions for configuration options.
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Announcement handling settings.
pub mod registry_config;

/// TCP listener configuration.
pub mod tcp_server_config;

/// Sentry error reporting configuration.
pub mod sentry_config;
