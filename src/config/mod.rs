//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the registry configuration
//! from TOML files.
//!
//! # Configuration Structure
//!
//! The main configuration file (`config.toml`) contains:
//! - **log_level** / **log_console_interval**: Logging and console statistics
//! - **registry_config**: Announcement handling (duplicate policy, diagnostics)
//! - **tcp_server**: The listener (bind address, wire encoding, frame limits)
//! - **sentry_config**: Error reporting configuration
//!
//! # Example
//!
//! ```rust,ignore
//! use torrust_registry::config::structs::configuration::Configuration;
//!
//! // Load configuration from file
//! let config = Configuration::load_from_file("config.toml", false)?;
//!
//! // Generate default configuration
//! let default_config = Configuration::init();
//! Configuration::save_from_config(Arc::new(default_config), "config.toml");
//! ```

/// Configuration enumerations (wire encoding, errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
