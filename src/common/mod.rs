//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used across
//! all other modules in the registry codebase.
//!
//! # Utilities
//!
//! - Logging setup
//! - Graceful shutdown waiting
//!
//! # Data Structures
//!
//! - `CustomError` - Simple message carrying error type used during startup
//!
//! # Example
//!
//! ```rust,ignore
//! use torrust_registry::common::common::{setup_logging, shutdown_waiting};
//!
//! setup_logging(&config);
//! let stopped = shutdown_waiting(Duration::from_secs(10), shutdown.clone()).await;
//! ```

/// Common data structures (errors).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
