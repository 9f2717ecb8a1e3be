//! Common data structures.

/// Message carrying error used for startup failures.
pub mod custom_error;
