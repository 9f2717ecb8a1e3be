//! TCP enumerations.

/// States of a connection session.
pub mod session_state;
