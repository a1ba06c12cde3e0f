//! Session enumerations.

/// Errors raised while building a gate from configuration.
pub mod bootstrap_error;

/// Errors surfaced by validation and logout.
pub mod session_error;

/// Outcome of a token validation.
pub mod validation;
