//! Breaker enumerations.

/// Errors surfaced by a gated call.
pub mod breaker_error;

/// Circuit breaker states.
pub mod breaker_state;
