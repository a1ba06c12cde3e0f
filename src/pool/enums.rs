//! Pool enumerations.

/// Errors raised while acquiring or opening pooled connections.
pub mod pool_error;
