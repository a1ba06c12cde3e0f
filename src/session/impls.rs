//! Implementation blocks for session types.

/// Retryability classification for session errors.
pub mod session_error;

/// Gate construction, validation, logout and shutdown.
pub mod session_gate;

/// Expiry helpers for session records.
pub mod session_record;

/// Hashing, parsing and serde for token hashes.
pub mod token_hash;

/// Convenience accessors on the validation outcome.
pub mod validation;
