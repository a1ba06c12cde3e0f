//! Session data structures.

/// The central registry tying cache, store, breakers, pools and stats together.
pub mod session_gate;

/// A validated session row.
pub mod session_record;

/// SHA-1 token digest used as the cache and store key.
pub mod token_hash;
