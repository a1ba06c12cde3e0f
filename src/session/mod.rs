//! Session cache module.
//!
//! The cache-aside layer and the central `SessionGate` registry. A caller
//! presents an opaque bearer token; the gate hashes it, consults the cache
//! through the resilience adapter, and on a miss (or a degraded cache) falls
//! through to the authoritative store, repopulating the cache best-effort.
//!
//! # Guarantees
//!
//! - "token is bad" and "could not check the token" are never conflated:
//!   validation returns `Valid`/`Invalid`, store failures return errors
//! - negative lookups are never cached, so a just-issued session cannot be
//!   masked by replication lag
//! - logout deletes the cache entry before the store record; partial failure
//!   is reported distinctly from total failure
//! - a degraded cache costs latency, never correctness

/// Session enumerations (validation outcome, errors).
pub mod enums;

/// Implementation blocks for the gate and session types.
pub mod impls;

/// Session data structures.
pub mod structs;
