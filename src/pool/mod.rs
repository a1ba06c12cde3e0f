//! Connection pool module.
//!
//! Owns bounded sets of reusable backend connections per backend and per
//! service tier. Pools are sized by the tier limits from configuration:
//! `acquire` waits up to the configured acquire-timeout when every connection
//! is checked out, then fails with an exhaustion error instead of growing
//! unbounded.
//!
//! # Features
//!
//! - Scoped checkout guards that return (or discard) the connection on every
//!   exit path, including timeout and error paths
//! - Validation ping before handing out connections idle past a threshold
//! - Periodic idle sweep closing connections beyond the tier minimum
//! - Non-blocking health snapshots (`size`, `available`, `pending`)
//!
//! The pool registry collects every pool behind a single object so the
//! health aggregator and the sweep task can reach them without knowing the
//! concrete connection types.

/// Pool error enumeration.
pub mod enums;

/// Implementation blocks for pools, guards and the registry.
pub mod impls;

/// Pool data structures.
pub mod structs;

/// Pool trait definitions.
pub mod traits;

#[cfg(test)]
mod tests;
