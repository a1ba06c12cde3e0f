//! Statistics data structures.

/// Cache section of the health snapshot.
pub mod cache_health;

/// Combined health snapshot payload.
pub mod health_snapshot;

/// Snapshot of current statistics values.
pub mod stats;

/// Atomic counters for thread-safe statistics updates.
pub mod stats_atomics;
