//! Hotkey detection module.
//!
//! Observes every cache key touch and flags keys receiving a
//! disproportionate share of accesses within the sliding window. Counting is
//! sharded across small per-second bucket maps so the recording path stays
//! lock-light and never blocks or fails the caller.
//!
//! Threshold alerts are emitted once per window per key and counted for the
//! health aggregator; `top_keys` sums the active window on demand.

/// Implementation blocks for the detector.
pub mod impls;

/// Hotkey data structures.
pub mod structs;
