//! Pool trait definitions.

/// Type-erased pool access for sweeping and snapshots.
pub mod pool_probe;

/// Contract for connection types that can be pooled.
pub mod poolable;
