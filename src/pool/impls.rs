//! Implementation blocks for pool types.

/// Acquire/checkin/sweep logic for the connection pool.
pub mod connection_pool;

/// Registry registration, snapshots and the sweep task.
pub mod pool_registry;

/// Checkout guard deref and drop behavior.
pub mod pooled_connection;
