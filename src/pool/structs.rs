//! Pool data structures.

/// The bounded per-backend/per-tier connection pool.
pub mod connection_pool;

/// An idle pooled connection with its checkin timestamp.
pub mod idle_connection;

/// Registry of every pool for sweeping and health snapshots.
pub mod pool_registry;

/// Non-blocking pool health snapshot.
pub mod pool_snapshot;

/// Scoped checkout guard for a pooled connection.
pub mod pooled_connection;
