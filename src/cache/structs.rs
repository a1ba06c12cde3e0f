//! Data structures for cache connections.

/// Resilience wrapper routing cache calls through breaker and hotkey tracking.
pub mod cache_adapter;

/// Redis connector with per-tier connection pools.
pub mod cache_connector_redis;

/// A pooled multiplexed Redis connection.
pub mod redis_pool_connection;
