//! Implementation blocks for cache types.

/// Resilience policy around the raw backend.
pub mod cache_adapter;

/// Redis wire operations.
pub mod cache_connector_redis;

/// Pooling contract for Redis connections.
pub mod redis_pool_connection;
