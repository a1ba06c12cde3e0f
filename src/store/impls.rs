//! Implementation blocks for store types.

/// Pooling contract for PostgreSQL connections.
pub mod pgsql_pool_connection;

/// Pooling contract for SQLite connections.
pub mod sqlite_pool_connection;

/// Driver dispatch over the configured engine.
pub mod store_connector;

/// PostgreSQL queries and schema bootstrap.
pub mod store_connector_pgsql;

/// SQLite queries and schema bootstrap.
pub mod store_connector_sqlite;
