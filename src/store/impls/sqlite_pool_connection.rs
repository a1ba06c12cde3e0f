use async_trait::async_trait;
use sqlx::Connection;
use sqlx::sqlite::SqliteConnection;
use crate::pool::enums::pool_error::PoolError;
use crate::pool::traits::poolable::Poolable;
use crate::store::structs::sqlite_pool_connection::SqlitePoolConnection;

#[async_trait]
impl Poolable for SqlitePoolConnection {
    async fn connect(url: &str) -> Result<Self, PoolError> {
        let connection = SqliteConnection::connect(url)
            .await
            .map_err(|e| PoolError::Connect(format!("Failed to connect to SQLite: {}", e)))?;
        Ok(SqlitePoolConnection { connection })
    }

    async fn ping(&mut self) -> bool {
        self.connection.ping().await.is_ok()
    }
}
