use async_trait::async_trait;
use sqlx::Connection;
use sqlx::postgres::PgConnection;
use crate::pool::enums::pool_error::PoolError;
use crate::pool::traits::poolable::Poolable;
use crate::store::structs::pgsql_pool_connection::PgsqlPoolConnection;

#[async_trait]
impl Poolable for PgsqlPoolConnection {
    async fn connect(url: &str) -> Result<Self, PoolError> {
        let connection = PgConnection::connect(url)
            .await
            .map_err(|e| PoolError::Connect(format!("Failed to connect to PgSQL: {}", e)))?;
        Ok(PgsqlPoolConnection { connection })
    }

    async fn ping(&mut self) -> bool {
        self.connection.ping().await.is_ok()
    }
}
