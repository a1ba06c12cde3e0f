use async_trait::async_trait;
use crate::cache::structs::redis_pool_connection::RedisPoolConnection;
use crate::pool::enums::pool_error::PoolError;
use crate::pool::traits::poolable::Poolable;

#[async_trait]
impl Poolable for RedisPoolConnection {
    async fn connect(url: &str) -> Result<Self, PoolError> {
        let client = redis::Client::open(url)
            .map_err(|e| PoolError::Connect(format!("Failed to create Redis client: {}", e)))?;
        let connection = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| PoolError::Connect(format!("Failed to connect to Redis: {}", e)))?;
        Ok(RedisPoolConnection { connection })
    }

    async fn ping(&mut self) -> bool {
        redis::cmd("PING")
            .query_async::<String>(&mut self.connection)
            .await
            .is_ok()
    }
}
