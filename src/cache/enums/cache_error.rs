use thiserror::Error;
use crate::pool::enums::pool_error::PoolError;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Operation error: {0}")]
    OperationError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Cache backend unavailable")]
    Unavailable,

    #[error("Cache call timed out after {0}ms")]
    Timeout(u64),

    #[error("Pool error: {0}")]
    PoolError(#[from] PoolError),

    #[error("Redis error: {0}")]
    RedisError(#[from] redis::RedisError),
}
