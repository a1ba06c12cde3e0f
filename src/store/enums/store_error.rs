use thiserror::Error;
use crate::pool::enums::pool_error::PoolError;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store unavailable")]
    Unavailable,

    #[error("Store call timed out after {0}ms")]
    Timeout(u64),

    #[error("Query error: {0}")]
    QueryError(#[from] sqlx::Error),

    #[error("Row decode error: {0}")]
    DecodeError(String),

    #[error("Pool error: {0}")]
    PoolError(#[from] PoolError),

    #[error("Store driver not connected")]
    NotConnected,
}
