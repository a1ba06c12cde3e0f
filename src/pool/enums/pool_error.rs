use thiserror::Error;

#[derive(Error, Debug)]
pub enum PoolError {
    #[error("No {backend}/{tier} connection available within {waited_ms}ms")]
    Exhausted {
        backend: String,
        tier: String,
        waited_ms: u64,
    },

    #[error("Failed to open connection: {0}")]
    Connect(String),

    #[error("Pool is shut down")]
    Closed,
}
