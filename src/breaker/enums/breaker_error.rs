use thiserror::Error;

#[derive(Error, Debug)]
pub enum BreakerError<E> {
    #[error("Circuit breaker is open")]
    Open,

    #[error("Call timed out after {0}ms")]
    Timeout(u64),

    #[error("Backend error: {0}")]
    Inner(E),
}
