use async_trait::async_trait;
use crate::pool::enums::pool_error::PoolError;

/// A backend connection that can live in a [`ConnectionPool`].
///
/// [`ConnectionPool`]: crate::pool::structs::connection_pool::ConnectionPool
#[async_trait]
pub trait Poolable: Send + Sized + 'static {
    /// Opens a fresh connection against `url`.
    async fn connect(url: &str) -> Result<Self, PoolError>;

    /// Lightweight liveness check, run before handing out connections that
    /// sat idle past the validation threshold.
    async fn ping(&mut self) -> bool;
}
