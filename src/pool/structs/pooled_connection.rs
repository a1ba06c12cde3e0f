use std::sync::Arc;
use tokio::sync::OwnedSemaphorePermit;
use crate::pool::structs::connection_pool::ConnectionPool;
use crate::pool::traits::poolable::Poolable;

/// Checkout guard; exclusively owns the connection until dropped.
///
/// Dropping the guard returns the connection to the pool's idle list unless
/// it was marked for discard, in which case the connection is closed and the
/// pool slot freed.
pub struct PooledConnection<C: Poolable> {
    pub(crate) inner: Option<C>,
    pub(crate) pool: Arc<ConnectionPool<C>>,
    pub(crate) _permit: OwnedSemaphorePermit,
    pub(crate) discard: bool,
}
