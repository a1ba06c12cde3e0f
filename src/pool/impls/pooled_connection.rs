use std::ops::{Deref, DerefMut};
use crate::pool::structs::pooled_connection::PooledConnection;
use crate::pool::traits::poolable::Poolable;

impl<C: Poolable> PooledConnection<C> {
    /// Marks the connection as broken; on drop it is closed instead of
    /// returned to the idle list, freeing the slot for a replacement.
    pub fn discard(mut self) {
        self.discard = true;
    }
}

impl<C: Poolable> Deref for PooledConnection<C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.inner.as_ref().expect("connection already returned to the pool")
    }
}

impl<C: Poolable> DerefMut for PooledConnection<C> {
    fn deref_mut(&mut self) -> &mut C {
        self.inner.as_mut().expect("connection already returned to the pool")
    }
}

impl<C: Poolable> Drop for PooledConnection<C> {
    fn drop(&mut self) {
        if let Some(connection) = self.inner.take() {
            if self.discard {
                self.pool.discard_checked_out();
            } else {
                self.pool.checkin(connection);
            }
        }
    }
}
