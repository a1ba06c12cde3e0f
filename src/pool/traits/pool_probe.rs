use crate::pool::structs::pool_snapshot::PoolSnapshot;

/// Type-erased view over a connection pool, independent of its connection type.
pub trait PoolProbe: Send + Sync {
    /// Non-blocking health snapshot; never waits on acquire/release.
    fn snapshot(&self) -> PoolSnapshot;

    /// Closes idle connections beyond the tier minimum that exceeded the
    /// idle timeout. Returns the number of connections closed.
    fn drain_idle(&self) -> usize;
}
