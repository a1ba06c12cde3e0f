use std::sync::Arc;
use std::time::Duration;
use log::debug;
use parking_lot::{Mutex, RwLock};
use tokio::time::MissedTickBehavior;
use crate::pool::structs::pool_registry::PoolRegistry;
use crate::pool::structs::pool_snapshot::PoolSnapshot;
use crate::pool::traits::pool_probe::PoolProbe;

impl PoolRegistry {
    pub fn new() -> PoolRegistry {
        PoolRegistry {
            pools: RwLock::new(Vec::new()),
            sweeper: Mutex::new(None),
        }
    }

    pub fn register(&self, pool: Arc<dyn PoolProbe>) {
        self.pools.write().push(pool);
    }

    pub fn snapshots(&self) -> Vec<PoolSnapshot> {
        self.pools.read().iter().map(|pool| pool.snapshot()).collect()
    }

    pub fn drain_idle(&self) -> usize {
        self.pools.read().iter().map(|pool| pool.drain_idle()).sum()
    }

    /// Starts the periodic idle sweep; idle connections beyond each pool's
    /// minimum are closed asynchronously, never on the release path.
    pub fn spawn_sweeper(self: Arc<Self>, interval_secs: u64) {
        let registry = self.clone();
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs.max(1)));
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let dropped = registry.drain_idle();
                if dropped > 0 {
                    debug!("[Pool] idle sweep closed {} connection(s)", dropped);
                }
            }
        });
        *self.sweeper.lock() = Some(handle);
    }

    pub fn shutdown(&self) {
        if let Some(handle) = self.sweeper.lock().take() {
            handle.abort();
        }
    }
}

impl Default for PoolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
