use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use log::debug;
use parking_lot::Mutex;
use tokio::sync::Semaphore;
use crate::common::common::current_time;
use crate::config::enums::service_tier::ServiceTier;
use crate::config::structs::pool_config::PoolConfig;
use crate::config::structs::tier_limits::TierLimits;
use crate::pool::enums::pool_error::PoolError;
use crate::pool::structs::connection_pool::ConnectionPool;
use crate::pool::structs::idle_connection::IdleConnection;
use crate::pool::structs::pool_snapshot::PoolSnapshot;
use crate::pool::structs::pooled_connection::PooledConnection;
use crate::pool::traits::pool_probe::PoolProbe;
use crate::pool::traits::poolable::Poolable;

impl<C: Poolable> ConnectionPool<C> {
    pub fn new(backend: &str, tier: ServiceTier, url: &str, limits: TierLimits, tuning: PoolConfig) -> Arc<ConnectionPool<C>> {
        Arc::new_cyclic(|this| ConnectionPool {
            this: this.clone(),
            backend: backend.to_string(),
            tier,
            url: url.to_string(),
            permits: Arc::new(Semaphore::new(limits.max_pool_size.max(1))),
            limits,
            tuning,
            idle: Mutex::new(VecDeque::new()),
            size: AtomicUsize::new(0),
            pending: AtomicUsize::new(0),
            closed: AtomicBool::new(false),
        })
    }

    /// Pre-opens `min_pool_size` connections so the first callers do not pay
    /// the connection setup cost.
    pub async fn warm(&self) -> Result<(), PoolError> {
        for _ in 0..self.limits.min_pool_size {
            let connection = C::connect(&self.url).await?;
            self.size.fetch_add(1, Ordering::SeqCst);
            self.idle.lock().push_back(IdleConnection {
                connection,
                idle_since: current_time() as i64,
            });
        }
        debug!("[Pool] {}/{} warmed {} connection(s)", self.backend, self.tier, self.limits.min_pool_size);
        Ok(())
    }

    /// Checks out a connection, waiting up to the acquire-timeout when the
    /// pool is at capacity.
    pub async fn acquire(&self) -> Result<PooledConnection<C>, PoolError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(PoolError::Closed);
        }
        let Some(pool) = self.this.upgrade() else {
            return Err(PoolError::Closed);
        };
        let waited_ms = self.tuning.acquire_timeout_ms;
        self.pending.fetch_add(1, Ordering::SeqCst);
        let acquired = tokio::time::timeout(
            Duration::from_millis(waited_ms),
            self.permits.clone().acquire_owned()
        ).await;
        self.pending.fetch_sub(1, Ordering::SeqCst);
        let permit = match acquired {
            Ok(Ok(permit)) => permit,
            Ok(Err(_)) => return Err(PoolError::Closed),
            Err(_) => {
                return Err(PoolError::Exhausted {
                    backend: self.backend.clone(),
                    tier: self.tier.to_string(),
                    waited_ms,
                });
            }
        };

        let validation_threshold = self.tuning.validation_threshold_secs as i64;
        loop {
            let entry = self.idle.lock().pop_front();
            let Some(mut entry) = entry else { break };
            if current_time() as i64 - entry.idle_since >= validation_threshold
                && !entry.connection.ping().await {
                    debug!("[Pool] {}/{} discarded a dead idle connection", self.backend, self.tier);
                    self.size.fetch_sub(1, Ordering::SeqCst);
                    continue;
                }
            return Ok(PooledConnection {
                inner: Some(entry.connection),
                pool,
                _permit: permit,
                discard: false,
            });
        }

        match C::connect(&self.url).await {
            Ok(connection) => {
                self.size.fetch_add(1, Ordering::SeqCst);
                Ok(PooledConnection {
                    inner: Some(connection),
                    pool,
                    _permit: permit,
                    discard: false,
                })
            }
            Err(e) => Err(e),
        }
    }

    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
        let mut idle = self.idle.lock();
        self.size.fetch_sub(idle.len(), Ordering::SeqCst);
        idle.clear();
        self.permits.close();
    }

    pub(crate) fn checkin(&self, connection: C) {
        if self.closed.load(Ordering::SeqCst) {
            self.size.fetch_sub(1, Ordering::SeqCst);
            return;
        }
        self.idle.lock().push_back(IdleConnection {
            connection,
            idle_since: current_time() as i64,
        });
    }

    pub(crate) fn discard_checked_out(&self) {
        self.size.fetch_sub(1, Ordering::SeqCst);
    }
}

impl<C: Poolable> PoolProbe for ConnectionPool<C> {
    fn snapshot(&self) -> PoolSnapshot {
        PoolSnapshot {
            backend: self.backend.clone(),
            tier: self.tier,
            size: self.size.load(Ordering::SeqCst),
            available: self.idle.lock().len(),
            pending: self.pending.load(Ordering::SeqCst),
            min_size: self.limits.min_pool_size,
            max_size: self.limits.max_pool_size,
        }
    }

    fn drain_idle(&self) -> usize {
        let cutoff = current_time() as i64 - self.tuning.idle_timeout_secs as i64;
        let mut dropped = 0;
        let mut idle = self.idle.lock();
        while self.size.load(Ordering::SeqCst) > self.limits.min_pool_size {
            match idle.front() {
                Some(entry) if entry.idle_since <= cutoff => {
                    idle.pop_front();
                    self.size.fetch_sub(1, Ordering::SeqCst);
                    dropped += 1;
                }
                _ => break,
            }
        }
        dropped
    }
}
