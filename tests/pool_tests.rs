// Integration tests for the tiered connection pool

mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use async_trait::async_trait;
use sessiongate::config::enums::service_tier::ServiceTier;
use sessiongate::config::structs::pool_config::PoolConfig;
use sessiongate::config::structs::tier_limits::TierLimits;
use sessiongate::pool::enums::pool_error::PoolError;
use sessiongate::pool::structs::connection_pool::ConnectionPool;
use sessiongate::pool::structs::pool_registry::PoolRegistry;
use sessiongate::pool::traits::pool_probe::PoolProbe;
use sessiongate::pool::traits::poolable::Poolable;

static OPENED: AtomicU64 = AtomicU64::new(0);

struct TestConnection {
    #[allow(dead_code)]
    id: u64,
}

#[async_trait]
impl Poolable for TestConnection {
    async fn connect(_url: &str) -> Result<Self, PoolError> {
        Ok(TestConnection {
            id: OPENED.fetch_add(1, Ordering::SeqCst),
        })
    }

    async fn ping(&mut self) -> bool {
        true
    }
}

fn limits(min: usize, max: usize) -> TierLimits {
    TierLimits {
        min_pool_size: min,
        max_pool_size: max,
        max_concurrent_requests: 64,
        query_timeout_ms: 1000,
    }
}

fn tuning(acquire_timeout_ms: u64, idle_timeout_secs: u64) -> PoolConfig {
    PoolConfig {
        acquire_timeout_ms,
        idle_timeout_secs,
        validation_threshold_secs: 3600,
        sweep_interval_secs: 3600,
    }
}

#[tokio::test]
async fn test_acquire_beyond_capacity_fails_after_timeout() {
    let pool: Arc<ConnectionPool<TestConnection>> =
        ConnectionPool::new("store", ServiceTier::pro, "test://", limits(0, 2), tuning(100, 300));

    let first = pool.acquire().await.unwrap();
    let second = pool.acquire().await.unwrap();

    let started = Instant::now();
    let third = pool.acquire().await;
    let waited = started.elapsed();
    match third {
        Err(PoolError::Exhausted { waited_ms, .. }) => assert_eq!(waited_ms, 100),
        other => panic!("expected Exhausted, got {:?}", other.map(|_| "connection")),
    }
    assert!(waited >= Duration::from_millis(100), "acquire must block up to the timeout");

    drop(first);
    drop(second);
}

#[tokio::test]
async fn test_release_makes_connection_available_again() {
    let pool: Arc<ConnectionPool<TestConnection>> =
        ConnectionPool::new("store", ServiceTier::pro, "test://", limits(0, 1), tuning(100, 300));

    let guard = pool.acquire().await.unwrap();
    drop(guard);

    let snapshot = pool.snapshot();
    assert_eq!(snapshot.size, 1);
    assert_eq!(snapshot.available, 1);

    // the released connection is reused, not a new one opened
    let before = OPENED.load(Ordering::SeqCst);
    let _guard = pool.acquire().await.unwrap();
    assert_eq!(OPENED.load(Ordering::SeqCst), before);
}

#[tokio::test]
async fn test_snapshot_reflects_checked_out_connections() {
    let pool: Arc<ConnectionPool<TestConnection>> =
        ConnectionPool::new("cache", ServiceTier::free, "test://", limits(0, 4), tuning(100, 300));

    let a = pool.acquire().await.unwrap();
    let b = pool.acquire().await.unwrap();
    let snapshot = pool.snapshot();
    assert_eq!(snapshot.backend, "cache");
    assert_eq!(snapshot.tier, ServiceTier::free);
    assert_eq!(snapshot.size, 2);
    assert_eq!(snapshot.available, 0);
    assert_eq!(snapshot.pending, 0);
    assert_eq!(snapshot.max_size, 4);

    drop(a);
    drop(b);
    let snapshot = pool.snapshot();
    assert_eq!(snapshot.size, 2);
    assert_eq!(snapshot.available, 2);
}

#[tokio::test]
async fn test_warm_opens_min_pool_size() {
    let pool: Arc<ConnectionPool<TestConnection>> =
        ConnectionPool::new("store", ServiceTier::enterprise, "test://", limits(3, 8), tuning(100, 300));
    pool.warm().await.unwrap();

    let snapshot = pool.snapshot();
    assert_eq!(snapshot.size, 3);
    assert_eq!(snapshot.available, 3);
}

#[tokio::test]
async fn test_drain_idle_keeps_min_pool_size() {
    let pool: Arc<ConnectionPool<TestConnection>> =
        ConnectionPool::new("store", ServiceTier::pro, "test://", limits(1, 4), tuning(100, 0));

    let a = pool.acquire().await.unwrap();
    let b = pool.acquire().await.unwrap();
    let c = pool.acquire().await.unwrap();
    drop(a);
    drop(b);
    drop(c);
    assert_eq!(pool.snapshot().available, 3);

    // idle timeout is zero, everything beyond the minimum is reaped
    let dropped = pool.drain_idle();
    assert_eq!(dropped, 2);
    let snapshot = pool.snapshot();
    assert_eq!(snapshot.size, 1);
    assert_eq!(snapshot.available, 1);
}

#[tokio::test]
async fn test_discard_frees_the_slot() {
    let pool: Arc<ConnectionPool<TestConnection>> =
        ConnectionPool::new("store", ServiceTier::pro, "test://", limits(0, 1), tuning(100, 300));

    let guard = pool.acquire().await.unwrap();
    guard.discard();
    let snapshot = pool.snapshot();
    assert_eq!(snapshot.size, 0);
    assert_eq!(snapshot.available, 0);

    // the slot is free for a replacement
    let _guard = pool.acquire().await.unwrap();
    assert_eq!(pool.snapshot().size, 1);
}

#[tokio::test]
async fn test_closed_pool_rejects_acquire() {
    let pool: Arc<ConnectionPool<TestConnection>> =
        ConnectionPool::new("store", ServiceTier::pro, "test://", limits(0, 2), tuning(100, 300));
    pool.close();
    match pool.acquire().await {
        Err(PoolError::Closed) => {}
        other => panic!("expected Closed, got {:?}", other.map(|_| "connection")),
    }
}

#[tokio::test]
async fn test_registry_aggregates_snapshots_and_sweeps() {
    let registry = Arc::new(PoolRegistry::new());
    let pool: Arc<ConnectionPool<TestConnection>> =
        ConnectionPool::new("cache", ServiceTier::pro, "test://", limits(0, 2), tuning(100, 0));
    registry.register(pool.clone());

    let guard = pool.acquire().await.unwrap();
    drop(guard);

    let snapshots = registry.snapshots();
    assert_eq!(snapshots.len(), 1);
    assert_eq!(snapshots[0].available, 1);

    assert_eq!(registry.drain_idle(), 1);
    assert_eq!(registry.snapshots()[0].size, 0);
}
