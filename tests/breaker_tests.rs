// Integration tests for the circuit breaker state machine

mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use sessiongate::breaker::enums::breaker_error::BreakerError;
use sessiongate::breaker::enums::breaker_state::BreakerState;
use sessiongate::breaker::structs::circuit_breaker::CircuitBreaker;
use sessiongate::cache::enums::cache_error::CacheError;
use sessiongate::config::structs::breaker_config::BreakerConfig;

fn test_config(reset_timeout_ms: u64) -> BreakerConfig {
    BreakerConfig {
        call_timeout_ms: 100,
        error_threshold_percentage: 50,
        reset_timeout_ms,
        rolling_window_ms: 10000,
        rolling_buckets: 10,
        request_volume_threshold: 5,
    }
}

async fn fail(breaker: &CircuitBreaker) -> Result<(), BreakerError<CacheError>> {
    breaker
        .execute(|| async { Err::<(), CacheError>(CacheError::OperationError("boom".to_string())) })
        .await
        .map(|_| ())
}

async fn succeed(breaker: &CircuitBreaker) -> Result<(), BreakerError<CacheError>> {
    breaker.execute(|| async { Ok::<(), CacheError>(()) }).await
}

#[tokio::test]
async fn test_breaker_stays_closed_below_volume_threshold() {
    let breaker = CircuitBreaker::new("cache", test_config(30000));
    for _ in 0..4 {
        let _ = fail(&breaker).await;
    }
    assert_eq!(breaker.current_state(), BreakerState::Closed, "4 failures are below the volume threshold");
}

#[tokio::test]
async fn test_breaker_opens_when_failure_ratio_exceeds_threshold() {
    let breaker = CircuitBreaker::new("cache", test_config(30000));
    for _ in 0..4 {
        succeed(&breaker).await.unwrap();
    }
    // 6 failures out of 10 calls: 60% > 50%
    for _ in 0..6 {
        let _ = fail(&breaker).await;
    }
    assert_eq!(breaker.current_state(), BreakerState::Open);
}

#[tokio::test]
async fn test_open_breaker_rejects_without_calling_backend() {
    let breaker = CircuitBreaker::new("cache", test_config(30000));
    for _ in 0..6 {
        let _ = fail(&breaker).await;
    }
    assert_eq!(breaker.current_state(), BreakerState::Open);

    let calls = Arc::new(AtomicU64::new(0));
    let calls_in_op = calls.clone();
    let result = breaker
        .execute(|| async move {
            calls_in_op.fetch_add(1, Ordering::SeqCst);
            Ok::<(), CacheError>(())
        })
        .await;
    match result {
        Err(BreakerError::Open) => {}
        other => panic!("expected Open, got {:?}", other),
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0, "an open breaker must not run the operation");
}

#[tokio::test]
async fn test_open_transitions_to_half_open_then_closed_on_success() {
    let breaker = CircuitBreaker::new("cache", test_config(100));
    for _ in 0..6 {
        let _ = fail(&breaker).await;
    }
    assert_eq!(breaker.current_state(), BreakerState::Open);

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(breaker.current_state(), BreakerState::HalfOpen);

    succeed(&breaker).await.unwrap();
    assert_eq!(breaker.current_state(), BreakerState::Closed);

    // counters were reset, a single new failure must not reopen
    let _ = fail(&breaker).await;
    assert_eq!(breaker.current_state(), BreakerState::Closed);
}

#[tokio::test]
async fn test_half_open_failure_reopens() {
    let breaker = CircuitBreaker::new("cache", test_config(100));
    for _ in 0..6 {
        let _ = fail(&breaker).await;
    }
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(breaker.current_state(), BreakerState::HalfOpen);

    let _ = fail(&breaker).await;
    assert_eq!(breaker.current_state(), BreakerState::Open, "the trial failure must reopen the circuit");
}

#[tokio::test]
async fn test_timeout_counts_as_failure() {
    let breaker = CircuitBreaker::new("cache", test_config(30000));
    let result = breaker
        .execute(|| async {
            tokio::time::sleep(Duration::from_millis(500)).await;
            Ok::<(), CacheError>(())
        })
        .await;
    match result {
        Err(BreakerError::Timeout(ms)) => assert_eq!(ms, 100),
        other => panic!("expected Timeout, got {:?}", other),
    }
    let snapshot = breaker.snapshot();
    assert_eq!(snapshot.failure_count, 1);
}

#[tokio::test]
async fn test_snapshot_reports_transitions() {
    let breaker = CircuitBreaker::new("store", test_config(30000));
    succeed(&breaker).await.unwrap();
    for _ in 0..6 {
        let _ = fail(&breaker).await;
    }
    let snapshot = breaker.snapshot();
    assert_eq!(snapshot.backend, "store");
    assert_eq!(snapshot.state, BreakerState::Open);
    assert_eq!(snapshot.times_opened, 1);
    // the breaker opened mid-sequence, later calls were rejected unrecorded
    assert!(snapshot.failure_count >= 4);
    assert!(snapshot.last_transition_at > 0);
}
