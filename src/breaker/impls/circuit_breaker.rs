use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicU8, AtomicU64, Ordering};
use std::time::Duration;
use log::info;
use crate::breaker::enums::breaker_error::BreakerError;
use crate::breaker::enums::breaker_state::BreakerState;
use crate::breaker::structs::breaker_snapshot::BreakerSnapshot;
use crate::breaker::structs::circuit_breaker::CircuitBreaker;
use crate::breaker::structs::rolling_window::RollingWindow;
use crate::common::common::current_time_millis;
use crate::config::structs::breaker_config::BreakerConfig;

impl CircuitBreaker {
    pub fn new(backend: &str, config: BreakerConfig) -> CircuitBreaker {
        CircuitBreaker {
            backend: backend.to_string(),
            window: RollingWindow::new(config.rolling_window_ms, config.rolling_buckets),
            config,
            state: AtomicU8::new(BreakerState::Closed.as_u8()),
            opened_at: AtomicI64::new(0),
            half_open_probe: AtomicBool::new(false),
            last_transition_at: AtomicI64::new(current_time_millis()),
            times_opened: AtomicU64::new(0),
            total_successes: AtomicU64::new(0),
            total_failures: AtomicU64::new(0),
        }
    }

    /// Current state, promoting OPEN to HALF_OPEN once the reset timeout elapsed.
    pub fn current_state(&self) -> BreakerState {
        let state = BreakerState::from_u8(self.state.load(Ordering::SeqCst));
        if state == BreakerState::Open {
            let now = current_time_millis();
            if now - self.opened_at.load(Ordering::SeqCst) >= self.config.reset_timeout_ms as i64
                && self.transition(BreakerState::Open, BreakerState::HalfOpen) {
                    return BreakerState::HalfOpen;
                }
            return BreakerState::from_u8(self.state.load(Ordering::SeqCst));
        }
        state
    }

    /// Runs `operation` gated by the breaker.
    ///
    /// OPEN rejects without touching the backend; HALF_OPEN admits a single
    /// trial call; CLOSED runs the call under the configured timeout and
    /// feeds the rolling window.
    pub async fn execute<T, E, F, Fut>(&self, operation: F) -> Result<T, BreakerError<E>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        match self.current_state() {
            BreakerState::Open => Err(BreakerError::Open),
            BreakerState::HalfOpen => {
                if self.half_open_probe.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst).is_err() {
                    return Err(BreakerError::Open);
                }
                let result = self.run(operation()).await;
                match &result {
                    Ok(_) => {
                        self.total_successes.fetch_add(1, Ordering::SeqCst);
                        self.transition(BreakerState::HalfOpen, BreakerState::Closed);
                    }
                    Err(_) => {
                        self.total_failures.fetch_add(1, Ordering::SeqCst);
                        self.transition(BreakerState::HalfOpen, BreakerState::Open);
                    }
                }
                result
            }
            BreakerState::Closed => {
                let result = self.run(operation()).await;
                match &result {
                    Ok(_) => self.record_success(),
                    Err(_) => self.record_failure(),
                }
                result
            }
        }
    }

    pub fn snapshot(&self) -> BreakerSnapshot {
        let now = current_time_millis();
        let (successes, failures) = self.window.totals(now);
        BreakerSnapshot {
            backend: self.backend.clone(),
            state: self.current_state(),
            failure_count: failures,
            success_count: successes,
            window_start: self.window.window_start(now),
            last_transition_at: self.last_transition_at.load(Ordering::SeqCst),
            times_opened: self.times_opened.load(Ordering::SeqCst),
        }
    }

    async fn run<T, E, Fut>(&self, call: Fut) -> Result<T, BreakerError<E>>
    where
        Fut: Future<Output = Result<T, E>>,
    {
        match tokio::time::timeout(Duration::from_millis(self.config.call_timeout_ms), call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(BreakerError::Inner(e)),
            Err(_) => Err(BreakerError::Timeout(self.config.call_timeout_ms)),
        }
    }

    fn record_success(&self) {
        self.total_successes.fetch_add(1, Ordering::SeqCst);
        self.window.record_success(current_time_millis());
    }

    fn record_failure(&self) {
        self.total_failures.fetch_add(1, Ordering::SeqCst);
        let now = current_time_millis();
        self.window.record_failure(now);
        let (successes, failures) = self.window.totals(now);
        let total = successes + failures;
        if total >= self.config.request_volume_threshold
            && failures * 100 >= self.config.error_threshold_percentage as u64 * total {
                self.transition(BreakerState::Closed, BreakerState::Open);
            }
    }

    /// CAS-based transition; calling it twice in the same tick is a no-op.
    pub(crate) fn transition(&self, from: BreakerState, to: BreakerState) -> bool {
        if self.state.compare_exchange(from.as_u8(), to.as_u8(), Ordering::SeqCst, Ordering::SeqCst).is_ok() {
            let now = current_time_millis();
            self.last_transition_at.store(now, Ordering::SeqCst);
            match to {
                BreakerState::Open => {
                    self.opened_at.store(now, Ordering::SeqCst);
                    self.times_opened.fetch_add(1, Ordering::SeqCst);
                }
                BreakerState::Closed => {
                    self.window.reset();
                    self.half_open_probe.store(false, Ordering::SeqCst);
                }
                BreakerState::HalfOpen => {
                    self.half_open_probe.store(false, Ordering::SeqCst);
                }
            }
            info!("[Breaker] {} transitioned {} -> {}", self.backend, from, to);
            return true;
        }
        false
    }
}
