use std::sync::atomic::{AtomicBool, AtomicI64, AtomicU8, AtomicU64};
use crate::breaker::structs::rolling_window::RollingWindow;
use crate::config::structs::breaker_config::BreakerConfig;

pub struct CircuitBreaker {
    pub(crate) backend: String,
    pub(crate) config: BreakerConfig,
    pub(crate) state: AtomicU8,
    pub(crate) window: RollingWindow,
    pub(crate) opened_at: AtomicI64,
    pub(crate) half_open_probe: AtomicBool,
    pub(crate) last_transition_at: AtomicI64,
    pub(crate) times_opened: AtomicU64,
    pub(crate) total_successes: AtomicU64,
    pub(crate) total_failures: AtomicU64,
}
