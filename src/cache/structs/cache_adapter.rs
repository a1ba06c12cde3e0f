use std::sync::Arc;
use crate::breaker::structs::circuit_breaker::CircuitBreaker;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::hotkey::structs::hotkey_detector::HotkeyDetector;
use crate::stats::structs::stats_atomics::StatsAtomics;

/// Resilience wrapper over the raw cache backend.
///
/// `backend` is `None` when the cache is disabled by configuration; every
/// read then degrades to a miss and every write to a no-op.
pub struct CacheAdapter {
    pub(crate) backend: Option<Arc<dyn CacheBackend>>,
    pub(crate) breaker: Arc<CircuitBreaker>,
    pub(crate) hotkeys: Arc<HotkeyDetector>,
    pub(crate) stats: Arc<StatsAtomics>,
}
