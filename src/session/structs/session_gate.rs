use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Semaphore;
use crate::breaker::structs::circuit_breaker::CircuitBreaker;
use crate::cache::structs::cache_adapter::CacheAdapter;
use crate::config::enums::service_tier::ServiceTier;
use crate::config::structs::configuration::Configuration;
use crate::hotkey::structs::hotkey_detector::HotkeyDetector;
use crate::pool::structs::pool_registry::PoolRegistry;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::store::traits::session_store::SessionStore;

pub struct SessionGate {
    pub config: Arc<Configuration>,
    pub cache: CacheAdapter,
    pub store: Arc<dyn SessionStore>,
    pub store_breaker: Arc<CircuitBreaker>,
    pub hotkeys: Arc<HotkeyDetector>,
    pub pools: Arc<PoolRegistry>,
    pub stats: Arc<StatsAtomics>,
    pub(crate) tier_gates: BTreeMap<ServiceTier, Arc<Semaphore>>,
}
