use std::sync::atomic::AtomicI64;
use crate::common::common::current_time;

pub struct StatsAtomics {
    pub started: AtomicI64,
    pub cache_hits: AtomicI64,
    pub cache_misses: AtomicI64,
    pub cache_errors: AtomicI64,
    pub cache_writebacks: AtomicI64,
    pub cache_invalidations: AtomicI64,
    pub store_lookups: AtomicI64,
    pub store_errors: AtomicI64,
    pub sessions_validated: AtomicI64,
    pub sessions_rejected: AtomicI64,
    pub logouts: AtomicI64,
    pub logout_failures: AtomicI64,
    pub touch_failures: AtomicI64,
    pub tier_rejections: AtomicI64,
    pub hotkey_alerts: AtomicI64,
}

impl Default for StatsAtomics {
    fn default() -> Self {
        Self {
            started: AtomicI64::new(current_time() as i64),
            cache_hits: AtomicI64::new(0),
            cache_misses: AtomicI64::new(0),
            cache_errors: AtomicI64::new(0),
            cache_writebacks: AtomicI64::new(0),
            cache_invalidations: AtomicI64::new(0),
            store_lookups: AtomicI64::new(0),
            store_errors: AtomicI64::new(0),
            sessions_validated: AtomicI64::new(0),
            sessions_rejected: AtomicI64::new(0),
            logouts: AtomicI64::new(0),
            logout_failures: AtomicI64::new(0),
            touch_failures: AtomicI64::new(0),
            tier_rejections: AtomicI64::new(0),
            hotkey_alerts: AtomicI64::new(0),
        }
    }
}
