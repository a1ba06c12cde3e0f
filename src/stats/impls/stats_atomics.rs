use std::sync::atomic::{AtomicI64, Ordering};
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl StatsAtomics {
    pub fn snapshot(&self) -> Stats {
        Stats {
            started: self.started.load(Ordering::SeqCst),
            cache_hits: self.cache_hits.load(Ordering::SeqCst),
            cache_misses: self.cache_misses.load(Ordering::SeqCst),
            cache_errors: self.cache_errors.load(Ordering::SeqCst),
            cache_writebacks: self.cache_writebacks.load(Ordering::SeqCst),
            cache_invalidations: self.cache_invalidations.load(Ordering::SeqCst),
            store_lookups: self.store_lookups.load(Ordering::SeqCst),
            store_errors: self.store_errors.load(Ordering::SeqCst),
            sessions_validated: self.sessions_validated.load(Ordering::SeqCst),
            sessions_rejected: self.sessions_rejected.load(Ordering::SeqCst),
            logouts: self.logouts.load(Ordering::SeqCst),
            logout_failures: self.logout_failures.load(Ordering::SeqCst),
            touch_failures: self.touch_failures.load(Ordering::SeqCst),
            tier_rejections: self.tier_rejections.load(Ordering::SeqCst),
            hotkey_alerts: self.hotkey_alerts.load(Ordering::SeqCst),
        }
    }

    pub fn apply(&self, event: StatsEvent, value: i64) {
        let counter: &AtomicI64 = match event {
            StatsEvent::CacheHits => &self.cache_hits,
            StatsEvent::CacheMisses => &self.cache_misses,
            StatsEvent::CacheErrors => &self.cache_errors,
            StatsEvent::CacheWritebacks => &self.cache_writebacks,
            StatsEvent::CacheInvalidations => &self.cache_invalidations,
            StatsEvent::StoreLookups => &self.store_lookups,
            StatsEvent::StoreErrors => &self.store_errors,
            StatsEvent::SessionsValidated => &self.sessions_validated,
            StatsEvent::SessionsRejected => &self.sessions_rejected,
            StatsEvent::Logouts => &self.logouts,
            StatsEvent::LogoutFailures => &self.logout_failures,
            StatsEvent::TouchFailures => &self.touch_failures,
            StatsEvent::TierRejections => &self.tier_rejections,
            StatsEvent::HotkeyAlerts => &self.hotkey_alerts,
        };
        if value > 0 { counter.fetch_add(value, Ordering::SeqCst); }
        if value < 0 { counter.fetch_sub(-value, Ordering::SeqCst); }
    }

    /// Cache hit rate over the process lifetime, 0-100.
    pub fn hit_rate(&self) -> f64 {
        let hits = self.cache_hits.load(Ordering::SeqCst) as f64;
        let misses = self.cache_misses.load(Ordering::SeqCst) as f64;
        if hits + misses == 0.0 {
            return 0.0;
        }
        hits * 100.0 / (hits + misses)
    }
}
