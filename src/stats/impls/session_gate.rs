use std::sync::atomic::Ordering;
use crate::breaker::enums::breaker_state::BreakerState;
use crate::session::structs::session_gate::SessionGate;
use crate::stats::enums::health_status::HealthStatus;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::cache_health::CacheHealth;
use crate::stats::structs::health_snapshot::HealthSnapshot;
use crate::stats::structs::stats::Stats;

impl SessionGate {
    pub fn get_stats(&self) -> Stats {
        self.stats.snapshot()
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64) -> Stats {
        self.stats.apply(event, value);
        self.stats.snapshot()
    }

    /// Combined health payload for the surrounding application's endpoint.
    ///
    /// Read-only and non-blocking: polls counters and breaker states, never
    /// calls out to a backend. Connectivity is derived from breaker state.
    pub fn health_snapshot(&self) -> HealthSnapshot {
        let cache_state = self.cache.breaker().current_state();
        let store_state = self.store_breaker.current_state();
        let cache_connected = self.cache.enabled() && cache_state != BreakerState::Open;
        let store_connected = store_state != BreakerState::Open;
        let pools = self.pools.snapshots();
        let saturated = pools.iter().any(|pool| pool.pending > 0 && pool.available == 0);
        let status = if !store_connected {
            HealthStatus::Unhealthy
        } else if (self.cache.enabled() && !cache_connected) || saturated {
            HealthStatus::Degraded
        } else {
            HealthStatus::Healthy
        };
        HealthSnapshot {
            status,
            cache_connected,
            store_connected,
            cache: CacheHealth {
                hit_rate: self.stats.hit_rate(),
                errors: self.stats.cache_errors.load(Ordering::SeqCst),
            },
            pools,
            breakers: vec![self.cache.breaker().snapshot(), self.store_breaker.snapshot()],
            hotkeys: self.hotkeys.top_keys(self.config.hotkey.top_n),
        }
    }
}
