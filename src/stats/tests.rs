#[cfg(test)]
mod stats_tests {
    mod stats_atomics_tests {
        use crate::stats::enums::stats_event::StatsEvent;
        use crate::stats::structs::stats_atomics::StatsAtomics;

        #[test]
        fn test_initial_snapshot_is_zero() {
            let stats = StatsAtomics::default();
            let snapshot = stats.snapshot();
            assert_eq!(snapshot.cache_hits, 0);
            assert_eq!(snapshot.cache_misses, 0);
            assert_eq!(snapshot.sessions_validated, 0);
            assert!(snapshot.started > 0);
        }

        #[test]
        fn test_apply_increment_and_decrement() {
            let stats = StatsAtomics::default();
            stats.apply(StatsEvent::CacheHits, 5);
            stats.apply(StatsEvent::CacheHits, -2);
            stats.apply(StatsEvent::StoreLookups, 1);
            let snapshot = stats.snapshot();
            assert_eq!(snapshot.cache_hits, 3);
            assert_eq!(snapshot.store_lookups, 1);
        }

        #[test]
        fn test_hit_rate() {
            let stats = StatsAtomics::default();
            assert_eq!(stats.hit_rate(), 0.0);
            stats.apply(StatsEvent::CacheHits, 3);
            stats.apply(StatsEvent::CacheMisses, 1);
            assert_eq!(stats.hit_rate(), 75.0);
        }
    }

    mod health_status_tests {
        use crate::stats::enums::health_status::HealthStatus;

        #[test]
        fn test_health_status_display() {
            assert_eq!(format!("{}", HealthStatus::Healthy), "healthy");
            assert_eq!(format!("{}", HealthStatus::Degraded), "degraded");
            assert_eq!(format!("{}", HealthStatus::Unhealthy), "unhealthy");
        }

        #[test]
        fn test_health_status_serialization() {
            assert_eq!(serde_json::to_string(&HealthStatus::Degraded).unwrap(), "\"degraded\"");
        }
    }
}
