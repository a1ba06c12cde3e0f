#[cfg(test)]
mod pool_tests {
    mod pool_error_tests {
        use crate::pool::enums::pool_error::PoolError;

        #[test]
        fn test_exhausted_display() {
            let error = PoolError::Exhausted {
                backend: "cache".to_string(),
                tier: "pro".to_string(),
                waited_ms: 100,
            };
            assert_eq!(format!("{}", error), "No cache/pro connection available within 100ms");
        }

        #[test]
        fn test_connect_display() {
            let error = PoolError::Connect("refused".to_string());
            assert_eq!(format!("{}", error), "Failed to open connection: refused");
        }

        #[test]
        fn test_closed_display() {
            assert_eq!(format!("{}", PoolError::Closed), "Pool is shut down");
        }
    }

    mod pool_registry_tests {
        use crate::pool::structs::pool_registry::PoolRegistry;

        #[test]
        fn test_empty_registry_snapshots() {
            let registry = PoolRegistry::new();
            assert!(registry.snapshots().is_empty());
            assert_eq!(registry.drain_idle(), 0);
        }
    }
}
