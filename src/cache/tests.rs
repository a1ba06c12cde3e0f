#[cfg(test)]
mod cache_tests {
    mod cache_error_tests {
        use crate::cache::enums::cache_error::CacheError;
        use crate::pool::enums::pool_error::PoolError;

        #[test]
        fn test_connection_error_display() {
            let error = CacheError::ConnectionError("failed to connect".to_string());
            assert_eq!(format!("{}", error), "Connection error: failed to connect");
        }

        #[test]
        fn test_operation_error_display() {
            let error = CacheError::OperationError("operation failed".to_string());
            assert_eq!(format!("{}", error), "Operation error: operation failed");
        }

        #[test]
        fn test_serialization_error_display() {
            let error = CacheError::SerializationError("invalid data".to_string());
            assert_eq!(format!("{}", error), "Serialization error: invalid data");
        }

        #[test]
        fn test_unavailable_display() {
            assert_eq!(format!("{}", CacheError::Unavailable), "Cache backend unavailable");
        }

        #[test]
        fn test_timeout_display() {
            assert_eq!(format!("{}", CacheError::Timeout(1000)), "Cache call timed out after 1000ms");
        }

        #[test]
        fn test_pool_error_conversion() {
            let error: CacheError = PoolError::Closed.into();
            assert_eq!(format!("{}", error), "Pool error: Pool is shut down");
        }

        #[test]
        fn test_error_debug() {
            let error = CacheError::ConnectionError("test".to_string());
            let debug_str = format!("{:?}", error);
            assert!(debug_str.contains("ConnectionError"));
            assert!(debug_str.contains("test"));
        }
    }
}
