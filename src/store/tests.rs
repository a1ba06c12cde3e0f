#[cfg(test)]
mod store_tests {
    mod store_error_tests {
        use crate::pool::enums::pool_error::PoolError;
        use crate::store::enums::store_error::StoreError;

        #[test]
        fn test_unavailable_display() {
            assert_eq!(format!("{}", StoreError::Unavailable), "Store unavailable");
        }

        #[test]
        fn test_timeout_display() {
            assert_eq!(format!("{}", StoreError::Timeout(3000)), "Store call timed out after 3000ms");
        }

        #[test]
        fn test_decode_error_display() {
            let error = StoreError::DecodeError("bad uuid".to_string());
            assert_eq!(format!("{}", error), "Row decode error: bad uuid");
        }

        #[test]
        fn test_pool_error_conversion() {
            let error: StoreError = PoolError::Closed.into();
            assert_eq!(format!("{}", error), "Pool error: Pool is shut down");
        }

        #[test]
        fn test_not_connected_display() {
            assert_eq!(format!("{}", StoreError::NotConnected), "Store driver not connected");
        }
    }
}
