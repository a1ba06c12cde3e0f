use crate::session::enums::session_error::SessionError;

impl SessionError {
    /// Whether the caller may safely retry the operation.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            SessionError::PoolExhausted(_)
                | SessionError::TierSaturated(_)
                | SessionError::StoreTimeout
        )
    }
}
