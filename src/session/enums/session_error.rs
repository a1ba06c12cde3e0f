use thiserror::Error;
use crate::config::enums::service_tier::ServiceTier;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Authoritative store unavailable")]
    StoreUnavailable,

    #[error("Authoritative store timed out")]
    StoreTimeout,

    #[error("Authoritative lookup failed: {0}")]
    LookupFailed(String),

    #[error("No store connection available: {0}")]
    PoolExhausted(String),

    #[error("Tier {0} is at its concurrent request limit")]
    TierSaturated(ServiceTier),

    #[error("Logout partially failed at the {stage}: {reason}")]
    LogoutPartial {
        stage: String,
        reason: String,
    },

    #[error("Logout failed: {0}")]
    LogoutFailed(String),
}
