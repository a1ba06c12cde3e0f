use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    CacheHits,
    CacheMisses,
    CacheErrors,
    CacheWritebacks,
    CacheInvalidations,
    StoreLookups,
    StoreErrors,
    SessionsValidated,
    SessionsRejected,
    Logouts,
    LogoutFailures,
    TouchFailures,
    TierRejections,
    HotkeyAlerts,
}
