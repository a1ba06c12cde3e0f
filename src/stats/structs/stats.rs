use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy)]
pub struct Stats {
    pub started: i64,
    pub cache_hits: i64,
    pub cache_misses: i64,
    pub cache_errors: i64,
    pub cache_writebacks: i64,
    pub cache_invalidations: i64,
    pub store_lookups: i64,
    pub store_errors: i64,
    pub sessions_validated: i64,
    pub sessions_rejected: i64,
    pub logouts: i64,
    pub logout_failures: i64,
    pub touch_failures: i64,
    pub tier_rejections: i64,
    pub hotkey_alerts: i64,
}
