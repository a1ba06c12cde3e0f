use serde::{
    Deserialize,
    Serialize
};
use crate::config::structs::tier_limits::TierLimits;

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
#[serde(default)]
pub struct TiersConfig {
    pub free: TierLimits,
    pub pro: TierLimits,
    pub enterprise: TierLimits,
}

impl Default for TiersConfig {
    fn default() -> Self {
        Self {
            free: TierLimits {
                min_pool_size: 1,
                max_pool_size: 4,
                max_concurrent_requests: 32,
                query_timeout_ms: 2000,
            },
            pro: TierLimits {
                min_pool_size: 2,
                max_pool_size: 8,
                max_concurrent_requests: 64,
                query_timeout_ms: 3000,
            },
            enterprise: TierLimits {
                min_pool_size: 4,
                max_pool_size: 16,
                max_concurrent_requests: 128,
                query_timeout_ms: 5000,
            },
        }
    }
}
