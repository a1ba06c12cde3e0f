use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
#[serde(default)]
pub struct TierLimits {
    pub min_pool_size: usize,
    pub max_pool_size: usize,
    pub max_concurrent_requests: usize,
    pub query_timeout_ms: u64,
}

impl Default for TierLimits {
    fn default() -> Self {
        Self {
            min_pool_size: 1,
            max_pool_size: 8,
            max_concurrent_requests: 64,
            query_timeout_ms: 3000,
        }
    }
}
