use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct BreakerConfig {
    pub call_timeout_ms: u64,
    pub error_threshold_percentage: u8,
    pub reset_timeout_ms: u64,
    pub rolling_window_ms: u64,
    pub rolling_buckets: usize,
    pub request_volume_threshold: u64,
}

impl Default for BreakerConfig {
    fn default() -> Self {
        BreakerConfig::for_cache()
    }
}

impl BreakerConfig {
    pub fn for_cache() -> Self {
        Self {
            call_timeout_ms: 1000,
            error_threshold_percentage: 50,
            reset_timeout_ms: 30000,
            rolling_window_ms: 10000,
            rolling_buckets: 10,
            request_volume_threshold: 5,
        }
    }

    pub fn for_store() -> Self {
        Self {
            call_timeout_ms: 4000,
            error_threshold_percentage: 50,
            reset_timeout_ms: 30000,
            rolling_window_ms: 10000,
            rolling_buckets: 10,
            request_volume_threshold: 5,
        }
    }
}
