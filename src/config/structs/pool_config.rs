use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct PoolConfig {
    pub acquire_timeout_ms: u64,
    pub idle_timeout_secs: u64,
    pub validation_threshold_secs: u64,
    pub sweep_interval_secs: u64,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            acquire_timeout_ms: 500,
            idle_timeout_secs: 300,
            validation_threshold_secs: 30,
            sweep_interval_secs: 60,
        }
    }
}
