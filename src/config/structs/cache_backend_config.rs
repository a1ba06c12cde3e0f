use serde::{
    Deserialize,
    Serialize
};
use crate::config::structs::breaker_config::BreakerConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct CacheBackendConfig {
    pub enabled: bool,
    pub address: String,
    pub prefix: String,
    pub ttl: u64,
    pub breaker: BreakerConfig,
}

impl Default for CacheBackendConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            address: "127.0.0.1:6379".to_string(),
            prefix: "session:".to_string(),
            ttl: 300,
            breaker: BreakerConfig::for_cache(),
        }
    }
}
