use serde::{
    Deserialize,
    Serialize
};
use crate::config::structs::cache_backend_config::CacheBackendConfig;
use crate::config::structs::hotkey_config::HotkeyConfig;
use crate::config::structs::pool_config::PoolConfig;
use crate::config::structs::store_config::StoreConfig;
use crate::config::structs::tiers_config::TiersConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Configuration {
    pub log_level: String,
    pub cache: CacheBackendConfig,
    pub store: StoreConfig,
    pub pool: PoolConfig,
    pub tiers: TiersConfig,
    pub hotkey: HotkeyConfig,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::init()
    }
}
