use serde::{
    Deserialize,
    Serialize
};
use crate::config::enums::store_driver::StoreDriver;
use crate::config::structs::breaker_config::BreakerConfig;
use crate::config::structs::store_structure_config::StoreStructureConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct StoreConfig {
    pub engine: StoreDriver,
    pub path: String,
    pub structure: StoreStructureConfig,
    pub breaker: BreakerConfig,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            engine: StoreDriver::sqlite3,
            path: "sqlite://sessions.db".to_string(),
            structure: StoreStructureConfig::default(),
            breaker: BreakerConfig::for_store(),
        }
    }
}
