use std::fs::File;
use std::io::Write;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::enums::store_driver::StoreDriver;
use crate::config::structs::breaker_config::BreakerConfig;
use crate::config::structs::cache_backend_config::CacheBackendConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::hotkey_config::HotkeyConfig;
use crate::config::structs::pool_config::PoolConfig;
use crate::config::structs::store_config::StoreConfig;
use crate::config::structs::store_structure_config::StoreStructureConfig;
use crate::config::structs::tiers_config::TiersConfig;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            cache: CacheBackendConfig {
                enabled: true,
                address: String::from("127.0.0.1:6379"),
                prefix: String::from("session:"),
                ttl: 300,
                breaker: BreakerConfig::for_cache(),
            },
            store: StoreConfig {
                engine: StoreDriver::sqlite3,
                path: String::from("sqlite://sessions.db"),
                structure: StoreStructureConfig::default(),
                breaker: BreakerConfig::for_store(),
            },
            pool: PoolConfig::default(),
            tiers: TiersConfig::default(),
            hotkey: HotkeyConfig::default(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e)),
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e)),
        }
    }
}
