use async_trait::async_trait;
use log::info;
use crate::config::enums::service_tier::ServiceTier;
use crate::config::enums::store_driver::StoreDriver;
use crate::config::structs::configuration::Configuration;
use crate::pool::structs::pool_registry::PoolRegistry;
use crate::session::structs::session_record::SessionRecord;
use crate::session::structs::token_hash::TokenHash;
use crate::store::enums::store_error::StoreError;
use crate::store::structs::store_connector::StoreConnector;
use crate::store::structs::store_connector_pgsql::StoreConnectorPgsql;
use crate::store::structs::store_connector_sqlite::StoreConnectorSqlite;
use crate::store::traits::session_store::SessionStore;

impl StoreConnector {
    pub async fn connect(config: &Configuration) -> Result<StoreConnector, StoreError> {
        match config.store.engine {
            StoreDriver::pgsql => {
                let pgsql = StoreConnectorPgsql::connect(&config.store, &config.tiers, &config.pool).await?;
                info!("[Store] Using PgSQL engine");
                Ok(StoreConnector {
                    pgsql: Some(pgsql),
                    sqlite: None,
                    engine: Some(StoreDriver::pgsql),
                })
            }
            StoreDriver::sqlite3 => {
                let sqlite = StoreConnectorSqlite::connect(&config.store, &config.tiers, &config.pool).await?;
                info!("[Store] Using SQLite engine");
                Ok(StoreConnector {
                    pgsql: None,
                    sqlite: Some(sqlite),
                    engine: Some(StoreDriver::sqlite3),
                })
            }
        }
    }

    pub async fn create_schema(&self) -> Result<(), StoreError> {
        match self.engine.as_ref() {
            Some(StoreDriver::pgsql) => {
                match self.pgsql.as_ref() {
                    Some(pgsql) => pgsql.create_schema().await,
                    None => Err(StoreError::NotConnected),
                }
            }
            Some(StoreDriver::sqlite3) => {
                match self.sqlite.as_ref() {
                    Some(sqlite) => sqlite.create_schema().await,
                    None => Err(StoreError::NotConnected),
                }
            }
            None => Err(StoreError::NotConnected),
        }
    }

    pub fn register_pools(&self, registry: &PoolRegistry) {
        if let Some(ref pgsql) = self.pgsql {
            pgsql.register_pools(registry);
        }
        if let Some(ref sqlite) = self.sqlite {
            sqlite.register_pools(registry);
        }
    }
}

#[async_trait]
impl SessionStore for StoreConnector {
    async fn ping(&self, tier: ServiceTier) -> Result<(), StoreError> {
        match self.engine.as_ref() {
            Some(StoreDriver::pgsql) => {
                match self.pgsql.as_ref() {
                    Some(pgsql) => pgsql.ping(tier).await,
                    None => Err(StoreError::NotConnected),
                }
            }
            Some(StoreDriver::sqlite3) => {
                match self.sqlite.as_ref() {
                    Some(sqlite) => sqlite.ping(tier).await,
                    None => Err(StoreError::NotConnected),
                }
            }
            None => Err(StoreError::NotConnected),
        }
    }

    async fn fetch_session(
        &self,
        tier: ServiceTier,
        token_hash: &TokenHash,
    ) -> Result<Option<SessionRecord>, StoreError> {
        match self.engine.as_ref() {
            Some(StoreDriver::pgsql) => {
                match self.pgsql.as_ref() {
                    Some(pgsql) => pgsql.fetch_session(tier, token_hash).await,
                    None => Err(StoreError::NotConnected),
                }
            }
            Some(StoreDriver::sqlite3) => {
                match self.sqlite.as_ref() {
                    Some(sqlite) => sqlite.fetch_session(tier, token_hash).await,
                    None => Err(StoreError::NotConnected),
                }
            }
            None => Err(StoreError::NotConnected),
        }
    }

    async fn delete_session(
        &self,
        tier: ServiceTier,
        token_hash: &TokenHash,
    ) -> Result<bool, StoreError> {
        match self.engine.as_ref() {
            Some(StoreDriver::pgsql) => {
                match self.pgsql.as_ref() {
                    Some(pgsql) => pgsql.delete_session(tier, token_hash).await,
                    None => Err(StoreError::NotConnected),
                }
            }
            Some(StoreDriver::sqlite3) => {
                match self.sqlite.as_ref() {
                    Some(sqlite) => sqlite.delete_session(tier, token_hash).await,
                    None => Err(StoreError::NotConnected),
                }
            }
            None => Err(StoreError::NotConnected),
        }
    }

    async fn touch_activity(
        &self,
        tier: ServiceTier,
        token_hash: &TokenHash,
        at: i64,
    ) -> Result<(), StoreError> {
        match self.engine.as_ref() {
            Some(StoreDriver::pgsql) => {
                match self.pgsql.as_ref() {
                    Some(pgsql) => pgsql.touch_activity(tier, token_hash, at).await,
                    None => Err(StoreError::NotConnected),
                }
            }
            Some(StoreDriver::sqlite3) => {
                match self.sqlite.as_ref() {
                    Some(sqlite) => sqlite.touch_activity(tier, token_hash, at).await,
                    None => Err(StoreError::NotConnected),
                }
            }
            None => Err(StoreError::NotConnected),
        }
    }
}
