use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use log::info;
use sqlx::Row;
use uuid::Uuid;
use crate::config::enums::service_tier::ServiceTier;
use crate::config::structs::pool_config::PoolConfig;
use crate::config::structs::store_config::StoreConfig;
use crate::config::structs::tiers_config::TiersConfig;
use crate::pool::structs::connection_pool::ConnectionPool;
use crate::pool::structs::pool_registry::PoolRegistry;
use crate::pool::traits::poolable::Poolable;
use crate::session::structs::session_record::SessionRecord;
use crate::session::structs::token_hash::TokenHash;
use crate::store::enums::store_error::StoreError;
use crate::store::structs::pgsql_pool_connection::PgsqlPoolConnection;
use crate::store::structs::store_connector_pgsql::StoreConnectorPgsql;
use crate::store::traits::session_store::SessionStore;

impl StoreConnectorPgsql {
    pub async fn connect(
        config: &StoreConfig,
        tiers: &TiersConfig,
        tuning: &PoolConfig,
    ) -> Result<StoreConnectorPgsql, StoreError> {
        let mut pools = BTreeMap::new();
        for tier in ServiceTier::all() {
            let pool: Arc<ConnectionPool<PgsqlPoolConnection>> =
                ConnectionPool::new("store", tier, &config.path, *tiers.limits(tier), tuning.clone());
            pool.warm().await?;
            pools.insert(tier, pool);
        }
        info!("[PgSQL] Connected to {}", config.path);
        Ok(StoreConnectorPgsql {
            pools,
            structure: config.structure.clone(),
            tiers: *tiers,
            url: config.path.clone(),
        })
    }

    pub async fn create_schema(&self) -> Result<(), StoreError> {
        let s = &self.structure;
        info!("[BOOT PgSQL] Creating table {}", s.table_name);
        let sql = format!(
            "CREATE TABLE IF NOT EXISTS {} ({} character(40) NOT NULL, {} character varying(64) NOT NULL, {} character varying(64) NOT NULL, {} bigint NOT NULL DEFAULT 0, {} bigint NOT NULL DEFAULT 0, {} bigint NOT NULL DEFAULT 0, CONSTRAINT {}_pkey PRIMARY KEY ({}))",
            s.table_name,
            s.column_token_hash,
            s.column_user_id,
            s.column_org_id,
            s.column_issued_at,
            s.column_expires_at,
            s.column_last_activity,
            s.table_name,
            s.column_token_hash
        );
        let mut conn = PgsqlPoolConnection::connect(&self.url).await?;
        sqlx::query(&sql).execute(&mut conn.connection).await?;
        Ok(())
    }

    pub fn register_pools(&self, registry: &PoolRegistry) {
        for pool in self.pools.values() {
            registry.register(pool.clone());
        }
    }

    fn pool(&self, tier: ServiceTier) -> Result<&Arc<ConnectionPool<PgsqlPoolConnection>>, StoreError> {
        self.pools.get(&tier).ok_or(StoreError::NotConnected)
    }
}

#[async_trait]
impl SessionStore for StoreConnectorPgsql {
    async fn ping(&self, tier: ServiceTier) -> Result<(), StoreError> {
        let mut conn = self.pool(tier)?.acquire().await?;
        let alive = conn.ping().await;
        if !alive {
            conn.discard();
            return Err(StoreError::Unavailable);
        }
        Ok(())
    }

    async fn fetch_session(
        &self,
        tier: ServiceTier,
        token_hash: &TokenHash,
    ) -> Result<Option<SessionRecord>, StoreError> {
        let limits = self.tiers.limits(tier);
        let s = &self.structure;
        let sql = format!(
            "SELECT {}, {}, {}, {}, {}, {} FROM {} WHERE {} = $1",
            s.column_token_hash,
            s.column_user_id,
            s.column_org_id,
            s.column_issued_at,
            s.column_expires_at,
            s.column_last_activity,
            s.table_name,
            s.column_token_hash
        );
        let mut conn = self.pool(tier)?.acquire().await?;
        let result = tokio::time::timeout(
            Duration::from_millis(limits.query_timeout_ms),
            sqlx::query(&sql).bind(token_hash.to_string()).fetch_optional(&mut conn.connection)
        ).await;
        match result {
            Ok(Ok(Some(row))) => {
                let token: String = row.try_get(s.column_token_hash.as_str())?;
                let user_id: String = row.try_get(s.column_user_id.as_str())?;
                let org_id: String = row.try_get(s.column_org_id.as_str())?;
                Ok(Some(SessionRecord {
                    token_hash: token.trim().parse::<TokenHash>()
                        .map_err(|e| StoreError::DecodeError(e.to_string()))?,
                    user_id: Uuid::parse_str(user_id.trim())
                        .map_err(|e| StoreError::DecodeError(e.to_string()))?,
                    org_id: Uuid::parse_str(org_id.trim())
                        .map_err(|e| StoreError::DecodeError(e.to_string()))?,
                    issued_at: row.try_get::<i64, _>(s.column_issued_at.as_str())?,
                    expires_at: row.try_get::<i64, _>(s.column_expires_at.as_str())?,
                    last_activity_at: row.try_get::<i64, _>(s.column_last_activity.as_str())?,
                }))
            }
            Ok(Ok(None)) => Ok(None),
            Ok(Err(e)) => {
                conn.discard();
                Err(StoreError::QueryError(e))
            }
            Err(_) => {
                conn.discard();
                Err(StoreError::Timeout(limits.query_timeout_ms))
            }
        }
    }

    async fn delete_session(
        &self,
        tier: ServiceTier,
        token_hash: &TokenHash,
    ) -> Result<bool, StoreError> {
        let limits = self.tiers.limits(tier);
        let s = &self.structure;
        let sql = format!(
            "DELETE FROM {} WHERE {} = $1",
            s.table_name,
            s.column_token_hash
        );
        let mut conn = self.pool(tier)?.acquire().await?;
        let result = tokio::time::timeout(
            Duration::from_millis(limits.query_timeout_ms),
            sqlx::query(&sql).bind(token_hash.to_string()).execute(&mut conn.connection)
        ).await;
        match result {
            Ok(Ok(done)) => Ok(done.rows_affected() > 0),
            Ok(Err(e)) => {
                conn.discard();
                Err(StoreError::QueryError(e))
            }
            Err(_) => {
                conn.discard();
                Err(StoreError::Timeout(limits.query_timeout_ms))
            }
        }
    }

    async fn touch_activity(
        &self,
        tier: ServiceTier,
        token_hash: &TokenHash,
        at: i64,
    ) -> Result<(), StoreError> {
        let limits = self.tiers.limits(tier);
        let s = &self.structure;
        let sql = format!(
            "UPDATE {} SET {} = $1 WHERE {} = $2",
            s.table_name,
            s.column_last_activity,
            s.column_token_hash
        );
        let mut conn = self.pool(tier)?.acquire().await?;
        let result = tokio::time::timeout(
            Duration::from_millis(limits.query_timeout_ms),
            sqlx::query(&sql).bind(at).bind(token_hash.to_string()).execute(&mut conn.connection)
        ).await;
        match result {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(e)) => {
                conn.discard();
                Err(StoreError::QueryError(e))
            }
            Err(_) => {
                conn.discard();
                Err(StoreError::Timeout(limits.query_timeout_ms))
            }
        }
    }
}
