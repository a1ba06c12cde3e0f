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
use crate::store::structs::sqlite_pool_connection::SqlitePoolConnection;
use crate::store::structs::store_connector_sqlite::StoreConnectorSqlite;
use crate::store::traits::session_store::SessionStore;

impl StoreConnectorSqlite {
    pub async fn connect(
        config: &StoreConfig,
        tiers: &TiersConfig,
        tuning: &PoolConfig,
    ) -> Result<StoreConnectorSqlite, StoreError> {
        let mut pools = BTreeMap::new();
        for tier in ServiceTier::all() {
            let pool: Arc<ConnectionPool<SqlitePoolConnection>> =
                ConnectionPool::new("store", tier, &config.path, *tiers.limits(tier), tuning.clone());
            pool.warm().await?;
            pools.insert(tier, pool);
        }
        info!("[SQLite] Connected to {}", config.path);
        Ok(StoreConnectorSqlite {
            pools,
            structure: config.structure.clone(),
            tiers: *tiers,
            url: config.path.clone(),
        })
    }

    pub async fn create_schema(&self) -> Result<(), StoreError> {
        let s = &self.structure;
        info!("[BOOT SQLite] Creating table {}", s.table_name);
        let sql = format!(
            "CREATE TABLE IF NOT EXISTS {} ({} TEXT NOT NULL PRIMARY KEY, {} TEXT NOT NULL, {} TEXT NOT NULL, {} INTEGER NOT NULL DEFAULT 0, {} INTEGER NOT NULL DEFAULT 0, {} INTEGER NOT NULL DEFAULT 0)",
            s.table_name,
            s.column_token_hash,
            s.column_user_id,
            s.column_org_id,
            s.column_issued_at,
            s.column_expires_at,
            s.column_last_activity
        );
        let mut conn = SqlitePoolConnection::connect(&self.url).await?;
        sqlx::query(&sql).execute(&mut conn.connection).await?;
        Ok(())
    }

    pub fn register_pools(&self, registry: &PoolRegistry) {
        for pool in self.pools.values() {
            registry.register(pool.clone());
        }
    }

    fn pool(&self, tier: ServiceTier) -> Result<&Arc<ConnectionPool<SqlitePoolConnection>>, StoreError> {
        self.pools.get(&tier).ok_or(StoreError::NotConnected)
    }
}

#[async_trait]
impl SessionStore for StoreConnectorSqlite {
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
            "SELECT {}, {}, {}, {}, {}, {} FROM {} WHERE {} = ?",
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
            "DELETE FROM {} WHERE {} = ?",
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
            "UPDATE {} SET {} = ? WHERE {} = ?",
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
