use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use async_trait::async_trait;
use log::{debug, info};
use redis::AsyncCommands;
use crate::cache::enums::cache_error::CacheError;
use crate::cache::structs::cache_connector_redis::CacheConnectorRedis;
use crate::cache::structs::redis_pool_connection::RedisPoolConnection;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::config::enums::service_tier::ServiceTier;
use crate::config::structs::cache_backend_config::CacheBackendConfig;
use crate::config::structs::pool_config::PoolConfig;
use crate::config::structs::tiers_config::TiersConfig;
use crate::pool::structs::connection_pool::ConnectionPool;
use crate::pool::structs::pool_registry::PoolRegistry;

impl CacheConnectorRedis {
    pub async fn connect(
        config: &CacheBackendConfig,
        tiers: &TiersConfig,
        tuning: &PoolConfig,
    ) -> Result<CacheConnectorRedis, CacheError> {
        let url = format!("redis://{}", config.address);
        let mut pools = BTreeMap::new();
        for tier in ServiceTier::all() {
            let pool: Arc<ConnectionPool<RedisPoolConnection>> =
                ConnectionPool::new("cache", tier, &url, *tiers.limits(tier), tuning.clone());
            pool.warm().await?;
            pools.insert(tier, pool);
        }
        info!("[Cache] Connected to Redis at {}", config.address);
        Ok(CacheConnectorRedis {
            pools,
            prefix: config.prefix.clone(),
        })
    }

    pub fn register_pools(&self, registry: &PoolRegistry) {
        for pool in self.pools.values() {
            registry.register(pool.clone());
        }
    }

    fn pool(&self, tier: ServiceTier) -> Result<&Arc<ConnectionPool<RedisPoolConnection>>, CacheError> {
        self.pools
            .get(&tier)
            .ok_or_else(|| CacheError::ConnectionError(format!("No cache pool for tier {}", tier)))
    }

    fn prefixed(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

#[async_trait]
impl CacheBackend for CacheConnectorRedis {
    async fn ping(&self, tier: ServiceTier) -> Result<(), CacheError> {
        let mut conn = self.pool(tier)?.acquire().await?;
        let result = redis::cmd("PING").query_async::<String>(&mut conn.connection).await;
        match result {
            Ok(_) => Ok(()),
            Err(e) => {
                conn.discard();
                Err(CacheError::RedisError(e))
            }
        }
    }

    async fn get(&self, tier: ServiceTier, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let mut conn = self.pool(tier)?.acquire().await?;
        let key = self.prefixed(key);
        let result = conn.connection.get::<_, Option<Vec<u8>>>(&key).await;
        match result {
            Ok(value) => Ok(value),
            Err(e) => {
                conn.discard();
                Err(CacheError::RedisError(e))
            }
        }
    }

    async fn set(
        &self,
        tier: ServiceTier,
        key: &str,
        value: &[u8],
        ttl: Option<u64>,
    ) -> Result<(), CacheError> {
        let mut conn = self.pool(tier)?.acquire().await?;
        let key = self.prefixed(key);
        let result = match ttl {
            Some(ttl_secs) if ttl_secs > 0 => {
                conn.connection.set_ex::<_, _, ()>(&key, value, ttl_secs).await
            }
            _ => conn.connection.set::<_, _, ()>(&key, value).await,
        };
        match result {
            Ok(_) => {
                debug!("[Redis] Set {} ({} bytes)", key, value.len());
                Ok(())
            }
            Err(e) => {
                conn.discard();
                Err(CacheError::RedisError(e))
            }
        }
    }

    async fn delete(&self, tier: ServiceTier, key: &str) -> Result<bool, CacheError> {
        let mut conn = self.pool(tier)?.acquire().await?;
        let key = self.prefixed(key);
        let result = conn.connection.del::<_, u64>(&key).await;
        match result {
            Ok(removed) => {
                debug!("[Redis] Deleted {}", key);
                Ok(removed > 0)
            }
            Err(e) => {
                conn.discard();
                Err(CacheError::RedisError(e))
            }
        }
    }

    async fn expire(&self, tier: ServiceTier, key: &str, ttl: u64) -> Result<(), CacheError> {
        let mut conn = self.pool(tier)?.acquire().await?;
        let key = self.prefixed(key);
        let result = conn.connection.expire::<_, ()>(&key, ttl as i64).await;
        match result {
            Ok(_) => Ok(()),
            Err(e) => {
                conn.discard();
                Err(CacheError::RedisError(e))
            }
        }
    }

    async fn hash_set(
        &self,
        tier: ServiceTier,
        key: &str,
        fields: &[(String, String)],
        ttl: Option<u64>,
    ) -> Result<(), CacheError> {
        if fields.is_empty() {
            return Ok(());
        }
        let mut conn = self.pool(tier)?.acquire().await?;
        let key = self.prefixed(key);
        let result = conn.connection.hset_multiple::<_, _, _, ()>(&key, fields).await;
        if let Err(e) = result {
            conn.discard();
            return Err(CacheError::RedisError(e));
        }
        if let Some(ttl_secs) = ttl
            && ttl_secs > 0 {
                let result = conn.connection.expire::<_, ()>(&key, ttl_secs as i64).await;
                if let Err(e) = result {
                    conn.discard();
                    return Err(CacheError::RedisError(e));
                }
            }
        Ok(())
    }

    async fn hash_get_all(
        &self,
        tier: ServiceTier,
        key: &str,
    ) -> Result<Option<HashMap<String, String>>, CacheError> {
        let mut conn = self.pool(tier)?.acquire().await?;
        let key = self.prefixed(key);
        let result = conn.connection.hgetall::<_, HashMap<String, String>>(&key).await;
        match result {
            Ok(map) if map.is_empty() => Ok(None),
            Ok(map) => Ok(Some(map)),
            Err(e) => {
                conn.discard();
                Err(CacheError::RedisError(e))
            }
        }
    }
}
