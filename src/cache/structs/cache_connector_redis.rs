use std::collections::BTreeMap;
use std::sync::Arc;
use crate::cache::structs::redis_pool_connection::RedisPoolConnection;
use crate::config::enums::service_tier::ServiceTier;
use crate::pool::structs::connection_pool::ConnectionPool;

pub struct CacheConnectorRedis {
    pub(crate) pools: BTreeMap<ServiceTier, Arc<ConnectionPool<RedisPoolConnection>>>,
    pub(crate) prefix: String,
}
