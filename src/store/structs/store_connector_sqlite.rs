use std::collections::BTreeMap;
use std::sync::Arc;
use crate::config::enums::service_tier::ServiceTier;
use crate::config::structs::store_structure_config::StoreStructureConfig;
use crate::config::structs::tiers_config::TiersConfig;
use crate::pool::structs::connection_pool::ConnectionPool;
use crate::store::structs::sqlite_pool_connection::SqlitePoolConnection;

pub struct StoreConnectorSqlite {
    pub(crate) pools: BTreeMap<ServiceTier, Arc<ConnectionPool<SqlitePoolConnection>>>,
    pub(crate) structure: StoreStructureConfig,
    pub(crate) tiers: TiersConfig,
    pub(crate) url: String,
}
