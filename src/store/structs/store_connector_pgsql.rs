use std::collections::BTreeMap;
use std::sync::Arc;
use crate::config::enums::service_tier::ServiceTier;
use crate::config::structs::store_structure_config::StoreStructureConfig;
use crate::config::structs::tiers_config::TiersConfig;
use crate::pool::structs::connection_pool::ConnectionPool;
use crate::store::structs::pgsql_pool_connection::PgsqlPoolConnection;

pub struct StoreConnectorPgsql {
    pub(crate) pools: BTreeMap<ServiceTier, Arc<ConnectionPool<PgsqlPoolConnection>>>,
    pub(crate) structure: StoreStructureConfig,
    pub(crate) tiers: TiersConfig,
    pub(crate) url: String,
}
