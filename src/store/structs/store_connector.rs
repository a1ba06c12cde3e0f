use crate::config::enums::store_driver::StoreDriver;
use crate::store::structs::store_connector_pgsql::StoreConnectorPgsql;
use crate::store::structs::store_connector_sqlite::StoreConnectorSqlite;

pub struct StoreConnector {
    pub(crate) pgsql: Option<StoreConnectorPgsql>,
    pub(crate) sqlite: Option<StoreConnectorSqlite>,
    pub(crate) engine: Option<StoreDriver>,
}
