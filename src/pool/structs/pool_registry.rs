use std::sync::Arc;
use parking_lot::{Mutex, RwLock};
use tokio::task::JoinHandle;
use crate::pool::traits::pool_probe::PoolProbe;

pub struct PoolRegistry {
    pub(crate) pools: RwLock<Vec<Arc<dyn PoolProbe>>>,
    pub(crate) sweeper: Mutex<Option<JoinHandle<()>>>,
}
