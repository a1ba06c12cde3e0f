use std::collections::VecDeque;
use std::sync::{Arc, Weak};
use std::sync::atomic::{AtomicBool, AtomicUsize};
use parking_lot::Mutex;
use tokio::sync::Semaphore;
use crate::config::enums::service_tier::ServiceTier;
use crate::config::structs::pool_config::PoolConfig;
use crate::config::structs::tier_limits::TierLimits;
use crate::pool::structs::idle_connection::IdleConnection;
use crate::pool::traits::poolable::Poolable;

pub struct ConnectionPool<C: Poolable> {
    pub(crate) this: Weak<ConnectionPool<C>>,
    pub(crate) backend: String,
    pub(crate) tier: ServiceTier,
    pub(crate) url: String,
    pub(crate) limits: TierLimits,
    pub(crate) tuning: PoolConfig,
    pub(crate) permits: Arc<Semaphore>,
    pub(crate) idle: Mutex<VecDeque<IdleConnection<C>>>,
    pub(crate) size: AtomicUsize,
    pub(crate) pending: AtomicUsize,
    pub(crate) closed: AtomicBool,
}
