use serde::Serialize;
use crate::config::enums::service_tier::ServiceTier;

#[derive(Serialize, Debug, Clone)]
pub struct PoolSnapshot {
    pub backend: String,
    pub tier: ServiceTier,
    pub size: usize,
    pub available: usize,
    pub pending: usize,
    pub min_size: usize,
    pub max_size: usize,
}
