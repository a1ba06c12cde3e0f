use serde::Serialize;
use crate::breaker::structs::breaker_snapshot::BreakerSnapshot;
use crate::hotkey::structs::hotkey_entry::HotkeyEntry;
use crate::pool::structs::pool_snapshot::PoolSnapshot;
use crate::stats::enums::health_status::HealthStatus;
use crate::stats::structs::cache_health::CacheHealth;

#[derive(Serialize, Debug, Clone)]
pub struct HealthSnapshot {
    pub status: HealthStatus,
    pub cache_connected: bool,
    pub store_connected: bool,
    pub cache: CacheHealth,
    pub pools: Vec<PoolSnapshot>,
    pub breakers: Vec<BreakerSnapshot>,
    pub hotkeys: Vec<HotkeyEntry>,
}
