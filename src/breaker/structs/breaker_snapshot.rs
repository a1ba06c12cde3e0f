use serde::Serialize;
use crate::breaker::enums::breaker_state::BreakerState;

#[derive(Serialize, Debug, Clone)]
pub struct BreakerSnapshot {
    pub backend: String,
    pub state: BreakerState,
    pub failure_count: u64,
    pub success_count: u64,
    pub window_start: i64,
    pub last_transition_at: i64,
    pub times_opened: u64,
}
