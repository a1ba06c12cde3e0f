use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::AtomicI64;
use ahash::RandomState;
use parking_lot::Mutex;
use crate::config::structs::hotkey_config::HotkeyConfig;
use crate::hotkey::structs::hotkey_bucket::HotkeyBucket;
use crate::stats::structs::stats_atomics::StatsAtomics;

pub struct HotkeyDetector {
    pub(crate) config: HotkeyConfig,
    pub(crate) buckets: Vec<HotkeyBucket>,
    pub(crate) hasher: RandomState,
    pub(crate) alert_window: AtomicI64,
    pub(crate) alerted: Mutex<HashMap<String, i64, RandomState>>,
    pub(crate) stats: Arc<StatsAtomics>,
}
