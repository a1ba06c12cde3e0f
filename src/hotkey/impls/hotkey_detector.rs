use std::collections::HashMap;
use std::hash::BuildHasher;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use ahash::RandomState;
use log::warn;
use parking_lot::Mutex;
use crate::common::common::current_time;
use crate::config::structs::hotkey_config::HotkeyConfig;
use crate::hotkey::structs::hotkey_bucket::HotkeyBucket;
use crate::hotkey::structs::hotkey_detector::HotkeyDetector;
use crate::hotkey::structs::hotkey_entry::HotkeyEntry;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl HotkeyDetector {
    pub fn new(config: HotkeyConfig, stats: Arc<StatsAtomics>) -> HotkeyDetector {
        let window = config.window_secs.max(1) as usize;
        let shards = config.shards.max(1);
        HotkeyDetector {
            buckets: (0..window).map(|_| HotkeyBucket::new(shards)).collect(),
            config,
            hasher: RandomState::new(),
            alert_window: AtomicI64::new(-1),
            alerted: Mutex::new(HashMap::default()),
            stats,
        }
    }

    /// Records one access to `key`. Synchronous and lock-light; never fails
    /// or blocks the calling path.
    pub fn record_access(&self, key: &str) {
        if !self.config.enabled {
            return;
        }
        let now = current_time() as i64;
        let slot = (now % self.buckets.len() as i64) as usize;
        let bucket = &self.buckets[slot];
        if bucket.epoch.load(Ordering::SeqCst) != now {
            let previous = bucket.epoch.swap(now, Ordering::SeqCst);
            if previous != now {
                for shard in &bucket.shards {
                    shard.lock().clear();
                }
            }
        }
        let shard = self.shard_index(key);
        let count_in_bucket = {
            let mut map = bucket.shards[shard].lock();
            let counter = map.entry(key.to_string()).or_insert(0);
            *counter += 1;
            *counter
        };
        // only pay the window summation every stride accesses
        let stride = (self.config.threshold / self.buckets.len() as u64).max(1);
        if count_in_bucket % stride == 0 {
            let window_count = self.window_count(key, shard, now);
            if window_count >= self.config.threshold {
                self.alert(key, window_count, now);
            }
        }
    }

    /// The `n` most accessed keys within the active window.
    pub fn top_keys(&self, n: usize) -> Vec<HotkeyEntry> {
        let now = current_time() as i64;
        let horizon = now - self.buckets.len() as i64;
        let mut totals: HashMap<String, u64, RandomState> = HashMap::default();
        for bucket in &self.buckets {
            if bucket.epoch.load(Ordering::SeqCst) > horizon {
                for shard in &bucket.shards {
                    for (key, count) in shard.lock().iter() {
                        *totals.entry(key.clone()).or_insert(0) += *count;
                    }
                }
            }
        }
        let mut entries: Vec<HotkeyEntry> = totals
            .into_iter()
            .map(|(key, window_count)| HotkeyEntry { key, window_count })
            .collect();
        entries.sort_by(|a, b| b.window_count.cmp(&a.window_count).then_with(|| a.key.cmp(&b.key)));
        entries.truncate(n);
        entries
    }

    fn shard_index(&self, key: &str) -> usize {
        (self.hasher.hash_one(key) as usize) % self.config.shards.max(1)
    }

    fn window_count(&self, key: &str, shard: usize, now: i64) -> u64 {
        let horizon = now - self.buckets.len() as i64;
        let mut total = 0;
        for bucket in &self.buckets {
            if bucket.epoch.load(Ordering::SeqCst) > horizon
                && let Some(count) = bucket.shards[shard].lock().get(key) {
                    total += *count;
                }
        }
        total
    }

    fn alert(&self, key: &str, window_count: u64, now: i64) {
        let window_id = now / self.buckets.len() as i64;
        if self.alert_window.swap(window_id, Ordering::SeqCst) != window_id {
            self.alerted.lock().clear();
        }
        let previous = self.alerted.lock().insert(key.to_string(), window_id);
        if previous != Some(window_id) {
            warn!("[Hotkey] key {} accessed {} times within the {}s window", key, window_count, self.buckets.len());
            self.stats.hotkey_alerts.fetch_add(1, Ordering::SeqCst);
        }
    }
}
