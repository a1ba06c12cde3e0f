use std::sync::atomic::Ordering;
use crate::breaker::structs::rolling_window::RollingWindow;
use crate::breaker::structs::window_bucket::WindowBucket;

impl RollingWindow {
    pub fn new(window_ms: u64, bucket_count: usize) -> RollingWindow {
        let bucket_count = bucket_count.max(1);
        let buckets = (0..bucket_count).map(|_| WindowBucket::default()).collect();
        RollingWindow {
            buckets,
            bucket_width_ms: (window_ms as i64 / bucket_count as i64).max(1),
            window_ms: window_ms as i64,
        }
    }

    /// Returns the bucket covering `now_ms`, recycling it when its epoch is stale.
    fn bucket_at(&self, now_ms: i64) -> &WindowBucket {
        let slot = ((now_ms / self.bucket_width_ms) as usize) % self.buckets.len();
        let bucket = &self.buckets[slot];
        let epoch = now_ms - now_ms % self.bucket_width_ms;
        let current = bucket.epoch.load(Ordering::SeqCst);
        if current != epoch
            && bucket.epoch.compare_exchange(current, epoch, Ordering::SeqCst, Ordering::SeqCst).is_ok() {
                bucket.successes.store(0, Ordering::SeqCst);
                bucket.failures.store(0, Ordering::SeqCst);
            }
        bucket
    }

    pub fn record_success(&self, now_ms: i64) {
        self.bucket_at(now_ms).successes.fetch_add(1, Ordering::SeqCst);
    }

    pub fn record_failure(&self, now_ms: i64) {
        self.bucket_at(now_ms).failures.fetch_add(1, Ordering::SeqCst);
    }

    pub fn totals(&self, now_ms: i64) -> (u64, u64) {
        let horizon = now_ms - self.window_ms;
        let mut successes = 0u64;
        let mut failures = 0u64;
        for bucket in &self.buckets {
            if bucket.epoch.load(Ordering::SeqCst) > horizon {
                successes += bucket.successes.load(Ordering::SeqCst);
                failures += bucket.failures.load(Ordering::SeqCst);
            }
        }
        (successes, failures)
    }

    pub fn window_start(&self, now_ms: i64) -> i64 {
        let horizon = now_ms - self.window_ms;
        self.buckets.iter()
            .map(|bucket| bucket.epoch.load(Ordering::SeqCst))
            .filter(|epoch| *epoch > horizon)
            .min()
            .unwrap_or(now_ms)
    }

    pub fn reset(&self) {
        for bucket in &self.buckets {
            bucket.epoch.store(-1, Ordering::SeqCst);
            bucket.successes.store(0, Ordering::SeqCst);
            bucket.failures.store(0, Ordering::SeqCst);
        }
    }
}
