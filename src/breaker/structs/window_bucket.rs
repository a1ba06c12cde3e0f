use std::sync::atomic::{AtomicI64, AtomicU64};

pub struct WindowBucket {
    pub(crate) epoch: AtomicI64,
    pub(crate) successes: AtomicU64,
    pub(crate) failures: AtomicU64,
}

impl Default for WindowBucket {
    fn default() -> Self {
        Self {
            epoch: AtomicI64::new(-1),
            successes: AtomicU64::new(0),
            failures: AtomicU64::new(0),
        }
    }
}
