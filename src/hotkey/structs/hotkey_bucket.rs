use std::collections::HashMap;
use std::sync::atomic::AtomicI64;
use ahash::RandomState;
use parking_lot::Mutex;

pub struct HotkeyBucket {
    pub(crate) epoch: AtomicI64,
    pub(crate) shards: Vec<Mutex<HashMap<String, u64, RandomState>>>,
}

impl HotkeyBucket {
    pub(crate) fn new(shards: usize) -> HotkeyBucket {
        HotkeyBucket {
            epoch: AtomicI64::new(-1),
            shards: (0..shards).map(|_| Mutex::new(HashMap::default())).collect(),
        }
    }
}
