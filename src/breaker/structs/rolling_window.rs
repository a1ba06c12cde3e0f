use crate::breaker::structs::window_bucket::WindowBucket;

pub struct RollingWindow {
    pub(crate) buckets: Vec<WindowBucket>,
    pub(crate) bucket_width_ms: i64,
    pub(crate) window_ms: i64,
}
