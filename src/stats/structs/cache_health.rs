use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy)]
pub struct CacheHealth {
    pub hit_rate: f64,
    pub errors: i64,
}
