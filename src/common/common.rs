use chrono::Utc;

pub fn current_time() -> u64 {
    Utc::now().timestamp() as u64
}

pub fn current_time_millis() -> i64 {
    Utc::now().timestamp_millis()
}
