use crate::session::structs::session_record::SessionRecord;

impl SessionRecord {
    pub fn is_expired(&self, now: i64) -> bool {
        self.expires_at <= now
    }

    pub fn seconds_until_expiry(&self, now: i64) -> i64 {
        (self.expires_at - now).max(0)
    }
}
