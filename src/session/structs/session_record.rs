use serde::{
    Deserialize,
    Serialize
};
use uuid::Uuid;
use crate::session::structs::token_hash::TokenHash;

/// A session row as owned by the authoritative store.
///
/// Cached copies are immutable except for `last_activity_at`, which is
/// refreshed best-effort and may lag the store.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub token_hash: TokenHash,
    pub user_id: Uuid,
    pub org_id: Uuid,
    pub issued_at: i64,
    pub expires_at: i64,
    pub last_activity_at: i64,
}
