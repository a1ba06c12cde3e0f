use async_trait::async_trait;
use crate::config::enums::service_tier::ServiceTier;
use crate::session::structs::session_record::SessionRecord;
use crate::session::structs::token_hash::TokenHash;
use crate::store::enums::store_error::StoreError;

/// Operations against the authoritative session store.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn ping(&self, tier: ServiceTier) -> Result<(), StoreError>;

    /// Looks up a session row by token hash; `None` when no row exists.
    async fn fetch_session(
        &self,
        tier: ServiceTier,
        token_hash: &TokenHash,
    ) -> Result<Option<SessionRecord>, StoreError>;

    /// Deletes the session row; returns whether a row was removed.
    async fn delete_session(
        &self,
        tier: ServiceTier,
        token_hash: &TokenHash,
    ) -> Result<bool, StoreError>;

    /// Refreshes the last-activity column, best-effort write-through.
    async fn touch_activity(
        &self,
        tier: ServiceTier,
        token_hash: &TokenHash,
        at: i64,
    ) -> Result<(), StoreError>;
}
