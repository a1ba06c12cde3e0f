use std::collections::HashMap;
use async_trait::async_trait;
use crate::cache::enums::cache_error::CacheError;
use crate::config::enums::service_tier::ServiceTier;

/// Uniform operations against a key-value backend.
///
/// Values are opaque byte blobs; serialization belongs to the caller. Every
/// operation draws a connection from the tier's pool.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    async fn ping(&self, tier: ServiceTier) -> Result<(), CacheError>;

    async fn get(&self, tier: ServiceTier, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    async fn set(
        &self,
        tier: ServiceTier,
        key: &str,
        value: &[u8],
        ttl: Option<u64>,
    ) -> Result<(), CacheError>;

    async fn delete(&self, tier: ServiceTier, key: &str) -> Result<bool, CacheError>;

    async fn expire(&self, tier: ServiceTier, key: &str, ttl: u64) -> Result<(), CacheError>;

    async fn hash_set(
        &self,
        tier: ServiceTier,
        key: &str,
        fields: &[(String, String)],
        ttl: Option<u64>,
    ) -> Result<(), CacheError>;

    async fn hash_get_all(
        &self,
        tier: ServiceTier,
        key: &str,
    ) -> Result<Option<HashMap<String, String>>, CacheError>;
}
