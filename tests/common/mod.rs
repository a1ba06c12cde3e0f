#![allow(dead_code)]
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use async_trait::async_trait;
use parking_lot::RwLock;
use rand::RngExt;
use uuid::Uuid;
use sessiongate::cache::enums::cache_error::CacheError;
use sessiongate::cache::traits::cache_backend::CacheBackend;
use sessiongate::common::common::current_time;
use sessiongate::config::enums::service_tier::ServiceTier;
use sessiongate::config::structs::configuration::Configuration;
use sessiongate::session::structs::session_gate::SessionGate;
use sessiongate::session::structs::session_record::SessionRecord;
use sessiongate::session::structs::token_hash::TokenHash;
use sessiongate::store::enums::store_error::StoreError;
use sessiongate::store::traits::session_store::SessionStore;

pub type TestGate = Arc<SessionGate>;

/// In-memory cache backend honoring TTLs, with failure injection.
#[derive(Default)]
pub struct MemoryCacheBackend {
    pub entries: RwLock<HashMap<String, (Vec<u8>, Option<i64>)>>,
    pub hashes: RwLock<HashMap<String, HashMap<String, String>>>,
    pub fail: AtomicBool,
    pub gets: AtomicU64,
    pub sets: AtomicU64,
    pub deletes: AtomicU64,
}

impl MemoryCacheBackend {
    pub fn fail_all(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn entry_count(&self) -> usize {
        self.entries.read().len()
    }

    fn check(&self) -> Result<(), CacheError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(CacheError::ConnectionError("injected failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CacheBackend for MemoryCacheBackend {
    async fn ping(&self, _tier: ServiceTier) -> Result<(), CacheError> {
        self.check()
    }

    async fn get(&self, _tier: ServiceTier, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        self.check()?;
        self.gets.fetch_add(1, Ordering::SeqCst);
        let now = current_time() as i64;
        let mut entries = self.entries.write();
        match entries.get(key) {
            Some((_, Some(expires_at))) if *expires_at <= now => {
                entries.remove(key);
                Ok(None)
            }
            Some((value, _)) => Ok(Some(value.clone())),
            None => Ok(None),
        }
    }

    async fn set(
        &self,
        _tier: ServiceTier,
        key: &str,
        value: &[u8],
        ttl: Option<u64>,
    ) -> Result<(), CacheError> {
        self.check()?;
        self.sets.fetch_add(1, Ordering::SeqCst);
        let expires_at = ttl.map(|secs| current_time() as i64 + secs as i64);
        self.entries.write().insert(key.to_string(), (value.to_vec(), expires_at));
        Ok(())
    }

    async fn delete(&self, _tier: ServiceTier, key: &str) -> Result<bool, CacheError> {
        self.check()?;
        self.deletes.fetch_add(1, Ordering::SeqCst);
        let removed = self.entries.write().remove(key).is_some();
        self.hashes.write().remove(key);
        Ok(removed)
    }

    async fn expire(&self, _tier: ServiceTier, key: &str, ttl: u64) -> Result<(), CacheError> {
        self.check()?;
        let expires_at = current_time() as i64 + ttl as i64;
        if let Some(entry) = self.entries.write().get_mut(key) {
            entry.1 = Some(expires_at);
        }
        Ok(())
    }

    async fn hash_set(
        &self,
        _tier: ServiceTier,
        key: &str,
        fields: &[(String, String)],
        _ttl: Option<u64>,
    ) -> Result<(), CacheError> {
        self.check()?;
        let mut hashes = self.hashes.write();
        let map = hashes.entry(key.to_string()).or_default();
        for (field, value) in fields {
            map.insert(field.clone(), value.clone());
        }
        Ok(())
    }

    async fn hash_get_all(
        &self,
        _tier: ServiceTier,
        key: &str,
    ) -> Result<Option<HashMap<String, String>>, CacheError> {
        self.check()?;
        Ok(self.hashes.read().get(key).cloned())
    }
}

/// In-memory authoritative store with failure injection and call counting.
#[derive(Default)]
pub struct MemorySessionStore {
    pub sessions: RwLock<HashMap<TokenHash, SessionRecord>>,
    pub fail: AtomicBool,
    pub delay_ms: AtomicU64,
    pub fetches: AtomicU64,
    pub deletes: AtomicU64,
    pub touches: AtomicU64,
}

impl MemorySessionStore {
    pub fn insert(&self, record: SessionRecord) {
        self.sessions.write().insert(record.token_hash, record);
    }

    pub fn fail_all(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn delay(&self, millis: u64) {
        self.delay_ms.store(millis, Ordering::SeqCst);
    }

    pub fn fetch_count(&self) -> u64 {
        self.fetches.load(Ordering::SeqCst)
    }

    async fn check(&self) -> Result<(), StoreError> {
        let delay = self.delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(delay)).await;
        }
        if self.fail.load(Ordering::SeqCst) {
            return Err(StoreError::QueryError(sqlx::Error::PoolClosed));
        }
        Ok(())
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn ping(&self, _tier: ServiceTier) -> Result<(), StoreError> {
        self.check().await
    }

    async fn fetch_session(
        &self,
        _tier: ServiceTier,
        token_hash: &TokenHash,
    ) -> Result<Option<SessionRecord>, StoreError> {
        self.check().await?;
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.sessions.read().get(token_hash).cloned())
    }

    async fn delete_session(
        &self,
        _tier: ServiceTier,
        token_hash: &TokenHash,
    ) -> Result<bool, StoreError> {
        self.check().await?;
        self.deletes.fetch_add(1, Ordering::SeqCst);
        Ok(self.sessions.write().remove(token_hash).is_some())
    }

    async fn touch_activity(
        &self,
        _tier: ServiceTier,
        token_hash: &TokenHash,
        at: i64,
    ) -> Result<(), StoreError> {
        self.check().await?;
        self.touches.fetch_add(1, Ordering::SeqCst);
        if let Some(record) = self.sessions.write().get_mut(token_hash) {
            record.last_activity_at = at;
        }
        Ok(())
    }
}

pub fn create_test_config() -> Arc<Configuration> {
    let mut config = Configuration::init();
    config.cache.breaker.call_timeout_ms = 500;
    config.store.breaker.call_timeout_ms = 500;
    Arc::new(config)
}

pub fn create_test_gate() -> (TestGate, Arc<MemoryCacheBackend>, Arc<MemorySessionStore>) {
    create_test_gate_with_config(create_test_config())
}

pub fn create_test_gate_with_config(
    config: Arc<Configuration>,
) -> (TestGate, Arc<MemoryCacheBackend>, Arc<MemorySessionStore>) {
    let cache = Arc::new(MemoryCacheBackend::default());
    let store = Arc::new(MemorySessionStore::default());
    let gate = Arc::new(SessionGate::with_backends(
        config,
        Some(cache.clone() as Arc<dyn CacheBackend>),
        store.clone() as Arc<dyn SessionStore>,
    ));
    (gate, cache, store)
}

pub fn make_session(token: &str, ttl_secs: i64) -> SessionRecord {
    let now = current_time() as i64;
    SessionRecord {
        token_hash: TokenHash::from_token(token),
        user_id: Uuid::new_v4(),
        org_id: Uuid::new_v4(),
        issued_at: now,
        expires_at: now + ttl_secs,
        last_activity_at: now,
    }
}

pub fn random_token() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 16] = rng.random();
    hex::encode(bytes)
}
