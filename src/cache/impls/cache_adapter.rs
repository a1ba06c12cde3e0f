use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use log::debug;
use crate::breaker::enums::breaker_error::BreakerError;
use crate::breaker::structs::circuit_breaker::CircuitBreaker;
use crate::cache::enums::cache_error::CacheError;
use crate::cache::structs::cache_adapter::CacheAdapter;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::config::enums::service_tier::ServiceTier;
use crate::hotkey::structs::hotkey_detector::HotkeyDetector;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl CacheAdapter {
    pub fn new(
        backend: Option<Arc<dyn CacheBackend>>,
        breaker: Arc<CircuitBreaker>,
        hotkeys: Arc<HotkeyDetector>,
        stats: Arc<StatsAtomics>,
    ) -> CacheAdapter {
        CacheAdapter {
            backend,
            breaker,
            hotkeys,
            stats,
        }
    }

    pub fn enabled(&self) -> bool {
        self.backend.is_some()
    }

    pub fn breaker(&self) -> &Arc<CircuitBreaker> {
        &self.breaker
    }

    /// Cache read. Any failure, including an open breaker, degrades to a
    /// miss so the caller falls through to the authoritative store.
    pub async fn get(&self, tier: ServiceTier, key: &str) -> Option<Vec<u8>> {
        let backend = self.backend.as_ref()?;
        self.hotkeys.record_access(key);
        match self.breaker.execute(|| backend.get(tier, key)).await {
            Ok(value) => value,
            Err(BreakerError::Open) => {
                debug!("[Cache] breaker open, treating get as miss for {}", key);
                self.stats.cache_errors.fetch_add(1, Ordering::SeqCst);
                None
            }
            Err(e) => {
                debug!("[Cache] get failed for {}: {}", key, e);
                self.stats.cache_errors.fetch_add(1, Ordering::SeqCst);
                None
            }
        }
    }

    /// Best-effort cache write; failures are logged and counted, never
    /// surfaced to the caller.
    pub async fn set(&self, tier: ServiceTier, key: &str, value: &[u8], ttl: Option<u64>) {
        let Some(backend) = self.backend.as_ref() else { return };
        self.hotkeys.record_access(key);
        match self.breaker.execute(|| backend.set(tier, key, value, ttl)).await {
            Ok(_) => {
                self.stats.cache_writebacks.fetch_add(1, Ordering::SeqCst);
            }
            Err(BreakerError::Open) => {
                debug!("[Cache] breaker open, skipped set for {}", key);
            }
            Err(e) => {
                debug!("[Cache] set failed for {}: {}", key, e);
                self.stats.cache_errors.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    /// Best-effort delete, used to shed expired or undecodable entries.
    pub async fn delete(&self, tier: ServiceTier, key: &str) {
        let Some(backend) = self.backend.as_ref() else { return };
        self.hotkeys.record_access(key);
        match self.breaker.execute(|| backend.delete(tier, key)).await {
            Ok(_) => {}
            Err(BreakerError::Open) => {
                debug!("[Cache] breaker open, skipped delete for {}", key);
            }
            Err(e) => {
                debug!("[Cache] delete failed for {}: {}", key, e);
                self.stats.cache_errors.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    /// Strict delete for the invalidation path; failures surface so the
    /// caller can retry and report partial logout.
    pub async fn invalidate(&self, tier: ServiceTier, key: &str) -> Result<(), CacheError> {
        let Some(backend) = self.backend.as_ref() else { return Ok(()) };
        self.hotkeys.record_access(key);
        match self.breaker.execute(|| backend.delete(tier, key)).await {
            Ok(_) => {
                self.stats.cache_invalidations.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }
            Err(BreakerError::Open) => Err(CacheError::Unavailable),
            Err(BreakerError::Timeout(ms)) => Err(CacheError::Timeout(ms)),
            Err(BreakerError::Inner(e)) => Err(e),
        }
    }

    /// Best-effort TTL refresh on an existing entry.
    pub async fn expire(&self, tier: ServiceTier, key: &str, ttl: u64) {
        let Some(backend) = self.backend.as_ref() else { return };
        self.hotkeys.record_access(key);
        match self.breaker.execute(|| backend.expire(tier, key, ttl)).await {
            Ok(_) => {}
            Err(BreakerError::Open) => {
                debug!("[Cache] breaker open, skipped expire for {}", key);
            }
            Err(e) => {
                debug!("[Cache] expire failed for {}: {}", key, e);
                self.stats.cache_errors.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    /// Best-effort hash write, same policy as [`set`](Self::set).
    pub async fn hash_set(
        &self,
        tier: ServiceTier,
        key: &str,
        fields: &[(String, String)],
        ttl: Option<u64>,
    ) {
        let Some(backend) = self.backend.as_ref() else { return };
        self.hotkeys.record_access(key);
        match self.breaker.execute(|| backend.hash_set(tier, key, fields, ttl)).await {
            Ok(_) => {
                self.stats.cache_writebacks.fetch_add(1, Ordering::SeqCst);
            }
            Err(BreakerError::Open) => {
                debug!("[Cache] breaker open, skipped hash set for {}", key);
            }
            Err(e) => {
                debug!("[Cache] hash set failed for {}: {}", key, e);
                self.stats.cache_errors.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    /// Hash read with the same degrade-to-miss policy as [`get`](Self::get).
    pub async fn hash_get_all(&self, tier: ServiceTier, key: &str) -> Option<HashMap<String, String>> {
        let backend = self.backend.as_ref()?;
        self.hotkeys.record_access(key);
        match self.breaker.execute(|| backend.hash_get_all(tier, key)).await {
            Ok(value) => value,
            Err(BreakerError::Open) => {
                debug!("[Cache] breaker open, treating hash get as miss for {}", key);
                self.stats.cache_errors.fetch_add(1, Ordering::SeqCst);
                None
            }
            Err(e) => {
                debug!("[Cache] hash get failed for {}: {}", key, e);
                self.stats.cache_errors.fetch_add(1, Ordering::SeqCst);
                None
            }
        }
    }
}
