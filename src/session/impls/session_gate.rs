use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use log::{debug, info, warn};
use tokio::sync::{Semaphore, SemaphorePermit};
use crate::breaker::enums::breaker_error::BreakerError;
use crate::breaker::structs::circuit_breaker::CircuitBreaker;
use crate::cache::structs::cache_adapter::CacheAdapter;
use crate::cache::structs::cache_connector_redis::CacheConnectorRedis;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::common::common::current_time;
use crate::config::enums::service_tier::ServiceTier;
use crate::config::structs::configuration::Configuration;
use crate::hotkey::structs::hotkey_detector::HotkeyDetector;
use crate::pool::structs::pool_registry::PoolRegistry;
use crate::session::enums::bootstrap_error::BootstrapError;
use crate::session::enums::session_error::SessionError;
use crate::session::enums::validation::Validation;
use crate::session::structs::session_gate::SessionGate;
use crate::session::structs::session_record::SessionRecord;
use crate::session::structs::token_hash::TokenHash;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::store::enums::store_error::StoreError;
use crate::store::structs::store_connector::StoreConnector;
use crate::store::traits::session_store::SessionStore;

impl SessionGate {
    /// Builds the gate from configuration: connects the backends, warms the
    /// per-tier pools and starts the idle sweep.
    pub async fn new(config: Arc<Configuration>) -> Result<SessionGate, BootstrapError> {
        let stats = Arc::new(StatsAtomics::default());
        let hotkeys = Arc::new(HotkeyDetector::new(config.hotkey.clone(), stats.clone()));
        let pools = Arc::new(PoolRegistry::new());
        let cache_breaker = Arc::new(CircuitBreaker::new("cache", config.cache.breaker.clone()));
        let store_breaker = Arc::new(CircuitBreaker::new("store", config.store.breaker.clone()));

        let cache_backend: Option<Arc<dyn CacheBackend>> = match config.cache.enabled {
            true => {
                let connector = CacheConnectorRedis::connect(&config.cache, &config.tiers, &config.pool).await?;
                connector.register_pools(&pools);
                Some(Arc::new(connector))
            }
            false => {
                info!("[Cache] disabled by configuration, every lookup goes to the store");
                None
            }
        };

        let store_connector = StoreConnector::connect(&config).await?;
        store_connector.register_pools(&pools);
        let store: Arc<dyn SessionStore> = Arc::new(store_connector);

        pools.clone().spawn_sweeper(config.pool.sweep_interval_secs);
        info!("[BOOT] Session gate ready");

        Ok(SessionGate {
            cache: CacheAdapter::new(cache_backend, cache_breaker, hotkeys.clone(), stats.clone()),
            store,
            store_breaker,
            hotkeys,
            pools,
            stats,
            tier_gates: Self::tier_gates(&config),
            config,
        })
    }

    /// Builds a gate over injected backends; lets tests swap in doubles
    /// without touching Redis or a database.
    pub fn with_backends(
        config: Arc<Configuration>,
        cache_backend: Option<Arc<dyn CacheBackend>>,
        store: Arc<dyn SessionStore>,
    ) -> SessionGate {
        let stats = Arc::new(StatsAtomics::default());
        let hotkeys = Arc::new(HotkeyDetector::new(config.hotkey.clone(), stats.clone()));
        let cache_breaker = Arc::new(CircuitBreaker::new("cache", config.cache.breaker.clone()));
        let store_breaker = Arc::new(CircuitBreaker::new("store", config.store.breaker.clone()));
        SessionGate {
            cache: CacheAdapter::new(cache_backend, cache_breaker, hotkeys.clone(), stats.clone()),
            store,
            store_breaker,
            hotkeys,
            pools: Arc::new(PoolRegistry::new()),
            stats,
            tier_gates: Self::tier_gates(&config),
            config,
        }
    }

    /// Validates an opaque bearer token for the given tier.
    ///
    /// Cache hit returns immediately; a miss, an expired copy or a degraded
    /// cache falls through to the authoritative store, repopulating the
    /// cache best-effort. Negative results are never cached.
    pub async fn validate(&self, token: &str, tier: ServiceTier) -> Result<Validation, SessionError> {
        let _gate = self.tier_gate(tier)?;
        let token_hash = TokenHash::from_token(token);
        let key = token_hash.to_string();
        let now = current_time() as i64;

        if let Some(blob) = self.cache.get(tier, &key).await {
            match serde_json::from_slice::<SessionRecord>(&blob) {
                Ok(record) if !record.is_expired(now) => {
                    self.stats.cache_hits.fetch_add(1, Ordering::SeqCst);
                    self.stats.sessions_validated.fetch_add(1, Ordering::SeqCst);
                    self.spawn_touch(tier, token_hash, now);
                    return Ok(Validation::Valid(record));
                }
                Ok(_) => {
                    // expired copy the backend failed to reap, shed it
                    self.cache.delete(tier, &key).await;
                }
                Err(e) => {
                    debug!("[Session] undecodable cache entry for {}: {}", key, e);
                    self.stats.cache_errors.fetch_add(1, Ordering::SeqCst);
                    self.cache.delete(tier, &key).await;
                }
            }
        }
        self.stats.cache_misses.fetch_add(1, Ordering::SeqCst);

        let lookup = self.store_breaker.execute(|| self.store.fetch_session(tier, &token_hash)).await;
        let record = match lookup {
            Ok(record) => {
                self.stats.store_lookups.fetch_add(1, Ordering::SeqCst);
                record
            }
            Err(e) => {
                self.stats.store_errors.fetch_add(1, Ordering::SeqCst);
                return Err(Self::map_store_error(e));
            }
        };

        match record {
            Some(record) if !record.is_expired(now) => {
                let ttl = (self.config.cache.ttl as i64)
                    .min(record.seconds_until_expiry(now))
                    .max(1) as u64;
                match serde_json::to_vec(&record) {
                    Ok(blob) => self.cache.set(tier, &key, &blob, Some(ttl)).await,
                    Err(e) => debug!("[Session] failed to serialize record for {}: {}", key, e),
                }
                self.stats.sessions_validated.fetch_add(1, Ordering::SeqCst);
                Ok(Validation::Valid(record))
            }
            _ => {
                self.stats.sessions_rejected.fetch_add(1, Ordering::SeqCst);
                Ok(Validation::Invalid)
            }
        }
    }

    /// Revokes a token: cache entry first, then the authoritative record,
    /// one retry each. Partial failure is reported distinctly from total
    /// failure so the caller can decide whether the session counts as
    /// logically revoked.
    pub async fn logout(&self, token: &str, tier: ServiceTier) -> Result<(), SessionError> {
        let _gate = self.tier_gate(tier)?;
        let token_hash = TokenHash::from_token(token);
        let key = token_hash.to_string();

        let cache_failure = match self.cache.invalidate(tier, &key).await {
            Ok(_) => None,
            Err(first) => {
                debug!("[Session] retrying cache invalidation for {}: {}", key, first);
                match self.cache.invalidate(tier, &key).await {
                    Ok(_) => None,
                    Err(second) => Some(second.to_string()),
                }
            }
        };

        let store_failure = match self.delete_from_store(tier, &token_hash).await {
            Ok(_) => None,
            Err(first) => {
                debug!("[Session] retrying store deletion for {}: {}", key, first);
                match self.delete_from_store(tier, &token_hash).await {
                    Ok(_) => None,
                    Err(second) => Some(second.to_string()),
                }
            }
        };

        match (cache_failure, store_failure) {
            (None, None) => {
                self.stats.logouts.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }
            (Some(reason), None) => {
                self.stats.logout_failures.fetch_add(1, Ordering::SeqCst);
                warn!("[Session] logout left a cache entry behind for {}: {}", key, reason);
                Err(SessionError::LogoutPartial {
                    stage: "cache".to_string(),
                    reason,
                })
            }
            (None, Some(reason)) => {
                self.stats.logout_failures.fetch_add(1, Ordering::SeqCst);
                warn!("[Session] logout left the store record behind for {}: {}", key, reason);
                Err(SessionError::LogoutPartial {
                    stage: "store".to_string(),
                    reason,
                })
            }
            (Some(cache_reason), Some(store_reason)) => {
                self.stats.logout_failures.fetch_add(1, Ordering::SeqCst);
                Err(SessionError::LogoutFailed(format!("cache: {}; store: {}", cache_reason, store_reason)))
            }
        }
    }

    /// Stops the pool sweep task. Checked-out connections drain naturally.
    pub fn shutdown(&self) {
        self.pools.shutdown();
        info!("[Session] gate shut down");
    }

    fn tier_gates(config: &Configuration) -> BTreeMap<ServiceTier, Arc<Semaphore>> {
        ServiceTier::all()
            .into_iter()
            .map(|tier| {
                let permits = config.tiers.limits(tier).max_concurrent_requests.max(1);
                (tier, Arc::new(Semaphore::new(permits)))
            })
            .collect()
    }

    fn tier_gate(&self, tier: ServiceTier) -> Result<SemaphorePermit<'_>, SessionError> {
        let gate = match self.tier_gates.get(&tier) {
            Some(gate) => gate,
            None => return Err(SessionError::TierSaturated(tier)),
        };
        match gate.try_acquire() {
            Ok(permit) => Ok(permit),
            Err(_) => {
                self.stats.tier_rejections.fetch_add(1, Ordering::SeqCst);
                Err(SessionError::TierSaturated(tier))
            }
        }
    }

    /// Fire-and-forget refresh of `last_activity_at`. Runs outside the store
    /// breaker: a failing side effect must not trip it.
    fn spawn_touch(&self, tier: ServiceTier, token_hash: TokenHash, at: i64) {
        let store = self.store.clone();
        let stats = self.stats.clone();
        tokio::spawn(async move {
            if let Err(e) = store.touch_activity(tier, &token_hash, at).await {
                debug!("[Session] last-activity refresh failed for {}: {}", token_hash, e);
                stats.touch_failures.fetch_add(1, Ordering::SeqCst);
            }
        });
    }

    async fn delete_from_store(&self, tier: ServiceTier, token_hash: &TokenHash) -> Result<bool, SessionError> {
        self.store_breaker
            .execute(|| self.store.delete_session(tier, token_hash))
            .await
            .map_err(Self::map_store_error)
    }

    fn map_store_error(error: BreakerError<StoreError>) -> SessionError {
        match error {
            BreakerError::Open => SessionError::StoreUnavailable,
            BreakerError::Timeout(_) => SessionError::StoreTimeout,
            BreakerError::Inner(StoreError::Timeout(_)) => SessionError::StoreTimeout,
            BreakerError::Inner(StoreError::PoolError(e)) => SessionError::PoolExhausted(e.to_string()),
            BreakerError::Inner(e) => SessionError::LookupFailed(e.to_string()),
        }
    }
}
