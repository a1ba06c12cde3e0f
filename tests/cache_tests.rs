// Integration tests for the cache backend adapter

mod common;

use std::sync::Arc;
use sessiongate::config::enums::service_tier::ServiceTier;
use sessiongate::stats::enums::health_status::HealthStatus;
use sessiongate::store::traits::session_store::SessionStore;

#[tokio::test]
async fn test_adapter_hash_round_trip() {
    let (gate, _cache, _store) = common::create_test_gate();
    let fields = vec![
        ("user".to_string(), "u-123".to_string()),
        ("org".to_string(), "o-456".to_string()),
    ];

    gate.cache.hash_set(ServiceTier::pro, "profile:u-123", &fields, Some(60)).await;
    let map = gate.cache.hash_get_all(ServiceTier::pro, "profile:u-123").await.unwrap();
    assert_eq!(map.get("user").map(String::as_str), Some("u-123"));
    assert_eq!(map.get("org").map(String::as_str), Some("o-456"));

    assert!(gate.cache.hash_get_all(ServiceTier::pro, "profile:missing").await.is_none());
}

#[tokio::test]
async fn test_adapter_expire_tightens_ttl() {
    let (gate, cache, _store) = common::create_test_gate();
    gate.cache.set(ServiceTier::pro, "short-lived", b"value", None).await;
    gate.cache.expire(ServiceTier::pro, "short-lived", 5).await;

    let entries = cache.entries.read();
    let (_, expires_at) = entries.get("short-lived").expect("entry should exist");
    let now = sessiongate::common::common::current_time() as i64;
    let ttl = expires_at.expect("expire must attach a deadline") - now;
    assert!(ttl <= 5 && ttl >= 1);
}

#[tokio::test]
async fn test_adapter_failures_never_surface_on_best_effort_paths() {
    let (gate, cache, _store) = common::create_test_gate();
    cache.fail_all(true);

    // none of these may propagate an error to the caller
    assert!(gate.cache.get(ServiceTier::pro, "k").await.is_none());
    gate.cache.set(ServiceTier::pro, "k", b"v", Some(10)).await;
    gate.cache.delete(ServiceTier::pro, "k").await;
    assert!(gate.cache.hash_get_all(ServiceTier::pro, "k").await.is_none());

    assert!(gate.get_stats().cache_errors >= 4, "each failure must be counted");
}

#[tokio::test]
async fn test_disabled_cache_still_validates_through_store() {
    let config = Arc::new({
        let mut config = sessiongate::config::structs::configuration::Configuration::init();
        config.cache.enabled = false;
        config
    });
    let store = Arc::new(common::MemorySessionStore::default());
    let gate = sessiongate::session::structs::session_gate::SessionGate::with_backends(
        config,
        None,
        store.clone() as Arc<dyn SessionStore>,
    );
    let token = common::random_token();
    store.insert(common::make_session(&token, 300));

    assert!(gate.validate(&token, ServiceTier::pro).await.unwrap().is_valid());
    assert!(gate.validate(&token, ServiceTier::pro).await.unwrap().is_valid());
    assert_eq!(store.fetch_count(), 2, "with no cache every call reaches the store");

    let snapshot = gate.health_snapshot();
    assert_eq!(snapshot.status, HealthStatus::Healthy);
    assert!(!snapshot.cache_connected);
}
