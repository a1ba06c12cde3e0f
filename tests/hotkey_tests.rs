// Integration tests for hotkey detection

mod common;

use std::sync::Arc;
use sessiongate::config::enums::service_tier::ServiceTier;
use sessiongate::config::structs::hotkey_config::HotkeyConfig;
use sessiongate::hotkey::structs::hotkey_detector::HotkeyDetector;
use sessiongate::session::structs::token_hash::TokenHash;
use sessiongate::stats::structs::stats_atomics::StatsAtomics;

#[tokio::test]
async fn test_key_over_threshold_is_reported() {
    let config = HotkeyConfig {
        enabled: true,
        window_secs: 60,
        threshold: 1000,
        shards: 8,
        top_n: 10,
    };
    let detector = HotkeyDetector::new(config, Arc::new(StatsAtomics::default()));

    for _ in 0..1500 {
        detector.record_access("session:hot-key");
    }
    for _ in 0..10 {
        detector.record_access("session:cold-key");
    }

    let top = detector.top_keys(1);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].key, "session:hot-key");
    assert!(top[0].window_count >= 1000, "the hot key must carry its window count");
}

#[tokio::test]
async fn test_gate_records_token_hash_accesses() {
    let (gate, _cache, store) = common::create_test_gate();
    let token = common::random_token();
    store.insert(common::make_session(&token, 300));

    for _ in 0..5 {
        gate.validate(&token, ServiceTier::pro).await.unwrap();
    }

    let key = TokenHash::from_token(&token).to_string();
    let top = gate.hotkeys.top_keys(1);
    assert_eq!(top[0].key, key, "the hotkey detector observes the hashed token, never the raw token");
    assert!(top[0].window_count >= 5);
}

#[tokio::test]
async fn test_hotkey_alert_feeds_the_stats() {
    let config = {
        let mut config = sessiongate::config::structs::configuration::Configuration::init();
        config.hotkey.threshold = 10;
        Arc::new(config)
    };
    let (gate, _cache, store) = common::create_test_gate_with_config(config);
    let token = common::random_token();
    store.insert(common::make_session(&token, 300));

    for _ in 0..20 {
        gate.validate(&token, ServiceTier::pro).await.unwrap();
    }
    assert!(gate.get_stats().hotkey_alerts >= 1, "crossing the threshold must emit an alert");
}
