//! Integration tests for the expiring cache
//!
//! Covers the public add/get contract, reaping, and concurrent access from
//! plain OS threads while the reaper runs.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use pokedex::Cache;

#[tokio::test]
async fn test_never_added_key_misses() {
    let cache = Cache::new(Duration::from_secs(60));
    assert_eq!(cache.get("https://pokeapi.co/api/v2/pokemon/mew"), None);
}

#[tokio::test]
async fn test_readd_identical_value_is_idempotent() {
    let cache = Cache::new(Duration::from_secs(60));
    cache.add("key", "value");
    let first = cache.get("key");
    cache.add("key", "value");
    assert_eq!(cache.get("key"), first);
}

#[tokio::test(start_paused = true)]
async fn test_bounded_staleness() {
    let interval = Duration::from_millis(50);
    let cache = Cache::new(interval);
    tokio::task::yield_now().await;

    cache.add("short-lived", "value");
    tokio::time::sleep(interval - Duration::from_millis(1)).await;
    assert!(cache.get("short-lived").is_some(), "entry reaped before its interval");

    tokio::time::sleep(interval + Duration::from_millis(1)).await;
    assert!(cache.get("short-lived").is_none(), "entry outlived two intervals");
}

#[tokio::test(start_paused = true)]
async fn test_readd_refreshes_timestamp() {
    let interval = Duration::from_millis(50);
    let cache = Cache::new(interval);
    tokio::task::yield_now().await;

    cache.add("key", "v1");
    tokio::time::sleep(Duration::from_millis(40)).await;
    cache.add("key", "v2");
    // The reaper ticks at 50ms; the refreshed entry is only 10ms old then.
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(cache.get("key"), Some(b"v2".to_vec()));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_add_get_never_tears() {
    let cache = Arc::new(Cache::new(Duration::from_millis(5)));

    thread::scope(|scope| {
        for worker in 0..8 {
            let cache = Arc::clone(&cache);
            scope.spawn(move || {
                for round in 0..500 {
                    let key = format!("worker-{}-key-{}", worker, round % 16);
                    let value = format!("{}:{}", key, round);
                    cache.add(key.clone(), value.into_bytes());

                    if let Some(found) = cache.get(&key) {
                        let found = String::from_utf8(found).expect("torn value");
                        assert!(
                            found.starts_with(&format!("{}:", key)),
                            "value {} does not belong to {}",
                            found,
                            key
                        );
                    }
                }
            });
        }
    });

    cache.close().await;
}
