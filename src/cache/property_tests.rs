//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the store against a plain HashMap model.

use bytes::Bytes;
use proptest::prelude::*;
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::Instant;

use crate::cache::{Cache, CacheStore};

// == Test Configuration ==
const TEST_TTL: Duration = Duration::from_secs(300);

// == Strategies ==
/// Generates URL-like cache keys
fn key_strategy() -> impl Strategy<Value = String> {
    "/[a-z0-9-]{1,24}/".prop_map(|s| s)
}

/// Generates arbitrary byte payloads, including empty ones
fn payload_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..256)
}

#[derive(Debug, Clone)]
enum CacheOp {
    Add { key: String, payload: Vec<u8> },
    Get { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), payload_strategy())
            .prop_map(|(key, payload)| CacheOp::Add { key, payload }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Round-trip: a payload is returned unchanged right after it is added.
    #[test]
    fn prop_roundtrip_storage(key in key_strategy(), payload in payload_strategy()) {
        let mut store = CacheStore::new(TEST_TTL);

        store.add(key.clone(), Bytes::from(payload.clone()));

        prop_assert_eq!(store.get(&key), Some(Bytes::from(payload)));
    }

    // Overwrite: the last add for a key wins and only one entry remains.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        first in payload_strategy(),
        second in payload_strategy()
    ) {
        let mut store = CacheStore::new(TEST_TTL);

        store.add(key.clone(), Bytes::from(first));
        store.add(key.clone(), Bytes::from(second.clone()));

        prop_assert_eq!(store.get(&key), Some(Bytes::from(second)));
        prop_assert_eq!(store.len(), 1);
    }

    // Any sequence of adds and gets behaves like a HashMap, and the
    // counters account for every lookup.
    #[test]
    fn prop_matches_hashmap_model(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let mut store = CacheStore::new(TEST_TTL);
        let mut model: HashMap<String, Vec<u8>> = HashMap::new();
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Add { key, payload } => {
                    store.add(key.clone(), Bytes::from(payload.clone()));
                    model.insert(key, payload);
                }
                CacheOp::Get { key } => {
                    let got = store.get(&key);
                    prop_assert_eq!(got.as_deref(), model.get(&key).map(Vec::as_slice));
                    match got {
                        Some(_) => expected_hits += 1,
                        None => expected_misses += 1,
                    }
                }
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits);
        prop_assert_eq!(stats.misses, expected_misses);
        prop_assert_eq!(stats.total_entries, model.len());
    }

    // A sweep removes exactly the entries older than the TTL and nothing else.
    #[test]
    fn prop_sweep_removes_only_expired(
        keys in prop::collection::hash_set(key_strategy(), 1..30),
        elapsed_ms in prop_oneof![0u64..400, 600u64..1_000]
    ) {
        let ttl = Duration::from_millis(500);
        let mut store = CacheStore::new(ttl);
        let start = Instant::now();
        for key in &keys {
            store.add(key.clone(), Bytes::from_static(b"v"));
        }

        let elapsed = Duration::from_millis(elapsed_ms);
        let removed = store.sweep_expired_at(start + elapsed);

        if elapsed > ttl {
            prop_assert_eq!(removed, keys.len());
            prop_assert!(store.is_empty());
        } else {
            prop_assert_eq!(removed, 0);
            prop_assert_eq!(store.len(), keys.len());
        }
    }
}

// == Property Test for Concurrent Operation Correctness ==
// Distinct keys written by concurrent tasks are never lost, and readers only
// ever see complete payloads.

proptest! {
    #![proptest_config(ProptestConfig::with_cases(30))]

    #[test]
    fn prop_concurrent_writers_and_readers(
        entries in prop::collection::hash_map(key_strategy(), payload_strategy(), 1..40),
        lookups in prop::collection::vec(key_strategy(), 1..40)
    ) {
        use std::sync::Arc;

        tokio_test::block_on(async {
            let cache = Arc::new(Cache::new(TEST_TTL).unwrap());
            let expected = Arc::new(entries.clone());
            let mut handles = vec![];

            for (key, payload) in entries {
                let cache = Arc::clone(&cache);
                handles.push(tokio::spawn(async move {
                    cache.add(key, payload).await;
                    Ok::<_, String>(())
                }));
            }

            for key in lookups {
                let cache = Arc::clone(&cache);
                let expected = Arc::clone(&expected);
                handles.push(tokio::spawn(async move {
                    if let Some(got) = cache.get(&key).await {
                        let want = expected.get(&key).ok_or(format!("phantom key '{}'", key))?;
                        if got.as_ref() != want.as_slice() {
                            return Err(format!("corrupted payload for '{}'", key));
                        }
                    }
                    Ok(())
                }));
            }

            for handle in handles {
                let result = handle.await.expect("Task should not panic");
                prop_assert!(result.is_ok(), "Concurrent operation failed: {:?}", result);
            }

            prop_assert_eq!(cache.len().await, expected.len());
            for (key, payload) in expected.iter() {
                let got = cache.get(key).await;
                prop_assert_eq!(got.as_deref(), Some(payload.as_slice()));
            }

            Ok(())
        })?;
    }
}
