//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the cache against its eviction guarantees.

use proptest::prelude::*;
use std::collections::{HashMap, HashSet, VecDeque};

use crate::cache::FifoCache;

// == Test Configuration ==
const TEST_CAPACITY: usize = 4;

type TestCache = FifoCache<String, String, Vec<String>>;

fn test_cache(capacity: usize) -> TestCache {
    FifoCache::with_listener(capacity, Vec::new()).unwrap()
}

// == Strategies ==
/// Generates keys from a small alphabet so sequences revisit keys often
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-h]{1,2}".prop_map(|s| s)
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,16}".prop_map(|s| s)
}

/// Generates a sequence of cache operations for testing
#[derive(Debug, Clone)]
enum CacheOp {
    Put { key: String, value: String },
    Get { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), value_strategy()).prop_map(|(key, value)| CacheOp::Put { key, value }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Capacity: the cache never holds more than its capacity
    #[test]
    fn prop_capacity_enforcement(
        entries in prop::collection::vec((key_strategy(), value_strategy()), 1..100),
        capacity in 1usize..8
    ) {
        let mut cache = test_cache(capacity);

        for (key, value) in entries {
            cache.put(key, value);
            prop_assert!(
                cache.len() <= capacity,
                "Cache size {} exceeds capacity {}",
                cache.len(),
                capacity
            );
        }
    }

    // FIFO: with distinct keys, the (N+1)-th insert evicts the 1st,
    // no matter which keys were read in between
    #[test]
    fn prop_fifo_eviction_ignores_reads(
        reads in prop::collection::vec(0usize..TEST_CAPACITY, 0..20)
    ) {
        let mut cache = test_cache(TEST_CAPACITY);
        let keys: Vec<String> = (0..=TEST_CAPACITY).map(|i| format!("k{}", i)).collect();

        for key in &keys[..TEST_CAPACITY] {
            cache.put(key.clone(), key.to_uppercase());
        }
        for idx in reads {
            prop_assert!(cache.get(keys[idx].as_str()).is_some());
        }

        cache.put(keys[TEST_CAPACITY].clone(), "new".to_string());

        prop_assert_eq!(cache.listener(), &vec![keys[0].clone()]);
        prop_assert!(cache.get(keys[0].as_str()).is_none());
    }

    // Read-your-write: a put is immediately visible
    #[test]
    fn prop_read_your_write(
        ops in prop::collection::vec(cache_op_strategy(), 0..30),
        key in key_strategy(),
        value in value_strategy()
    ) {
        let mut cache = test_cache(TEST_CAPACITY);
        for op in ops {
            if let CacheOp::Put { key, value } = op {
                cache.put(key, value);
            }
        }

        cache.put(key.clone(), value.clone());

        prop_assert_eq!(cache.get(key.as_str()), Some(&value));
    }

    // Absent keys read as None
    #[test]
    fn prop_absent_key_read(
        entries in prop::collection::vec((key_strategy(), value_strategy()), 0..20)
    ) {
        let mut cache = test_cache(TEST_CAPACITY);
        for (key, value) in entries {
            cache.put(key, value);
        }

        // Generated keys are lowercase only
        prop_assert!(cache.get("ZZ").is_none());
    }

    // Overwrite: one entry remains with the newer value, nothing is evicted
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy(),
        fill in 0usize..TEST_CAPACITY
    ) {
        let mut cache = test_cache(TEST_CAPACITY);
        for i in 0..fill {
            cache.put(format!("fill{}", i), String::new());
        }
        cache.put(key.clone(), value1);
        let len_before = cache.len();

        cache.put(key.clone(), value2.clone());

        prop_assert_eq!(cache.get(key.as_str()), Some(&value2));
        prop_assert_eq!(cache.len(), len_before);
        prop_assert!(cache.listener().is_empty());
    }

    // The order tracker and the map always hold the same key set, and the
    // cache matches a simple queue-based model of FIFO eviction
    #[test]
    fn prop_matches_reference_model(
        ops in prop::collection::vec(cache_op_strategy(), 1..80)
    ) {
        let mut cache = test_cache(TEST_CAPACITY);
        let mut model_order: VecDeque<String> = VecDeque::new();
        let mut model_map: HashMap<String, String> = HashMap::new();
        let mut model_evicted: Vec<String> = Vec::new();

        for op in ops {
            match op {
                CacheOp::Put { key, value } => {
                    if !model_map.contains_key(&key) {
                        if model_map.len() >= TEST_CAPACITY {
                            let oldest = model_order.pop_front().unwrap();
                            model_map.remove(&oldest);
                            model_evicted.push(oldest);
                        }
                        model_order.push_back(key.clone());
                    }
                    model_map.insert(key.clone(), value.clone());
                    cache.put(key, value);
                }
                CacheOp::Get { key } => {
                    prop_assert_eq!(cache.get(key.as_str()), model_map.get(&key));
                }
            }

            let order_keys: Vec<&String> = cache.keys().collect();
            let unique: HashSet<&String> = order_keys.iter().copied().collect();
            prop_assert_eq!(unique.len(), order_keys.len(), "Duplicate key in order");
            prop_assert_eq!(order_keys.len(), cache.len());
            for key in &order_keys {
                prop_assert!(cache.contains_key(key.as_str()));
            }
        }

        let order_keys: Vec<String> = cache.keys().cloned().collect();
        prop_assert_eq!(order_keys, Vec::from(model_order));
        prop_assert_eq!(cache.listener(), &model_evicted);
    }
}
