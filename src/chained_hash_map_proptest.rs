#![cfg(test)]
//! Model-based property tests for `ChainedHashMap`.
//!
//! A random stream of insert/remove/get/clear operations is applied to
//! both the chained map and `std::collections::HashMap` as the model;
//! after every operation the observable state must agree. A second
//! property drives the map across many resizes and checks that every
//! key keeps its last-written value.

use proptest::prelude::*;
use std::collections::HashMap;

use crate::chained_hash_map::{ChainedHashMap, LOAD_FACTOR_THRESHOLD};

// Invariants exercised:
// - `get`/`contains_key`/`len` always agree with the model.
// - `insert` returns the model's previous value; updates never change len.
// - `remove` returns the model's value; removing an absent key is a no-op.
// - After any insertion, load factor stays at or below the threshold.
// - `iter` yields exactly the model's entries (as a set).
proptest! {
    #[test]
    fn prop_behaves_like_std_hashmap(
        ops in proptest::collection::vec((0u8..=3u8, 0u16..64u16, any::<i32>()), 1..200)
    ) {
        let mut map: ChainedHashMap<String, i32> = ChainedHashMap::with_capacity(2);
        let mut model: HashMap<String, i32> = HashMap::new();

        for (op, raw_key, value) in ops {
            let key = format!("k{}", raw_key % 48);
            match op {
                0 => {
                    prop_assert_eq!(map.insert(key.clone(), value), model.insert(key, value));
                    prop_assert!(map.load_factor() <= LOAD_FACTOR_THRESHOLD);
                }
                1 => {
                    prop_assert_eq!(map.remove(key.as_str()), model.remove(&key));
                }
                2 => {
                    prop_assert_eq!(map.get(key.as_str()), model.get(&key));
                    prop_assert_eq!(map.contains_key(key.as_str()), model.contains_key(&key));
                }
                3 => {
                    // Rare full reset keeps the stream from saturating.
                    if raw_key % 16 == 0 {
                        map.clear();
                        model.clear();
                    }
                }
                _ => unreachable!(),
            }
            prop_assert_eq!(map.len(), model.len());
        }

        let mut entries: Vec<(String, i32)> =
            map.iter().map(|(k, v)| (k.clone(), *v)).collect();
        entries.sort();
        let mut expected: Vec<(String, i32)> = model.into_iter().collect();
        expected.sort();
        prop_assert_eq!(entries, expected);
    }

    // Resize correctness in isolation: many distinct keys through a tiny
    // initial capacity, every key retrievable with its last value.
    #[test]
    fn prop_resize_preserves_entries(count in 1usize..300) {
        let mut map = ChainedHashMap::with_capacity(1);
        for i in 0..count {
            map.insert(i, i * 3);
        }
        prop_assert_eq!(map.len(), count);
        prop_assert!(map.capacity() >= count / 2);
        for i in 0..count {
            prop_assert_eq!(map.get(&i), Some(&(i * 3)));
        }
    }
}
