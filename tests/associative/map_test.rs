/*!
 * Unique Map Tests
 */

use guarded_collections::{CollectionError, ConcurrentHashMap, ConcurrentMap, GuardConfig};
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

#[test]
fn test_duplicate_insert_keeps_value() {
    let map: ConcurrentMap<i32, &str> = ConcurrentMap::new();
    assert!(map.insert(1, "a"));
    assert!(map.insert(2, "b"));

    assert!(!map.insert(1, "c"));
    assert_eq!(map.get(&1), Some("a"));

    assert_eq!(map.remove(&2), 1);
    assert_eq!(map.len(), 1);
    assert!(!map.contains(&2));
}

#[test]
fn test_hash_map_read_after_write() {
    let map: ConcurrentHashMap<String, Vec<u8>> = ConcurrentHashMap::new();
    map.insert("blob".to_string(), vec![1, 2, 3]);

    assert!(map.contains(&"blob".to_string()));
    assert_eq!(map.get(&"blob".to_string()), Some(vec![1, 2, 3]));
    assert_eq!(map.count(&"blob".to_string()), 1);
    assert_eq!(map.count(&"other".to_string()), 0);
}

#[test]
fn test_at_never_inserts() {
    let map: ConcurrentMap<&str, u32> = ConcurrentMap::new();

    assert_eq!(map.at(&"missing"), Err(CollectionError::KeyNotFound));
    assert!(map.is_empty());

    assert_eq!(map.get_or_insert_default("missing"), 0);
    assert_eq!(map.at(&"missing"), Ok(0));
}

#[test]
fn test_upsert_and_update() {
    let map: ConcurrentMap<&str, i64> = ConcurrentMap::new();
    assert_eq!(map.set("balance", 100), None);
    assert_eq!(map.update(&"balance", |b| {
        *b -= 30;
        *b
    }), Some(70));
    assert_eq!(map.set("balance", 5), Some(70));
    assert_eq!(map.update(&"absent", |b| *b), None);
}

#[test]
fn test_ordered_for_each() {
    let map: ConcurrentMap<u32, char> = [(3, 'c'), (1, 'a'), (2, 'b')].into_iter().collect();

    let mut keys = Vec::new();
    map.for_each(|k, _| keys.push(*k));
    assert_eq!(keys, vec![1, 2, 3]);
}

#[test]
fn test_erase_and_find_and_erase() {
    let map: ConcurrentHashMap<u32, u32> = (0..20).map(|n| (n, n * n)).collect();

    assert_eq!(map.erase(|_, v| *v > 100), 9);
    assert_eq!(map.len(), 11);

    let taken = map.find_and_erase(|k, _| *k == 10);
    assert_eq!(taken, Some((10, 100)));
    assert_eq!(map.find_and_erase(|k, _| *k == 10), None);
    assert_eq!(map.len(), 10);
}

#[test]
fn test_snapshot_is_detached() {
    let map = ConcurrentMap::with_config(BTreeMap::from([(1, 1)]), GuardConfig::named("detached"));
    let copy = map.snapshot();
    map.insert(2, 2);

    assert_eq!(copy.len(), 1);
    assert_eq!(map.len(), 2);
    assert_eq!(map.insert_many([(3, 3), (2, 0)]), 1);
}
