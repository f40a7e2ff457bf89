/*!
 * Multi-Key Map Tests
 */

use guarded_collections::{ConcurrentHashMultiMap, ConcurrentMultiMap};
use pretty_assertions::assert_eq;

#[test]
fn test_same_key_grows_by_one() {
    let map: ConcurrentMultiMap<&str, u32> = ConcurrentMultiMap::new();
    for n in 0..4 {
        assert!(map.insert("k", n));
        assert_eq!(map.len(), n as usize + 1);
    }
    assert_eq!(map.count(&"k"), 4);
    assert_eq!(map.get(&"k"), Some(0));
}

#[test]
fn test_for_each_key_runs_once() {
    let map: ConcurrentHashMultiMap<u8, char> = ConcurrentHashMultiMap::new();
    map.insert_many([(1, 'a'), (2, 'x'), (1, 'b'), (1, 'c')]);

    let mut calls = 0;
    let collected = map.for_each_key(&1, |values| {
        calls += 1;
        values.to_vec()
    });
    assert_eq!(calls, 1);
    assert_eq!(collected, vec!['a', 'b', 'c']);

    let empty = map.for_each_key(&9, |values| values.len());
    assert_eq!(empty, 0);
}

#[test]
fn test_remove_key_drops_all_values() {
    let map: ConcurrentMultiMap<u32, u32> = [(1, 10), (1, 11), (2, 20)].into_iter().collect();

    assert_eq!(map.remove(&1), 2);
    assert_eq!(map.len(), 1);
    assert!(!map.contains(&1));
    assert_eq!(map.remove(&1), 0);
}

#[test]
fn test_erase_across_groups() {
    let map: ConcurrentMultiMap<char, i32> =
        [('a', 1), ('a', 2), ('b', 3), ('b', 4), ('c', 5)].into_iter().collect();

    assert_eq!(map.erase(|_, v| v % 2 == 0), 2);
    assert_eq!(map.len(), 3);

    let mut entries = Vec::new();
    map.for_each(|k, v| entries.push((*k, *v)));
    assert_eq!(entries, vec![('a', 1), ('b', 3), ('c', 5)]);

    assert_eq!(map.find_and_erase(|k, _| *k == 'b'), Some(('b', 3)));
    assert!(!map.contains(&'b'));
}
