/*!
 * Set and Multiset Tests
 */

use guarded_collections::{
    ConcurrentHashMultiSet, ConcurrentHashSet, ConcurrentMultiSet, ConcurrentSet,
};
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;

#[test]
fn test_set_rejects_duplicates() {
    let set: ConcurrentSet<&str> = ConcurrentSet::new();
    assert!(set.insert("alpha"));
    assert!(!set.insert("alpha"));
    assert_eq!(set.get(&"alpha"), Some("alpha"));
    assert_eq!(set.count(&"alpha"), 1);
    assert_eq!(set.get(&"beta"), None);
}

#[test]
fn test_hash_set_insert_many() {
    let set: ConcurrentHashSet<u16> = ConcurrentHashSet::new();
    assert_eq!(set.insert_many([1, 2, 2, 3, 3, 3]), 3);
    assert_eq!(set.len(), 3);
    assert_eq!(set.find_and_erase(|n| *n > 2), Some(3));
    assert_eq!(set.find_and_erase(|n| *n > 2), None);
}

#[test]
fn test_ordered_snapshot() {
    let set: ConcurrentSet<i32> = [5, -1, 3].into_iter().collect();
    assert_eq!(set.snapshot(), BTreeSet::from([-1, 3, 5]));
    assert_eq!(set.erase(|n| *n < 0), 1);
    assert_eq!(set.into_inner(), BTreeSet::from([3, 5]));
}

#[test]
fn test_multiset_grows_by_one() {
    let set: ConcurrentMultiSet<u8> = ConcurrentMultiSet::new();
    for expected in 1..=3 {
        assert!(set.insert(7));
        assert_eq!(set.len(), expected);
    }
    assert_eq!(set.count(&7), 3);
    assert_eq!(set.for_each_key(&7, |copies| copies.len()), 3);
}

#[test]
fn test_hash_multiset_erase() {
    let set: ConcurrentHashMultiSet<u32> = [1, 1, 2, 3, 3, 3].into_iter().collect();

    assert_eq!(set.erase(|n| *n == 3), 3);
    assert_eq!(set.remove(&1), 2);
    assert_eq!(set.len(), 1);

    let mut rest = Vec::new();
    set.for_each(|n| rest.push(*n));
    assert_eq!(rest, vec![2]);
}
