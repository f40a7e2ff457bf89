/*!
 * ConcurrentVec Tests
 */

use guarded_collections::{CollectionError, ConcurrentVec, GuardConfig};
use pretty_assertions::assert_eq;

#[test]
fn test_erase_evens_keeps_order() {
    let vec: ConcurrentVec<i32> = vec![1, 2, 3, 4, 5].into();

    assert_eq!(vec.erase(|n| n % 2 == 0), 2);
    assert_eq!(vec.snapshot(), vec![1, 3, 5]);
}

#[test]
fn test_construction_forms() {
    let defaults: ConcurrentVec<u8> = ConcurrentVec::with_len(3);
    assert_eq!(defaults.snapshot(), vec![0, 0, 0]);

    let filled = ConcurrentVec::from_elem(2, "x");
    assert_eq!(filled.snapshot(), vec!["x", "x"]);

    let collected: ConcurrentVec<u32> = (1..=4).collect();
    assert_eq!(collected.len(), 4);

    let named = ConcurrentVec::with_config(vec![1], GuardConfig::named("jobs"));
    assert_eq!(named.config().name, "jobs");
}

#[test]
fn test_read_after_write() {
    let vec = ConcurrentVec::new();
    vec.push_back("first".to_string());
    assert_eq!(vec.back().as_deref(), Some("first"));
    assert_eq!(vec.get(0).as_deref(), Some("first"));
    assert_eq!(vec.front(), vec.back());
}

#[test]
fn test_checked_access() {
    let vec: ConcurrentVec<i32> = vec![10, 20, 30].into();

    assert_eq!(vec.at(1), Ok(20));
    assert_eq!(vec.at(3), Err(CollectionError::OutOfRange { index: 3, len: 3 }));
    assert_eq!(vec.get(3), None);

    vec.set(0, 11).unwrap();
    assert_eq!(vec.update(2, |n| std::mem::replace(n, 33)), Ok(30));
    assert!(vec.set(5, 0).is_err());
    assert_eq!(vec.snapshot(), vec![11, 20, 33]);
}

#[test]
fn test_for_each_range() {
    let vec: ConcurrentVec<char> = "abcde".chars().collect();

    let mut seen = Vec::new();
    vec.for_each_range(1, 4, |i, c| seen.push((i, *c))).unwrap();
    assert_eq!(seen, vec![(1, 'b'), (2, 'c'), (3, 'd')]);

    assert_eq!(
        vec.for_each_range(3, 9, |_, _| {}),
        Err(CollectionError::InvalidRange { start: 3, end: 9, len: 5 })
    );
    assert!(vec.for_each_range(4, 2, |_, _| {}).is_err());
}

#[test]
fn test_insert_before_first_match() {
    let vec: ConcurrentVec<i32> = vec![1, 5, 9].into();

    assert!(vec.insert_at(|n| *n > 3, 4));
    assert!(vec.insert_all_at(|n| *n == 9, [6, 7, 8]));
    assert_eq!(vec.snapshot(), vec![1, 4, 5, 6, 7, 8, 9]);

    // No match means no append
    assert!(!vec.insert_at(|n| *n > 100, 0));
    assert!(!vec.insert_all_at(|n| *n > 100, std::iter::repeat(0).take(3)));
    assert_eq!(vec.len(), 7);
}

#[test]
fn test_find_and_erase_removes_one() {
    let vec: ConcurrentVec<i32> = vec![2, 4, 4, 6].into();

    assert_eq!(vec.find_and_erase(|n| *n == 4), Some(4));
    assert_eq!(vec.snapshot(), vec![2, 4, 6]);
    assert_eq!(vec.find_and_erase(|n| *n == 5), None);
    assert_eq!(vec.len(), 3);
}

#[test]
fn test_remove_value() {
    let vec: ConcurrentVec<&str> = vec!["a", "b", "a", "c"].into();
    assert_eq!(vec.remove(&"a"), 2);
    assert_eq!(vec.remove(&"zz"), 0);
    assert_eq!(vec.snapshot(), vec!["b", "c"]);
}

#[test]
fn test_assign_resize_sort() {
    let vec: ConcurrentVec<i32> = ConcurrentVec::new();
    vec.assign([3, 1, 2]);
    vec.sort();
    assert_eq!(vec.snapshot(), vec![1, 2, 3]);

    vec.sort_by(|a, b| b.cmp(a));
    assert_eq!(vec.snapshot(), vec![3, 2, 1]);

    vec.resize(5, 9);
    assert_eq!(vec.snapshot(), vec![3, 2, 1, 9, 9]);
    vec.resize_default(2);
    assert_eq!(vec.snapshot(), vec![3, 2]);
}

#[test]
fn test_capacity_controls() {
    let vec: ConcurrentVec<u64> = ConcurrentVec::new();
    vec.reserve(64);
    assert!(vec.capacity() >= 64);

    vec.push_back(1);
    vec.shrink_to_fit();
    assert!(vec.capacity() >= 1);
    assert_eq!(vec.pop_back(), Some(1));
    assert_eq!(vec.pop_back(), None);

    vec.push_back(2);
    vec.clear();
    assert!(vec.is_empty());
}
