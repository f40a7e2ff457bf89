/*!
 * ConcurrentDeque and ConcurrentList Tests
 */

use guarded_collections::{ConcurrentDeque, ConcurrentList};
use pretty_assertions::assert_eq;
use std::collections::{LinkedList, VecDeque};
use std::panic::{self, AssertUnwindSafe};

#[test]
fn test_deque_both_ends() {
    let deque: ConcurrentDeque<i32> = ConcurrentDeque::new();
    deque.push_back(2);
    deque.push_front(1);
    deque.push_back(3);

    assert_eq!(deque.front(), Some(1));
    assert_eq!(deque.back(), Some(3));
    assert_eq!(deque.get(1), Some(2));
    assert_eq!(deque.pop_front(), Some(1));
    assert_eq!(deque.pop_back(), Some(3));
    assert_eq!(deque.snapshot(), VecDeque::from(vec![2]));
}

#[test]
fn test_deque_sort_after_wraparound() {
    let deque: ConcurrentDeque<i32> = ConcurrentDeque::new();
    for n in [5, 3, 8] {
        deque.push_front(n);
    }
    deque.push_back(1);
    deque.sort();

    assert_eq!(deque.snapshot(), VecDeque::from(vec![1, 3, 5, 8]));
}

#[test]
fn test_list_erase_and_insert() {
    let list: ConcurrentList<i32> = (1..=6).collect();

    assert_eq!(list.erase(|n| n % 3 == 0), 2);
    assert!(list.insert_all_at(|n| *n == 4, [30, 31]));
    assert_eq!(
        list.snapshot().into_iter().collect::<Vec<_>>(),
        vec![1, 2, 30, 31, 4, 5]
    );
}

#[test]
fn test_list_ends_and_find() {
    let list: ConcurrentList<&str> = LinkedList::from(["b", "c"]).into();
    list.push_front("a");
    list.push_back("d");

    assert_eq!(list.find_and_erase(|s| *s == "c"), Some("c"));
    assert_eq!(list.pop_front(), Some("a"));
    assert_eq!(list.pop_back(), Some("d"));

    let mut rest = Vec::new();
    list.for_each(|s| rest.push(*s));
    assert_eq!(rest, vec!["b"]);
}

#[test]
fn test_list_sort() {
    let list: ConcurrentList<u8> = vec![9, 2, 7, 2].into_iter().collect();
    list.sort();
    assert_eq!(
        list.into_inner().into_iter().collect::<Vec<_>>(),
        vec![2, 2, 7, 9]
    );
}

#[test]
fn test_list_survives_panicking_callbacks() {
    let list: ConcurrentList<i32> = (1..=6).collect();

    let erase = panic::catch_unwind(AssertUnwindSafe(|| {
        list.erase(|n| {
            if *n == 4 {
                panic!("predicate failed");
            }
            false
        })
    }));
    assert!(erase.is_err());
    assert_eq!(list.len(), 6);

    let sort = panic::catch_unwind(AssertUnwindSafe(|| {
        list.sort_by(|_, _| panic!("comparator failed"))
    }));
    assert!(sort.is_err());
    assert_eq!(list.len(), 6);

    // The lock was released on unwind and the list is still usable
    list.sort();
    assert_eq!(
        list.snapshot().into_iter().collect::<Vec<_>>(),
        vec![1, 2, 3, 4, 5, 6]
    );
}

#[test]
fn test_panicking_source_leaves_deque_intact() {
    let deque: ConcurrentDeque<i32> = (1..=3).collect();

    let insert = panic::catch_unwind(AssertUnwindSafe(|| {
        deque.insert_all_at(
            |n| *n == 2,
            (10..).map(|n| if n == 12 { panic!("source failed") } else { n }),
        )
    }));
    assert!(insert.is_err());
    assert_eq!(deque.snapshot(), VecDeque::from(vec![1, 2, 3]));
}
