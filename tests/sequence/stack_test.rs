/*!
 * ConcurrentStack Tests
 */

use guarded_collections::ConcurrentStack;
use std::collections::LinkedList;

#[test]
fn test_top_is_a_copy() {
    let stack: ConcurrentStack<String> = ConcurrentStack::new();
    stack.push("job-1".to_string());

    let top = stack.top();
    stack.clear();

    assert_eq!(top.as_deref(), Some("job-1"));
    assert_eq!(stack.top(), None);
}

#[test]
fn test_list_backed_stack() {
    let stack: ConcurrentStack<u32, LinkedList<u32>> = ConcurrentStack::new();
    for n in 0..5 {
        stack.push(n);
    }
    assert_eq!(stack.len(), 5);
    assert_eq!(stack.pop(), Some(4));
    assert_eq!(stack.into_inner().len(), 4);
}
