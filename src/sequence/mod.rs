/*!
 * Sequence Adapters
 *
 * Lock-guarded sequences:
 * - `ConcurrentVec`: contiguous, indexed, reservable
 * - `ConcurrentDeque`: indexed, pushes and pops at both ends
 * - `ConcurrentList`: linked, pushes and pops at both ends
 * - `ConcurrentStack`: push / pop / top only
 */

mod adapter;
mod stack;

pub use adapter::SequenceAdapter;
pub use stack::ConcurrentStack;

use std::collections::{LinkedList, VecDeque};

/// Lock-guarded `Vec`
pub type ConcurrentVec<T> = SequenceAdapter<Vec<T>>;

/// Lock-guarded `VecDeque`
pub type ConcurrentDeque<T> = SequenceAdapter<VecDeque<T>>;

/// Lock-guarded `LinkedList`
pub type ConcurrentList<T> = SequenceAdapter<LinkedList<T>>;
