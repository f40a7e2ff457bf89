/*!
 * Stack Adapter
 * Last-in first-out discipline over a guarded sequence
 */

use crate::core::{GuardConfig, Guarded};
use crate::shape::Sequence;
use std::marker::PhantomData;

/// Lock-guarded stack
///
/// Only the top is reachable: no indexing and no traversal. `pop` returns the
/// removed element, so "read the top, then remove it" is one exclusive
/// section instead of a racy `top` + `pop` pair.
#[derive(Debug)]
pub struct ConcurrentStack<T, C = Vec<T>> {
    inner: Guarded<C>,
    _element: PhantomData<fn() -> T>,
}

impl<T, C> ConcurrentStack<T, C>
where
    C: Sequence<Element = T>,
{
    pub fn new() -> Self {
        Self::from(C::default())
    }

    pub fn with_config(container: C, config: GuardConfig) -> Self {
        Self {
            inner: Guarded::with_config(container, config),
            _element: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&self) {
        self.inner.clear();
    }

    /// Copy of the most recently pushed element
    pub fn top(&self) -> Option<T>
    where
        T: Clone,
    {
        self.inner.read("top", |c| c.last().cloned())
    }

    pub fn push(&self, value: T) {
        self.inner.write("push", |c| c.push_back(value));
    }

    pub fn pop(&self) -> Option<T> {
        self.inner.write("pop", |c| c.pop_back())
    }

    pub fn into_inner(self) -> C {
        self.inner.into_inner()
    }
}

impl<T, C> Default for ConcurrentStack<T, C>
where
    C: Sequence<Element = T>,
{
    fn default() -> Self {
        Self::new()
    }
}

/// The last element of `container` becomes the top of the stack
impl<T, C> From<C> for ConcurrentStack<T, C>
where
    C: Sequence<Element = T>,
{
    fn from(container: C) -> Self {
        Self {
            inner: Guarded::new(container),
            _element: PhantomData,
        }
    }
}
