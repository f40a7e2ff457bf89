/*!
 * Set Adapter
 * Any `SetShape` behind a guarded reader/writer lock
 */

use crate::core::{GuardConfig, Guarded};
use crate::shape::{MultiSetShape, SetShape};
use tracing::debug;

/// Lock-guarded set
///
/// Same locking discipline as [`MapAdapter`](super::MapAdapter): every call is
/// one critical section and nothing borrowed from the set outlives it.
#[derive(Debug)]
pub struct SetAdapter<C> {
    inner: Guarded<C>,
}

impl<C: SetShape> SetAdapter<C> {
    pub fn new() -> Self
    where
        C: Default,
    {
        Self::from(C::default())
    }

    pub fn with_config(container: C, config: GuardConfig) -> Self {
        Self {
            inner: Guarded::with_config(container, config),
        }
    }

    #[inline]
    pub fn config(&self) -> &GuardConfig {
        self.inner.config()
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

    /// Insert an element
    ///
    /// Unique sets return `false` when an equal element is already present.
    pub fn insert(&self, value: C::Element) -> bool {
        self.inner.write("insert", |c| c.insert_element(value))
    }

    /// Insert every element in one exclusive section, returning how many were
    /// inserted
    pub fn insert_many<I>(&self, values: I) -> usize
    where
        I: IntoIterator<Item = C::Element>,
    {
        self.inner.write("insert_many", |c| {
            values
                .into_iter()
                .map(|value| usize::from(c.insert_element(value)))
                .sum()
        })
    }

    /// Copy of the stored element equal to `value`
    pub fn get(&self, value: &C::Element) -> Option<C::Element>
    where
        C::Element: Clone,
    {
        self.inner.read("get", |c| c.find_element(value).cloned())
    }

    pub fn contains(&self, value: &C::Element) -> bool {
        self.inner.read("contains", |c| c.find_element(value).is_some())
    }

    pub fn count(&self, value: &C::Element) -> usize {
        self.inner.read("count", |c| c.count_element(value))
    }

    /// Remove every element equal to `value`, returning how many were removed
    pub fn remove(&self, value: &C::Element) -> usize {
        self.inner.write("remove", |c| c.remove_element(value))
    }

    pub fn erase<P>(&self, pred: P) -> usize
    where
        P: FnMut(&C::Element) -> bool,
    {
        let removed = self.inner.write("erase", |c| c.remove_where(pred));
        if removed > 0 {
            debug!(container = self.config().name, removed, "Erased matching elements");
        }
        removed
    }

    /// Remove and return the first element, in natural order, matching `pred`
    pub fn find_and_erase<P>(&self, pred: P) -> Option<C::Element>
    where
        P: FnMut(&C::Element) -> bool,
        C::Element: Clone,
    {
        self.inner.write("find_and_erase", |c| c.take_element(pred))
    }

    pub fn for_each<F>(&self, visitor: F)
    where
        F: FnMut(&C::Element),
    {
        self.inner.read("for_each", |c| c.visit_elements(visitor));
    }

    pub fn snapshot(&self) -> C
    where
        C: Clone,
    {
        self.inner.snapshot()
    }

    pub fn into_inner(self) -> C {
        self.inner.into_inner()
    }
}

impl<C: MultiSetShape> SetAdapter<C> {
    /// Hand every stored copy of `value` to `visitor` as one slice
    ///
    /// `visitor` runs exactly once, with an empty slice when `value` is absent.
    pub fn for_each_key<F, R>(&self, value: &C::Element, visitor: F) -> R
    where
        F: FnOnce(&[C::Element]) -> R,
    {
        self.inner.read("for_each_key", |c| visitor(c.equal_range(value)))
    }
}

impl<C: SetShape + Default> Default for SetAdapter<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: SetShape> From<C> for SetAdapter<C> {
    fn from(container: C) -> Self {
        Self {
            inner: Guarded::new(container),
        }
    }
}

impl<C> FromIterator<C::Element> for SetAdapter<C>
where
    C: SetShape + FromIterator<C::Element>,
{
    fn from_iter<I: IntoIterator<Item = C::Element>>(iter: I) -> Self {
        Self::from(C::from_iter(iter))
    }
}
