/*!
 * Sequence Adapter
 * Any `Sequence` shape behind a guarded reader/writer lock
 */

use crate::core::{CollectionError, CollectionResult, GuardConfig, Guarded};
use crate::shape::{DoubleEnded, RandomAccess, Reservable, Sequence};
use std::cmp::Ordering;
use tracing::debug;

/// Lock-guarded sequence
///
/// Reads (`len`, `front`, `get`, `for_each`, ...) take the shared lock;
/// everything that changes the sequence takes the exclusive lock for the full
/// operation. Accessors return copies, never references.
///
/// # Callbacks
///
/// Predicates, visitors and comparators run while the lock is held. They must
/// not call back into the same adapter; doing so deadlocks.
///
/// # Example
///
/// ```
/// use guarded_collections::ConcurrentVec;
///
/// let numbers: ConcurrentVec<i32> = (1..=5).collect();
/// assert_eq!(numbers.erase(|n| n % 2 == 0), 2);
/// assert_eq!(numbers.snapshot(), vec![1, 3, 5]);
///
/// assert!(numbers.insert_at(|n| *n == 3, 2));
/// assert!(!numbers.insert_at(|n| *n == 42, 0));
/// assert_eq!(numbers.snapshot(), vec![1, 2, 3, 5]);
/// ```
#[derive(Debug)]
pub struct SequenceAdapter<C> {
    inner: Guarded<C>,
}

impl<C: Sequence> SequenceAdapter<C> {
    /// Empty sequence
    pub fn new() -> Self {
        Self::from(C::default())
    }

    /// Wrap an existing sequence with an explicit configuration
    pub fn with_config(container: C, config: GuardConfig) -> Self {
        Self {
            inner: Guarded::with_config(container, config),
        }
    }

    /// `len` default-constructed elements
    pub fn with_len(len: usize) -> Self
    where
        C::Element: Default,
    {
        let mut container = C::default();
        container.resize_with(len, Default::default);
        Self::from(container)
    }

    /// `len` copies of `value`
    pub fn from_elem(len: usize, value: C::Element) -> Self
    where
        C::Element: Clone,
    {
        let mut container = C::default();
        container.resize_with(len, || value.clone());
        Self::from(container)
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

    /// Replace the whole contents in one exclusive section
    pub fn assign<I>(&self, elements: I)
    where
        I: IntoIterator<Item = C::Element>,
    {
        let len = self.inner.write("assign", |c| {
            c.clear();
            c.insert_all_at(0, elements);
            c.len()
        });
        debug!(container = self.config().name, len, "Sequence reassigned");
    }

    /// Copy of the first element
    pub fn front(&self) -> Option<C::Element>
    where
        C::Element: Clone,
    {
        self.inner.read("front", |c| c.first().cloned())
    }

    /// Copy of the last element
    pub fn back(&self) -> Option<C::Element>
    where
        C::Element: Clone,
    {
        self.inner.read("back", |c| c.last().cloned())
    }

    pub fn push_back(&self, value: C::Element) {
        self.inner.write("push_back", |c| c.push_back(value));
    }

    pub fn pop_back(&self) -> Option<C::Element> {
        self.inner.write("pop_back", |c| c.pop_back())
    }

    /// Grow with copies of `value` or truncate to `len`
    pub fn resize(&self, len: usize, value: C::Element)
    where
        C::Element: Clone,
    {
        self.inner
            .write("resize", |c| c.resize_with(len, || value.clone()));
    }

    /// Grow with default elements or truncate to `len`
    pub fn resize_default(&self, len: usize)
    where
        C::Element: Default,
    {
        self.inner
            .write("resize", |c| c.resize_with(len, Default::default));
    }

    /// Insert `value` right before the first element matching `pred`
    ///
    /// Returns `false` and leaves the sequence untouched when nothing matches;
    /// there is no append fallback.
    pub fn insert_at<P>(&self, pred: P, value: C::Element) -> bool
    where
        P: FnMut(&C::Element) -> bool,
    {
        self.insert_all_at(pred, std::iter::once(value))
    }

    /// Insert `elements`, in order, right before the first element matching
    /// `pred`. Covers the repeated-value, range and literal-list forms.
    pub fn insert_all_at<P, I>(&self, pred: P, elements: I) -> bool
    where
        P: FnMut(&C::Element) -> bool,
        I: IntoIterator<Item = C::Element>,
    {
        self.inner.write("insert_at", |c| match c.position(pred) {
            Some(index) => {
                c.insert_all_at(index, elements);
                true
            }
            None => false,
        })
    }

    /// Remove every element matching `pred` in one exclusive section
    ///
    /// The relative order of the remaining elements is preserved. Returns the
    /// number of elements removed.
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

    /// Remove every element equal to `value`
    pub fn remove(&self, value: &C::Element) -> usize
    where
        C::Element: PartialEq,
    {
        self.erase(|element| element == value)
    }

    /// Remove and return the first element matching `pred`
    ///
    /// At most one element is removed per call.
    pub fn find_and_erase<P>(&self, pred: P) -> Option<C::Element>
    where
        P: FnMut(&C::Element) -> bool,
    {
        self.inner.write("find_and_erase", |c| {
            let index = c.position(pred)?;
            c.remove_at(index)
        })
    }

    /// Visit every element front to back under the shared lock
    ///
    /// The lock is held for the entire traversal, so the visitor sees one
    /// consistent state.
    pub fn for_each<F>(&self, visitor: F)
    where
        F: FnMut(&C::Element),
    {
        self.inner.read("for_each", |c| c.visit(visitor));
    }

    /// Sort ascending; equal elements may be reordered
    pub fn sort(&self)
    where
        C::Element: Ord,
    {
        self.sort_by(Ord::cmp);
    }

    /// Sort with `compare`, which must be a strict weak ordering
    pub fn sort_by<F>(&self, compare: F)
    where
        F: FnMut(&C::Element, &C::Element) -> Ordering,
    {
        self.inner.write("sort", |c| c.sort_by(compare));
    }

    /// Deep copy of the current contents
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

impl<C: DoubleEnded> SequenceAdapter<C> {
    pub fn push_front(&self, value: C::Element) {
        self.inner.write("push_front", |c| c.push_front(value));
    }

    pub fn pop_front(&self) -> Option<C::Element> {
        self.inner.write("pop_front", |c| c.pop_front())
    }
}

impl<C: RandomAccess> SequenceAdapter<C> {
    /// Copy of the element at `index`, if present
    pub fn get(&self, index: usize) -> Option<C::Element>
    where
        C::Element: Clone,
    {
        self.inner.read("get", |c| c.element(index).cloned())
    }

    /// Copy of the element at `index`, or `OutOfRange`
    pub fn at(&self, index: usize) -> CollectionResult<C::Element>
    where
        C::Element: Clone,
    {
        self.inner.read("at", |c| {
            c.element(index)
                .cloned()
                .ok_or_else(|| CollectionError::out_of_range(index, c.len()))
        })
    }

    /// Overwrite the element at `index`
    ///
    /// The bounds check and the write happen in the same exclusive section.
    pub fn set(&self, index: usize, value: C::Element) -> CollectionResult<()> {
        self.update(index, |slot| *slot = value)
    }

    /// Apply `f` to the element at `index` in one exclusive section
    pub fn update<F, R>(&self, index: usize, f: F) -> CollectionResult<R>
    where
        F: FnOnce(&mut C::Element) -> R,
    {
        self.inner.write("update", |c| {
            let len = c.len();
            c.element_mut(index)
                .map(f)
                .ok_or_else(|| CollectionError::out_of_range(index, len))
        })
    }

    /// Visit positions `first..last` with their index
    ///
    /// The range is validated against the length observed under the lock.
    pub fn for_each_range<F>(&self, first: usize, last: usize, mut visitor: F) -> CollectionResult<()>
    where
        F: FnMut(usize, &C::Element),
    {
        self.inner.read("for_each_range", |c| {
            CollectionError::check_range(first, last, c.len())?;
            for index in first..last {
                if let Some(element) = c.element(index) {
                    visitor(index, element);
                }
            }
            Ok(())
        })
    }
}

impl<C: Reservable> SequenceAdapter<C> {
    pub fn capacity(&self) -> usize {
        self.inner.read("capacity", |c| c.capacity())
    }

    pub fn reserve(&self, additional: usize) {
        self.inner.write("reserve", |c| c.reserve(additional));
    }

    pub fn shrink_to_fit(&self) {
        self.inner.write("shrink_to_fit", |c| c.shrink_to_fit());
    }
}

impl<C: Sequence> Default for SequenceAdapter<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Sequence> From<C> for SequenceAdapter<C> {
    fn from(container: C) -> Self {
        Self {
            inner: Guarded::new(container),
        }
    }
}

impl<C> FromIterator<C::Element> for SequenceAdapter<C>
where
    C: Sequence + FromIterator<C::Element>,
{
    fn from_iter<I: IntoIterator<Item = C::Element>>(iter: I) -> Self {
        Self::from(C::from_iter(iter))
    }
}
