/*!
 * Container Shapes
 *
 * Capability traits describing what a backing collection can do. Adapters are
 * generic over these traits, so one locking discipline covers every
 * collection:
 * - Sequence shapes: `Vec`, `VecDeque`, `LinkedList`
 * - Unique associative shapes: `BTreeMap`, `HashMap`, `BTreeSet`, `HashSet`
 * - Multi associative shapes: `MultiMap`, `MultiSet` over a `KeyIndex`
 *
 * Every method here runs inside a critical section that the adapter already
 * holds; none of them lock anything themselves.
 */

mod keyed;
mod multi;
mod sequence;

pub use multi::{
    BTreeMultiMap, BTreeMultiSet, HashMultiMap, HashMultiSet, KeyIndex, MultiMap, MultiSet,
};

use std::cmp::Ordering;

/// Operations every backing collection supports
pub trait Container {
    /// Number of elements (entries, for maps)
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every element
    fn clear(&mut self);
}

/// Ordered sequence of elements
///
/// Natural order is insertion order; every traversal and search below walks
/// from the front.
pub trait Sequence: Container + Default {
    type Element;

    fn first(&self) -> Option<&Self::Element>;

    fn last(&self) -> Option<&Self::Element>;

    fn push_back(&mut self, element: Self::Element);

    fn pop_back(&mut self) -> Option<Self::Element>;

    /// Visit every element front to back
    fn visit<F>(&self, f: F)
    where
        F: FnMut(&Self::Element);

    /// Index of the first element matching `pred`
    fn position<F>(&self, pred: F) -> Option<usize>
    where
        F: FnMut(&Self::Element) -> bool;

    /// Insert `elements` so the first of them lands at `index`
    ///
    /// `index` must be `<= len()`.
    fn insert_all_at<I>(&mut self, index: usize, elements: I)
    where
        I: IntoIterator<Item = Self::Element>;

    fn remove_at(&mut self, index: usize) -> Option<Self::Element>;

    /// Remove every element matching `pred`, keeping the relative order of the
    /// rest. Returns how many were removed.
    fn remove_where<F>(&mut self, pred: F) -> usize
    where
        F: FnMut(&Self::Element) -> bool;

    fn resize_with<F>(&mut self, len: usize, fill: F)
    where
        F: FnMut() -> Self::Element;

    /// In-place reorder; stability is not guaranteed
    fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Self::Element, &Self::Element) -> Ordering;
}

/// Sequences with cheap access at both ends
pub trait DoubleEnded: Sequence {
    fn push_front(&mut self, element: Self::Element);

    fn pop_front(&mut self) -> Option<Self::Element>;
}

/// Sequences with positional access
pub trait RandomAccess: Sequence {
    fn element(&self, index: usize) -> Option<&Self::Element>;

    fn element_mut(&mut self, index: usize) -> Option<&mut Self::Element>;
}

/// Sequences with an explicit allocation
pub trait Reservable: Sequence {
    fn capacity(&self) -> usize;

    fn reserve(&mut self, additional: usize);

    fn shrink_to_fit(&mut self);
}

/// Key/value collection
pub trait MapShape: Container {
    type Key;
    type Value;

    /// Insert an entry. Unique shapes return `false` and leave the existing
    /// entry untouched on key collision; multi shapes always insert.
    fn insert_entry(&mut self, key: Self::Key, value: Self::Value) -> bool;

    /// First entry stored under `key`
    fn find_entry(&self, key: &Self::Key) -> Option<(&Self::Key, &Self::Value)>;

    fn count_key(&self, key: &Self::Key) -> usize;

    /// Remove every entry stored under `key`, returning how many were removed
    fn remove_key(&mut self, key: &Self::Key) -> usize;

    fn visit_entries<F>(&self, f: F)
    where
        F: FnMut(&Self::Key, &Self::Value);

    /// Remove every entry matching `pred`, returning how many were removed
    fn remove_where<F>(&mut self, pred: F) -> usize
    where
        F: FnMut(&Self::Key, &Self::Value) -> bool;

    /// Remove and return the first entry, in natural order, matching `pred`
    fn take_entry<F>(&mut self, pred: F) -> Option<(Self::Key, Self::Value)>
    where
        F: FnMut(&Self::Key, &Self::Value) -> bool,
        Self::Key: Clone;
}

/// Maps holding at most one value per key
pub trait UniqueMapShape: MapShape {
    fn value_mut(&mut self, key: &Self::Key) -> Option<&mut Self::Value>;

    /// Insert or overwrite, returning the previous value
    fn upsert(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value>;

    /// Value under `key`, creating a default one when missing
    fn value_or_default(&mut self, key: Self::Key) -> &mut Self::Value
    where
        Self::Value: Default;
}

/// Maps holding any number of values per key
pub trait MultiMapShape: MapShape {
    /// All values under `key`, in insertion order; empty when absent
    fn equal_range(&self, key: &Self::Key) -> &[Self::Value];
}

/// Key-only collection
pub trait SetShape: Container {
    type Element;

    /// Insert an element. Unique shapes return `false` on collision.
    fn insert_element(&mut self, element: Self::Element) -> bool;

    /// First stored element equal to `element`
    fn find_element(&self, element: &Self::Element) -> Option<&Self::Element>;

    fn count_element(&self, element: &Self::Element) -> usize;

    fn remove_element(&mut self, element: &Self::Element) -> usize;

    fn visit_elements<F>(&self, f: F)
    where
        F: FnMut(&Self::Element);

    fn remove_where<F>(&mut self, pred: F) -> usize
    where
        F: FnMut(&Self::Element) -> bool;

    fn take_element<F>(&mut self, pred: F) -> Option<Self::Element>
    where
        F: FnMut(&Self::Element) -> bool,
        Self::Element: Clone;
}

/// Sets holding any number of equal elements
pub trait MultiSetShape: SetShape {
    /// All stored elements equal to `element`, in insertion order
    fn equal_range(&self, element: &Self::Element) -> &[Self::Element];
}
