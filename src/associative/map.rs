/*!
 * Map Adapter
 * Any `MapShape` behind a guarded reader/writer lock
 */

use crate::core::{CollectionError, CollectionResult, GuardConfig, Guarded};
use crate::shape::{MapShape, MultiMapShape, UniqueMapShape};
use tracing::debug;

/// Lock-guarded map
///
/// Lookups return `Option<V>` copies taken under the shared lock, so the
/// caller can inspect the result after the lock is gone without racing a
/// concurrent erase. Misses (`None`) and duplicate keys (`false`) are normal
/// outcomes, not errors.
///
/// # Performance
///
/// - **Reads**: concurrent, shared lock
/// - **Writes**: serialized, exclusive lock for the whole operation
/// - **Best for**: read-mostly maps where callers need value snapshots
///
/// # Example
///
/// ```
/// use guarded_collections::ConcurrentMap;
///
/// let map = ConcurrentMap::new();
/// map.insert(1, "a");
/// map.insert(2, "b");
///
/// assert!(!map.insert(1, "c"));
/// assert_eq!(map.get(&1), Some("a"));
///
/// assert_eq!(map.remove(&2), 1);
/// assert_eq!(map.len(), 1);
/// assert!(!map.contains(&2));
/// ```
#[derive(Debug)]
pub struct MapAdapter<C> {
    inner: Guarded<C>,
}

impl<C: MapShape> MapAdapter<C> {
    /// Empty map
    pub fn new() -> Self
    where
        C: Default,
    {
        Self::from(C::default())
    }

    /// Wrap an existing map with an explicit configuration
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

    /// Insert an entry
    ///
    /// Unique maps return `false` and keep the existing value when `key` is
    /// already present. Multi-key maps always insert and return `true`.
    pub fn insert(&self, key: C::Key, value: C::Value) -> bool {
        self.inner.write("insert", |c| c.insert_entry(key, value))
    }

    /// Insert every entry in one exclusive section, returning how many were
    /// inserted
    pub fn insert_many<I>(&self, entries: I) -> usize
    where
        I: IntoIterator<Item = (C::Key, C::Value)>,
    {
        self.inner.write("insert_many", |c| {
            entries
                .into_iter()
                .map(|(key, value)| usize::from(c.insert_entry(key, value)))
                .sum()
        })
    }

    /// Copy of the value stored under `key` (the first one, for multi-key maps)
    pub fn get(&self, key: &C::Key) -> Option<C::Value>
    where
        C::Value: Clone,
    {
        self.inner
            .read("get", |c| c.find_entry(key).map(|(_, value)| value.clone()))
    }

    pub fn contains(&self, key: &C::Key) -> bool {
        self.inner.read("contains", |c| c.find_entry(key).is_some())
    }

    /// Number of entries stored under `key`
    pub fn count(&self, key: &C::Key) -> usize {
        self.inner.read("count", |c| c.count_key(key))
    }

    /// Remove every entry stored under `key`, returning how many were removed
    pub fn remove(&self, key: &C::Key) -> usize {
        self.inner.write("remove", |c| c.remove_key(key))
    }

    /// Remove every entry matching `pred` in one exclusive section
    pub fn erase<P>(&self, pred: P) -> usize
    where
        P: FnMut(&C::Key, &C::Value) -> bool,
    {
        let removed = self.inner.write("erase", |c| c.remove_where(pred));
        if removed > 0 {
            debug!(container = self.config().name, removed, "Erased matching entries");
        }
        removed
    }

    /// Remove and return the first entry, in natural order, matching `pred`
    pub fn find_and_erase<P>(&self, pred: P) -> Option<(C::Key, C::Value)>
    where
        P: FnMut(&C::Key, &C::Value) -> bool,
        C::Key: Clone,
    {
        self.inner.write("find_and_erase", |c| c.take_entry(pred))
    }

    /// Visit every entry under the shared lock
    ///
    /// Order is key order for ordered maps and unspecified (but fixed for the
    /// duration of the call) for hashed maps.
    pub fn for_each<F>(&self, visitor: F)
    where
        F: FnMut(&C::Key, &C::Value),
    {
        self.inner.read("for_each", |c| c.visit_entries(visitor));
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

impl<C: UniqueMapShape> MapAdapter<C> {
    /// Copy of the value under `key`, or `KeyNotFound`
    ///
    /// Never inserts. Use `get_or_insert_default` for create-on-miss.
    pub fn at(&self, key: &C::Key) -> CollectionResult<C::Value>
    where
        C::Value: Clone,
    {
        self.get(key).ok_or(CollectionError::KeyNotFound)
    }

    /// Insert or overwrite, returning the previous value
    pub fn set(&self, key: C::Key, value: C::Value) -> Option<C::Value> {
        self.inner.write("set", |c| c.upsert(key, value))
    }

    /// Apply `f` to the value under `key` in one exclusive section
    pub fn update<F, R>(&self, key: &C::Key, f: F) -> Option<R>
    where
        F: FnOnce(&mut C::Value) -> R,
    {
        self.inner.write("update", |c| c.value_mut(key).map(f))
    }

    /// Copy of the value under `key`, inserting `V::default()` first when the
    /// key is missing
    ///
    /// Takes the exclusive lock because it may mutate.
    pub fn get_or_insert_default(&self, key: C::Key) -> C::Value
    where
        C::Value: Default + Clone,
    {
        self.inner
            .write("get_or_insert_default", |c| c.value_or_default(key).clone())
    }
}

impl<C: MultiMapShape> MapAdapter<C> {
    /// Hand every value stored under `key` to `visitor` as one slice
    ///
    /// `visitor` runs exactly once under the shared lock, with an empty slice
    /// when the key is absent.
    pub fn for_each_key<F, R>(&self, key: &C::Key, visitor: F) -> R
    where
        F: FnOnce(&[C::Value]) -> R,
    {
        self.inner.read("for_each_key", |c| visitor(c.equal_range(key)))
    }
}

impl<C: MapShape + Default> Default for MapAdapter<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: MapShape> From<C> for MapAdapter<C> {
    fn from(container: C) -> Self {
        Self {
            inner: Guarded::new(container),
        }
    }
}

impl<C> FromIterator<(C::Key, C::Value)> for MapAdapter<C>
where
    C: MapShape + FromIterator<(C::Key, C::Value)>,
{
    fn from_iter<I: IntoIterator<Item = (C::Key, C::Value)>>(iter: I) -> Self {
        Self::from(C::from_iter(iter))
    }
}
