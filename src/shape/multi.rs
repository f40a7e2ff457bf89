/*!
 * Multi-Key Shapes
 *
 * Repeatable-key maps and sets built on grouped storage. Equal keys share one
 * group, so the run of entries for a key is a contiguous slice in insertion
 * order. Groups are never left empty.
 */

use super::{Container, MapShape, MultiMapShape, MultiSetShape, SetShape};
use ahash::RandomState;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Keyed storage of groups
pub trait KeyIndex: Default {
    type Key;
    type Group;

    fn group(&self, key: &Self::Key) -> Option<&Self::Group>;

    /// Stored key together with its group
    fn group_entry(&self, key: &Self::Key) -> Option<(&Self::Key, &Self::Group)>;

    fn group_mut(&mut self, key: &Self::Key) -> Option<&mut Self::Group>;

    fn group_or_default(&mut self, key: Self::Key) -> &mut Self::Group
    where
        Self::Group: Default;

    fn remove_group(&mut self, key: &Self::Key) -> Option<Self::Group>;

    /// Groups in natural key order (unspecified for hashed indexes)
    fn groups(&self) -> impl Iterator<Item = (&Self::Key, &Self::Group)>;

    fn retain_groups<F>(&mut self, f: F)
    where
        F: FnMut(&Self::Key, &mut Self::Group) -> bool;

    fn clear_groups(&mut self);
}

impl<K: Ord, G> KeyIndex for BTreeMap<K, G> {
    type Key = K;
    type Group = G;

    fn group(&self, key: &K) -> Option<&G> {
        self.get(key)
    }

    fn group_entry(&self, key: &K) -> Option<(&K, &G)> {
        self.get_key_value(key)
    }

    fn group_mut(&mut self, key: &K) -> Option<&mut G> {
        self.get_mut(key)
    }

    fn group_or_default(&mut self, key: K) -> &mut G
    where
        G: Default,
    {
        self.entry(key).or_default()
    }

    fn remove_group(&mut self, key: &K) -> Option<G> {
        self.remove(key)
    }

    fn groups(&self) -> impl Iterator<Item = (&K, &G)> {
        self.iter()
    }

    fn retain_groups<F: FnMut(&K, &mut G) -> bool>(&mut self, f: F) {
        self.retain(f);
    }

    fn clear_groups(&mut self) {
        BTreeMap::clear(self);
    }
}

impl<K: Hash + Eq, G, S: BuildHasher + Default> KeyIndex for HashMap<K, G, S> {
    type Key = K;
    type Group = G;

    fn group(&self, key: &K) -> Option<&G> {
        self.get(key)
    }

    fn group_entry(&self, key: &K) -> Option<(&K, &G)> {
        self.get_key_value(key)
    }

    fn group_mut(&mut self, key: &K) -> Option<&mut G> {
        self.get_mut(key)
    }

    fn group_or_default(&mut self, key: K) -> &mut G
    where
        G: Default,
    {
        self.entry(key).or_default()
    }

    fn remove_group(&mut self, key: &K) -> Option<G> {
        self.remove(key)
    }

    fn groups(&self) -> impl Iterator<Item = (&K, &G)> {
        self.iter()
    }

    fn retain_groups<F: FnMut(&K, &mut G) -> bool>(&mut self, f: F) {
        self.retain(f);
    }

    fn clear_groups(&mut self) {
        HashMap::clear(self);
    }
}

// =============================================================================
// MultiMap
// =============================================================================

/// Map allowing any number of values per key
#[derive(Debug, Clone)]
pub struct MultiMap<I> {
    index: I,
    len: usize,
}

/// Key-ordered multimap
pub type BTreeMultiMap<K, V> = MultiMap<BTreeMap<K, Vec<V>>>;

/// Hash-ordered multimap
pub type HashMultiMap<K, V, S = RandomState> = MultiMap<HashMap<K, Vec<V>, S>>;

impl<I: KeyIndex> MultiMap<I> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<I: KeyIndex> Default for MultiMap<I> {
    fn default() -> Self {
        Self {
            index: I::default(),
            len: 0,
        }
    }
}

impl<K, V, I> Container for MultiMap<I>
where
    I: KeyIndex<Key = K, Group = Vec<V>>,
{
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        self.index.clear_groups();
        self.len = 0;
    }
}

impl<K, V, I> MapShape for MultiMap<I>
where
    I: KeyIndex<Key = K, Group = Vec<V>>,
{
    type Key = K;
    type Value = V;

    fn insert_entry(&mut self, key: K, value: V) -> bool {
        self.index.group_or_default(key).push(value);
        self.len += 1;
        true
    }

    fn find_entry(&self, key: &K) -> Option<(&K, &V)> {
        let (stored, group) = self.index.group_entry(key)?;
        group.first().map(|value| (stored, value))
    }

    fn count_key(&self, key: &K) -> usize {
        self.index.group(key).map_or(0, Vec::len)
    }

    fn remove_key(&mut self, key: &K) -> usize {
        let removed = self.index.remove_group(key).map_or(0, |group| group.len());
        self.len -= removed;
        removed
    }

    fn visit_entries<F: FnMut(&K, &V)>(&self, mut f: F) {
        for (key, group) in self.index.groups() {
            for value in group {
                f(key, value);
            }
        }
    }

    fn remove_where<F: FnMut(&K, &V) -> bool>(&mut self, mut pred: F) -> usize {
        let mut removed = 0;
        self.index.retain_groups(|key, group| {
            let before = group.len();
            group.retain(|value| !pred(key, value));
            removed += before - group.len();
            !group.is_empty()
        });
        self.len -= removed;
        removed
    }

    fn take_entry<F>(&mut self, mut pred: F) -> Option<(K, V)>
    where
        F: FnMut(&K, &V) -> bool,
        K: Clone,
    {
        let (key, position) = self.index.groups().find_map(|(key, group)| {
            group
                .iter()
                .position(|value| pred(key, value))
                .map(|position| (key.clone(), position))
        })?;

        let group = self.index.group_mut(&key)?;
        let value = group.remove(position);
        if group.is_empty() {
            self.index.remove_group(&key);
        }
        self.len -= 1;
        Some((key, value))
    }
}

impl<K, V, I> MultiMapShape for MultiMap<I>
where
    I: KeyIndex<Key = K, Group = Vec<V>>,
{
    fn equal_range(&self, key: &K) -> &[V] {
        self.index.group(key).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl<K, V, I> FromIterator<(K, V)> for MultiMap<I>
where
    I: KeyIndex<Key = K, Group = Vec<V>>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<K, V, I> Extend<(K, V)> for MultiMap<I>
where
    I: KeyIndex<Key = K, Group = Vec<V>>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert_entry(key, value);
        }
    }
}

// =============================================================================
// MultiSet
// =============================================================================

/// Set allowing any number of equal elements
///
/// Every stored copy is kept, so elements that compare equal but differ in
/// other ways come back exactly as inserted.
#[derive(Debug, Clone)]
pub struct MultiSet<I> {
    index: I,
    len: usize,
}

/// Ordered multiset
pub type BTreeMultiSet<T> = MultiSet<BTreeMap<T, Vec<T>>>;

/// Hash-ordered multiset
pub type HashMultiSet<T, S = RandomState> = MultiSet<HashMap<T, Vec<T>, S>>;

impl<I: KeyIndex> MultiSet<I> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<I: KeyIndex> Default for MultiSet<I> {
    fn default() -> Self {
        Self {
            index: I::default(),
            len: 0,
        }
    }
}

impl<T, I> Container for MultiSet<I>
where
    I: KeyIndex<Key = T, Group = Vec<T>>,
{
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        self.index.clear_groups();
        self.len = 0;
    }
}

impl<T, I> SetShape for MultiSet<I>
where
    T: Clone,
    I: KeyIndex<Key = T, Group = Vec<T>>,
{
    type Element = T;

    fn insert_element(&mut self, element: T) -> bool {
        self.index.group_or_default(element.clone()).push(element);
        self.len += 1;
        true
    }

    fn find_element(&self, element: &T) -> Option<&T> {
        self.index.group(element)?.first()
    }

    fn count_element(&self, element: &T) -> usize {
        self.index.group(element).map_or(0, Vec::len)
    }

    fn remove_element(&mut self, element: &T) -> usize {
        let removed = self.index.remove_group(element).map_or(0, |group| group.len());
        self.len -= removed;
        removed
    }

    fn visit_elements<F: FnMut(&T)>(&self, mut f: F) {
        for (_, group) in self.index.groups() {
            group.iter().for_each(&mut f);
        }
    }

    fn remove_where<F: FnMut(&T) -> bool>(&mut self, mut pred: F) -> usize {
        let mut removed = 0;
        self.index.retain_groups(|_, group| {
            let before = group.len();
            group.retain(|element| !pred(element));
            removed += before - group.len();
            !group.is_empty()
        });
        self.len -= removed;
        removed
    }

    fn take_element<F>(&mut self, mut pred: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let (key, position) = self.index.groups().find_map(|(key, group)| {
            group
                .iter()
                .position(|element| pred(element))
                .map(|position| (key.clone(), position))
        })?;

        let group = self.index.group_mut(&key)?;
        let element = group.remove(position);
        if group.is_empty() {
            self.index.remove_group(&key);
        }
        self.len -= 1;
        Some(element)
    }
}

impl<T, I> MultiSetShape for MultiSet<I>
where
    T: Clone,
    I: KeyIndex<Key = T, Group = Vec<T>>,
{
    fn equal_range(&self, element: &T) -> &[T] {
        self.index.group(element).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl<T, I> FromIterator<T> for MultiSet<I>
where
    T: Clone,
    I: KeyIndex<Key = T, Group = Vec<T>>,
{
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

impl<T, I> Extend<T> for MultiSet<I>
where
    T: Clone,
    I: KeyIndex<Key = T, Group = Vec<T>>,
{
    fn extend<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        for element in iter {
            self.insert_element(element);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multimap_insert_always_succeeds() {
        let mut map = BTreeMultiMap::new();
        assert!(map.insert_entry(1, "a"));
        assert!(map.insert_entry(1, "b"));
        assert!(map.insert_entry(2, "c"));

        assert_eq!(Container::len(&map), 3);
        assert_eq!(map.count_key(&1), 2);
        assert_eq!(map.equal_range(&1), &["a", "b"]);
        assert!(map.equal_range(&9).is_empty());
    }

    #[test]
    fn test_multimap_removal_keeps_len_consistent() {
        let mut map: HashMultiMap<&str, i32> =
            [("x", 1), ("x", 2), ("y", 3), ("x", 4)].into_iter().collect();

        assert_eq!(MapShape::remove_where(&mut map, |_, v| v % 2 == 0), 2);
        assert_eq!(Container::len(&map), 2);
        assert_eq!(map.equal_range(&"x"), &[1]);

        assert_eq!(map.take_entry(|k, _| *k == "x"), Some(("x", 1)));
        assert_eq!(map.count_key(&"x"), 0);
        assert_eq!(map.remove_key(&"y"), 1);
        assert!(Container::is_empty(&map));
    }

    #[test]
    fn test_multiset_groups() {
        let mut set: BTreeMultiSet<i32> = [3, 1, 3, 2, 3].into_iter().collect();
        assert_eq!(Container::len(&set), 5);
        assert_eq!(set.count_element(&3), 3);

        let mut visited = Vec::new();
        set.visit_elements(|n| visited.push(*n));
        assert_eq!(visited, vec![1, 2, 3, 3, 3]);

        assert_eq!(set.take_element(|n| *n == 3), Some(3));
        assert_eq!(set.equal_range(&3), &[3, 3]);
        assert_eq!(set.remove_element(&3), 2);
        assert_eq!(Container::len(&set), 2);
    }
}
