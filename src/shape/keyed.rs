/*!
 * Unique Associative Shapes
 * `MapShape` / `SetShape` for the std ordered and hashed collections
 */

use super::{Container, MapShape, SetShape, UniqueMapShape};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::{BuildHasher, Hash};

// =============================================================================
// BTreeMap
// =============================================================================

impl<K: Ord, V> Container for BTreeMap<K, V> {
    #[inline]
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    #[inline]
    fn clear(&mut self) {
        BTreeMap::clear(self)
    }
}

impl<K: Ord, V> MapShape for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn insert_entry(&mut self, key: K, value: V) -> bool {
        match self.entry(key) {
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
            std::collections::btree_map::Entry::Occupied(_) => false,
        }
    }

    fn find_entry(&self, key: &K) -> Option<(&K, &V)> {
        self.get_key_value(key)
    }

    fn count_key(&self, key: &K) -> usize {
        usize::from(self.contains_key(key))
    }

    fn remove_key(&mut self, key: &K) -> usize {
        usize::from(self.remove(key).is_some())
    }

    fn visit_entries<F: FnMut(&K, &V)>(&self, mut f: F) {
        for (key, value) in self.iter() {
            f(key, value);
        }
    }

    fn remove_where<F: FnMut(&K, &V) -> bool>(&mut self, mut pred: F) -> usize {
        let before = BTreeMap::len(self);
        self.retain(|key, value| !pred(key, &*value));
        before - BTreeMap::len(self)
    }

    fn take_entry<F>(&mut self, mut pred: F) -> Option<(K, V)>
    where
        F: FnMut(&K, &V) -> bool,
        K: Clone,
    {
        let key = self
            .iter()
            .find(|&(key, value)| pred(key, value))
            .map(|(key, _)| key.clone())?;
        self.remove_entry(&key)
    }
}

impl<K: Ord, V> UniqueMapShape for BTreeMap<K, V> {
    fn value_mut(&mut self, key: &K) -> Option<&mut V> {
        self.get_mut(key)
    }

    fn upsert(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn value_or_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.entry(key).or_default()
    }
}

// =============================================================================
// HashMap
// =============================================================================

impl<K: Hash + Eq, V, S: BuildHasher> Container for HashMap<K, V, S> {
    #[inline]
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    #[inline]
    fn clear(&mut self) {
        HashMap::clear(self)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> MapShape for HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    fn insert_entry(&mut self, key: K, value: V) -> bool {
        match self.entry(key) {
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
            std::collections::hash_map::Entry::Occupied(_) => false,
        }
    }

    fn find_entry(&self, key: &K) -> Option<(&K, &V)> {
        self.get_key_value(key)
    }

    fn count_key(&self, key: &K) -> usize {
        usize::from(self.contains_key(key))
    }

    fn remove_key(&mut self, key: &K) -> usize {
        usize::from(self.remove(key).is_some())
    }

    fn visit_entries<F: FnMut(&K, &V)>(&self, mut f: F) {
        for (key, value) in self.iter() {
            f(key, value);
        }
    }

    fn remove_where<F: FnMut(&K, &V) -> bool>(&mut self, mut pred: F) -> usize {
        let before = HashMap::len(self);
        self.retain(|key, value| !pred(key, &*value));
        before - HashMap::len(self)
    }

    fn take_entry<F>(&mut self, mut pred: F) -> Option<(K, V)>
    where
        F: FnMut(&K, &V) -> bool,
        K: Clone,
    {
        let key = self
            .iter()
            .find(|&(key, value)| pred(key, value))
            .map(|(key, _)| key.clone())?;
        self.remove_entry(&key)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> UniqueMapShape for HashMap<K, V, S> {
    fn value_mut(&mut self, key: &K) -> Option<&mut V> {
        self.get_mut(key)
    }

    fn upsert(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn value_or_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.entry(key).or_default()
    }
}

// =============================================================================
// BTreeSet
// =============================================================================

impl<T: Ord> Container for BTreeSet<T> {
    #[inline]
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    #[inline]
    fn clear(&mut self) {
        BTreeSet::clear(self)
    }
}

impl<T: Ord> SetShape for BTreeSet<T> {
    type Element = T;

    fn insert_element(&mut self, element: T) -> bool {
        self.insert(element)
    }

    fn find_element(&self, element: &T) -> Option<&T> {
        self.get(element)
    }

    fn count_element(&self, element: &T) -> usize {
        usize::from(self.contains(element))
    }

    fn remove_element(&mut self, element: &T) -> usize {
        usize::from(self.remove(element))
    }

    fn visit_elements<F: FnMut(&T)>(&self, f: F) {
        self.iter().for_each(f);
    }

    fn remove_where<F: FnMut(&T) -> bool>(&mut self, mut pred: F) -> usize {
        let before = BTreeSet::len(self);
        self.retain(|element| !pred(element));
        before - BTreeSet::len(self)
    }

    fn take_element<F>(&mut self, mut pred: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
        T: Clone,
    {
        let found = self.iter().find(|&element| pred(element)).cloned()?;
        self.take(&found)
    }
}

// =============================================================================
// HashSet
// =============================================================================

impl<T: Hash + Eq, S: BuildHasher> Container for HashSet<T, S> {
    #[inline]
    fn len(&self) -> usize {
        HashSet::len(self)
    }

    #[inline]
    fn clear(&mut self) {
        HashSet::clear(self)
    }
}

impl<T: Hash + Eq, S: BuildHasher> SetShape for HashSet<T, S> {
    type Element = T;

    fn insert_element(&mut self, element: T) -> bool {
        self.insert(element)
    }

    fn find_element(&self, element: &T) -> Option<&T> {
        self.get(element)
    }

    fn count_element(&self, element: &T) -> usize {
        usize::from(self.contains(element))
    }

    fn remove_element(&mut self, element: &T) -> usize {
        usize::from(self.remove(element))
    }

    fn visit_elements<F: FnMut(&T)>(&self, f: F) {
        self.iter().for_each(f);
    }

    fn remove_where<F: FnMut(&T) -> bool>(&mut self, mut pred: F) -> usize {
        let before = HashSet::len(self);
        self.retain(|element| !pred(element));
        before - HashSet::len(self)
    }

    fn take_element<F>(&mut self, mut pred: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
        T: Clone,
    {
        let found = self.iter().find(|&element| pred(element)).cloned()?;
        self.take(&found)
    }
}
