/*!
 * Associative Adapters
 *
 * Lock-guarded maps and sets, ordered or hashed, unique or multi-key.
 * Hashed variants default to `ahash::RandomState`.
 */

mod map;
mod set;

pub use map::MapAdapter;
pub use set::SetAdapter;

use crate::shape::{BTreeMultiMap, BTreeMultiSet, HashMultiMap, HashMultiSet};
use ahash::RandomState;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Key-ordered map, one value per key
pub type ConcurrentMap<K, V> = MapAdapter<BTreeMap<K, V>>;

/// Hash-ordered map, one value per key
pub type ConcurrentHashMap<K, V, S = RandomState> = MapAdapter<HashMap<K, V, S>>;

/// Key-ordered map, any number of values per key
pub type ConcurrentMultiMap<K, V> = MapAdapter<BTreeMultiMap<K, V>>;

/// Hash-ordered map, any number of values per key
pub type ConcurrentHashMultiMap<K, V, S = RandomState> = MapAdapter<HashMultiMap<K, V, S>>;

/// Ordered set
pub type ConcurrentSet<T> = SetAdapter<BTreeSet<T>>;

/// Hash-ordered set
pub type ConcurrentHashSet<T, S = RandomState> = SetAdapter<HashSet<T, S>>;

/// Ordered set of repeatable elements
pub type ConcurrentMultiSet<T> = SetAdapter<BTreeMultiSet<T>>;

/// Hash-ordered set of repeatable elements
pub type ConcurrentHashMultiSet<T, S = RandomState> = SetAdapter<HashMultiSet<T, S>>;
