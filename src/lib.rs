/*!
 * Guarded Collections
 * Reader/writer-locked containers exposed as a library
 *
 * Every adapter owns one backing collection and one `parking_lot::RwLock`.
 * Reads take the shared lock, mutations take the exclusive lock, and nothing
 * that borrows from the guarded collection ever leaves a critical section:
 * lookups return owned copies, traversal happens through callbacks.
 */

pub mod associative;
pub mod core;
pub mod monitoring;
pub mod sequence;
pub mod shape;
pub mod stress;

// Re-exports
pub use associative::{
    ConcurrentHashMap, ConcurrentHashMultiMap, ConcurrentHashMultiSet, ConcurrentHashSet,
    ConcurrentMap, ConcurrentMultiMap, ConcurrentMultiSet, ConcurrentSet, MapAdapter, SetAdapter,
};
pub use core::{CollectionError, CollectionResult, GuardConfig, Guarded, LockMode};
pub use monitoring::init_tracing;
pub use sequence::{ConcurrentDeque, ConcurrentList, ConcurrentStack, ConcurrentVec, SequenceAdapter};
pub use shape::{
    BTreeMultiMap, BTreeMultiSet, Container, DoubleEnded, HashMultiMap, HashMultiSet, KeyIndex,
    MapShape, MultiMap, MultiMapShape, MultiSet, MultiSetShape, RandomAccess, Reservable,
    Sequence, SetShape, UniqueMapShape,
};
