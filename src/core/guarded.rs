/*!
 * Guarded Container
 * One backing collection behind one reader/writer lock
 */

use super::config::GuardConfig;
use crate::monitoring::CriticalSection;
use crate::shape::Container;
use parking_lot::RwLock;
use std::fmt;
use tracing::trace;

/// Lock mode held for a critical section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockMode {
    /// Reader lock, any number of concurrent holders
    Shared,
    /// Writer lock, exactly one holder
    Exclusive,
}

impl LockMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shared => "shared",
            Self::Exclusive => "exclusive",
        }
    }
}

/// A collection reachable only through lock-scoped closures
///
/// # Access Rules
///
/// - `read` holds the shared lock for the whole closure
/// - `write` holds the exclusive lock for the whole closure
/// - Neither closure can hand out a borrow of the collection: the closure
///   result is not tied to the lock lifetime, so callers get owned data back
///
/// # Re-entrancy
///
/// Calling back into the same `Guarded` from inside a closure deadlocks
/// (`parking_lot` locks are not recursive, and a nested `read` can block
/// behind a queued writer). This is a caller precondition and is not
/// detected at runtime.
///
/// # Identity
///
/// `Guarded` is neither `Clone` nor `Copy`. Share it by reference or through
/// an `Arc`; it can only be moved while nothing borrows it, so the lock and
/// its data are never relocated while contended.
///
/// # Example
///
/// ```
/// use guarded_collections::Guarded;
///
/// let guarded = Guarded::new(vec![1, 2, 3]);
/// let sum: i32 = guarded.read("sum", |v| v.iter().sum());
/// guarded.write("push", |v| v.push(sum));
/// assert_eq!(guarded.snapshot(), vec![1, 2, 3, 6]);
/// ```
pub struct Guarded<C> {
    lock: RwLock<C>,
    config: GuardConfig,
}

impl<C> Guarded<C> {
    /// Guard `container` with the default configuration
    pub fn new(container: C) -> Self {
        Self::with_config(container, GuardConfig::default())
    }

    /// Guard `container` with an explicit configuration
    pub fn with_config(container: C, config: GuardConfig) -> Self {
        Self {
            lock: RwLock::new(container),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// Run `f` under the shared lock
    #[inline]
    pub fn read<R>(&self, operation: &'static str, f: impl FnOnce(&C) -> R) -> R {
        let guard = self.lock.read();
        let _section = self.section(operation, LockMode::Shared);
        f(&guard)
    }

    /// Run `f` under the exclusive lock
    ///
    /// Read-modify-write sequences belong in a single `write` call; composing
    /// a `read` with a later `write` lets other writers interleave.
    #[inline]
    pub fn write<R>(&self, operation: &'static str, f: impl FnOnce(&mut C) -> R) -> R {
        let mut guard = self.lock.write();
        let _section = self.section(operation, LockMode::Exclusive);
        f(&mut guard)
    }

    /// Direct access when the caller owns the guard exclusively
    #[inline]
    pub fn get_mut(&mut self) -> &mut C {
        self.lock.get_mut()
    }

    /// Consume the guard and return the collection
    pub fn into_inner(self) -> C {
        self.lock.into_inner()
    }

    fn section(&self, operation: &'static str, mode: LockMode) -> Option<CriticalSection> {
        trace!(
            container = self.config.name,
            operation = operation,
            mode = mode.as_str(),
            "lock acquired"
        );

        self.config.trace_sections.then(|| {
            CriticalSection::enter(
                self.config.name,
                operation,
                mode,
                self.config.slow_section_threshold,
            )
        })
    }
}

impl<C: Clone> Guarded<C> {
    /// Deep copy of the current contents, taken under the shared lock
    pub fn snapshot(&self) -> C {
        self.read("snapshot", C::clone)
    }
}

impl<C: Container> Guarded<C> {
    pub fn len(&self) -> usize {
        self.read("len", |c| c.len())
    }

    pub fn is_empty(&self) -> bool {
        self.read("is_empty", |c| c.is_empty())
    }

    /// Remove every element
    pub fn clear(&self) {
        self.write("clear", |c| c.clear())
    }
}

impl<C: Default> Default for Guarded<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C> From<C> for Guarded<C> {
    fn from(container: C) -> Self {
        Self::new(container)
    }
}

impl<C: fmt::Debug> fmt::Debug for Guarded<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("Guarded");
        out.field("name", &self.config.name);
        match self.lock.try_read() {
            Some(guard) => out.field("data", &&*guard),
            None => out.field("data", &format_args!("<locked>")),
        };
        out.finish()
    }
}
