#[cfg(not(feature = "std"))]
use alloc::collections::BTreeSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::GridKey;

#[cfg(feature = "std")]
type KeySet<K> = HashSet<K>;
#[cfg(not(feature = "std"))]
type KeySet<K> = BTreeSet<K>;

/// A selection set over item keys (e.g. multi-select in a photo grid).
///
/// `toggle` is the whole protocol: a key joins the set when absent and leaves
/// it when present. Pure state, no UI coupling, trivially testable.
#[derive(Clone, Debug)]
pub struct Selection<K> {
    set: KeySet<K>,
}

impl<K: GridKey> Selection<K> {
    pub fn new() -> Self {
        Self { set: KeySet::new() }
    }

    /// Toggles `key` and returns whether it is selected afterwards.
    pub fn toggle(&mut self, key: K) -> bool {
        if self.set.remove(&key) {
            false
        } else {
            self.set.insert(key);
            true
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        self.set.contains(key)
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn clear(&mut self) {
        self.set.clear();
    }

    /// Visits every selected key without allocations. Iteration order is
    /// unspecified.
    pub fn for_each(&self, mut f: impl FnMut(&K)) {
        for key in &self.set {
            f(key);
        }
    }
}

impl<K: GridKey> Default for Selection<K> {
    fn default() -> Self {
        Self::new()
    }
}
