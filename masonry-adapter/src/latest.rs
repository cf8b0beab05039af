use alloc::sync::Arc;

use masonry::LayoutSnapshot;

/// Keeps only the newest snapshot by epoch (last-write-wins).
///
/// When viewport triggers arrive in quick succession, an older pass may be
/// published after a newer one has already been observed. A presenter feeding
/// its display through `observe` will only ever show the snapshot of the most
/// recent trigger, never an interleaving of two.
#[derive(Clone, Debug)]
pub struct LatestSnapshot<K> {
    inner: Option<Arc<LayoutSnapshot<K>>>,
}

impl<K> LatestSnapshot<K> {
    pub fn new() -> Self {
        Self { inner: None }
    }

    /// Accepts `snapshot` only if it is strictly newer than what is held.
    ///
    /// Returns `true` when the snapshot was accepted.
    pub fn observe(&mut self, snapshot: Arc<LayoutSnapshot<K>>) -> bool {
        if let Some(current) = &self.inner {
            if snapshot.epoch <= current.epoch {
                return false;
            }
        }
        self.inner = Some(snapshot);
        true
    }

    pub fn get(&self) -> Option<&Arc<LayoutSnapshot<K>>> {
        self.inner.as_ref()
    }

    pub fn clear(&mut self) {
        self.inner = None;
    }
}

impl<K> Default for LatestSnapshot<K> {
    fn default() -> Self {
        Self::new()
    }
}
