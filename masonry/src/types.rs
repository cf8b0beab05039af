use alloc::vec::Vec;

/// Intrinsic dimensions of an item's source media, fixed at creation.
///
/// Only the ratio matters to the layout; the absolute values are whatever the
/// upstream data source reported (typically pixels).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceDims {
    pub width: u32,
    pub height: u32,
}

impl SourceDims {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Both dimensions strictly positive.
    pub const fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// `height / width`. Callers must check [`Self::is_valid`] first; a zero
    /// width would divide by zero.
    pub(crate) fn ratio(&self) -> f64 {
        self.height as f64 / self.width as f64
    }
}

/// One renderable unit in a masonry collection, as seeded by the upstream
/// data source.
///
/// `key` is the stable diffing identity. `payload` is opaque display metadata
/// (title, image URL, ...) that the engine passes through untouched. Items are
/// never mutated by a layout pass; derived heights live in
/// [`LayoutSnapshot`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridItem<K, P = ()> {
    pub key: K,
    pub dims: SourceDims,
    pub payload: P,
}

impl<K> GridItem<K> {
    /// Creates an item with no payload.
    pub fn new(key: K, dims: SourceDims) -> Self {
        Self {
            key,
            dims,
            payload: (),
        }
    }
}

impl<K, P> GridItem<K, P> {
    pub fn with_payload(key: K, dims: SourceDims, payload: P) -> Self {
        Self { key, dims, payload }
    }
}

/// The derived layout result for one item at a specific column width.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCell<K> {
    pub key: K,
    /// Position of the source item in the seeded collection.
    pub index: usize,
    /// Columns this cell occupies, clamped to `[1, column_count]`.
    pub span: u32,
    /// Aspect-preserving display height in layout units. Unrounded;
    /// pixel-snapping belongs to the rendering boundary.
    pub height: f64,
}

/// An immutable snapshot of a collection's layout at one trigger.
///
/// Snapshots are published behind `Arc` and never mutated afterwards, so a
/// consumer holding an older snapshot can never observe a torn update.
/// `epoch` increases strictly per engine; presenters wanting last-write-wins
/// semantics keep the snapshot with the highest epoch (see the
/// `masonry-adapter` crate).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutSnapshot<K> {
    pub epoch: u64,
    /// The viewport width this snapshot was computed for.
    pub viewport_width: f64,
    /// The shared column width derived from `viewport_width`.
    pub column_width: f64,
    pub column_count: u32,
    pub cells: Vec<GridCell<K>>,
    /// Keys of items excluded for invalid source dimensions. One malformed
    /// item never blanks the whole collection.
    pub skipped: Vec<K>,
}

impl<K> LayoutSnapshot<K> {
    pub(crate) fn empty() -> Self {
        Self {
            epoch: 0,
            viewport_width: 0.0,
            column_width: 0.0,
            column_count: 0,
            cells: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }
}
