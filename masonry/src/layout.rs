use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::Cell;

use crate::normalize;
use crate::{GridCell, GridItem, GridLayoutOptions, LayoutError, LayoutSnapshot};

/// A headless masonry layout engine for one logical collection.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter drives it by feeding viewport-width observations and item
///   collections.
/// - Results are published as immutable [`LayoutSnapshot`]s.
///
/// Recomputation is edge-triggered: [`Self::set_viewport_width`] runs at most
/// one full layout pass per distinct width. Each pass derives a single shared
/// column width, recomputes every item's aspect-preserving height through
/// [`crate::normalize::scaled_height`], and publishes a fresh snapshot;
/// previously published snapshots are never touched. Collections are
/// independent — one engine per category, recomputable in any order.
///
/// For presenter-side placement (the balanced shortest-column-first packer),
/// selection state, and multi-category control, see the `masonry-adapter`
/// crate.
#[derive(Clone, Debug)]
pub struct GridLayout<K, P = ()> {
    options: GridLayoutOptions<K, P>,
    items: Arc<[GridItem<K, P>]>,
    /// Validated `(viewport_width, column_width)`, committed together so a
    /// layout pass never has to re-derive (and can never fail mid-pass).
    geometry: Option<(f64, f64)>,
    snapshot: Arc<LayoutSnapshot<K>>,
    epoch: u64,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl<K: Clone, P> GridLayout<K, P> {
    /// Creates a new engine from options.
    ///
    /// If `options.initial_viewport_width` is set and valid, an initial
    /// snapshot is computed immediately; an invalid initial width is logged
    /// and ignored, leaving the engine waiting for the first real viewport
    /// observation.
    pub fn new(mut options: GridLayoutOptions<K, P>) -> Self {
        options.column_count = options.column_count.max(1);
        mdebug!(
            column_count = options.column_count,
            outer_padding = options.outer_padding,
            gutter = options.gutter,
            "GridLayout::new"
        );
        let mut v = Self {
            options,
            items: Arc::from(Vec::new()),
            geometry: None,
            snapshot: Arc::new(LayoutSnapshot::empty()),
            epoch: 0,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        };
        if let Some(width) = v.options.initial_viewport_width {
            match v.derive_column_width(width, &v.options) {
                Ok(cw) => {
                    v.geometry = Some((width, cw));
                    v.republish();
                }
                Err(_) => {
                    mwarn!(width, "initial viewport width ignored: not layoutable");
                }
            }
        }
        v
    }

    pub fn options(&self) -> &GridLayoutOptions<K, P> {
        &self.options
    }

    /// Replaces the whole option set.
    ///
    /// Geometry changes are validated against the current viewport width
    /// before anything is committed; on error the engine is left untouched.
    pub fn set_options(&mut self, mut options: GridLayoutOptions<K, P>) -> Result<(), LayoutError> {
        options.column_count = options.column_count.max(1);
        let geometry_changed = options.column_count != self.options.column_count
            || options.outer_padding != self.options.outer_padding
            || options.gutter != self.options.gutter;
        let policy_changed = !Arc::ptr_eq(&options.span_policy, &self.options.span_policy);

        if geometry_changed {
            if let Some((width, _)) = self.geometry {
                let cw = self.derive_column_width(width, &options)?;
                self.geometry = Some((width, cw));
            }
        }
        self.options = options;
        mtrace!(
            column_count = self.options.column_count,
            geometry_changed,
            policy_changed,
            "GridLayout::set_options"
        );

        if geometry_changed || policy_changed {
            self.republish();
        }
        self.notify();
        Ok(())
    }

    /// Clones the current options, applies `f`, then delegates to
    /// [`Self::set_options`].
    pub fn update_options(
        &mut self,
        f: impl FnOnce(&mut GridLayoutOptions<K, P>),
    ) -> Result<(), LayoutError> {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next)
    }

    pub fn set_column_count(&mut self, column_count: u32) -> Result<(), LayoutError> {
        self.update_options(|o| o.column_count = column_count.max(1))
    }

    pub fn set_gutter(&mut self, gutter: f64) -> Result<(), LayoutError> {
        self.update_options(|o| o.gutter = gutter)
    }

    pub fn set_outer_padding(&mut self, outer_padding: f64) -> Result<(), LayoutError> {
        self.update_options(|o| o.outer_padding = outer_padding)
    }

    pub fn set_span_policy(
        &mut self,
        span_policy: impl Fn(&GridItem<K, P>, usize) -> u32 + Send + Sync + 'static,
    ) {
        self.options.span_policy = Arc::new(span_policy);
        self.republish();
        self.notify();
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Self, &LayoutSnapshot<K>) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    /// Seeds or replaces the item collection.
    ///
    /// Membership is immutable during a layout pass; replacing it counts as a
    /// new trigger. If a viewport width is already known, the collection is
    /// laid out immediately.
    pub fn set_items(&mut self, items: impl IntoIterator<Item = GridItem<K, P>>) {
        self.items = items.into_iter().collect();
        mdebug!(count = self.items.len(), "GridLayout::set_items");
        self.republish();
        self.notify();
    }

    pub fn items(&self) -> &[GridItem<K, P>] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&GridItem<K, P>> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The width this engine last laid out for, if any.
    pub fn viewport_width(&self) -> Option<f64> {
        self.geometry.map(|(w, _)| w)
    }

    /// The shared column width derived from the current viewport width.
    pub fn column_width(&self) -> Option<f64> {
        self.geometry.map(|(_, cw)| cw)
    }

    /// Number of layout passes published so far.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Observes a viewport width (rotation, window resize).
    ///
    /// Edge-triggered: an unchanged width is a no-op that neither recomputes
    /// nor notifies, and returns `Ok(false)`. A new width derives the shared
    /// column width, recomputes the full collection, publishes the snapshot,
    /// and returns `Ok(true)`. On error (non-finite width, or padding
    /// consuming the whole viewport) the previous snapshot stays in place.
    pub fn set_viewport_width(&mut self, width: f64) -> Result<bool, LayoutError> {
        if let Some((current, _)) = self.geometry {
            if current == width {
                return Ok(false);
            }
        }
        let cw = self.derive_column_width(width, &self.options)?;
        mtrace!(width, column_width = cw, "GridLayout::set_viewport_width");
        self.geometry = Some((width, cw));
        self.republish();
        self.notify();
        Ok(true)
    }

    /// The most recently published snapshot.
    ///
    /// Before the first layout pass this is an empty snapshot with epoch 0.
    pub fn snapshot(&self) -> Arc<LayoutSnapshot<K>> {
        Arc::clone(&self.snapshot)
    }

    /// Visits every cell of the current snapshot without allocating.
    pub fn for_each_cell(&self, mut f: impl FnMut(&GridCell<K>)) {
        for cell in &self.snapshot.cells {
            f(cell);
        }
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// Recommended when an adapter seeds items and applies a viewport width
    /// together: without batching each setter fires `on_change`, which can be
    /// expensive if the callback drives rendering.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    fn derive_column_width(
        &self,
        viewport_width: f64,
        options: &GridLayoutOptions<K, P>,
    ) -> Result<f64, LayoutError> {
        normalize::column_width(
            viewport_width,
            options.total_horizontal_padding(),
            options.column_count,
        )
    }

    /// Runs one layout pass over the full collection and publishes it.
    ///
    /// No-op until a viewport width has been committed: there is nothing to
    /// lay out against yet, and epoch counts actual passes.
    fn republish(&mut self) {
        let Some((viewport_width, column_width)) = self.geometry else {
            return;
        };
        self.epoch += 1;

        let column_count = self.options.column_count;
        let mut cells = Vec::with_capacity(self.items.len());
        let mut skipped = Vec::new();
        for (index, item) in self.items.iter().enumerate() {
            let span = (self.options.span_policy)(item, index).clamp(1, column_count);
            let width = normalize::span_width(column_width, self.options.gutter, span);
            match normalize::scaled_height(item.dims, width) {
                Ok(height) => cells.push(GridCell {
                    key: item.key.clone(),
                    index,
                    span,
                    height,
                }),
                Err(_) => {
                    mwarn!(
                        index,
                        source_width = item.dims.width,
                        source_height = item.dims.height,
                        "item excluded from layout: invalid source dimensions"
                    );
                    skipped.push(item.key.clone());
                }
            }
        }

        mdebug!(
            epoch = self.epoch,
            cells = cells.len(),
            skipped = skipped.len(),
            column_width,
            "layout pass published"
        );
        self.snapshot = Arc::new(LayoutSnapshot {
            epoch: self.epoch,
            viewport_width,
            column_width,
            column_count,
            cells,
            skipped,
        });
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self, &self.snapshot);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }
}
