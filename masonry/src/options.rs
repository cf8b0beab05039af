use alloc::sync::Arc;

use crate::layout::GridLayout;
use crate::{GridItem, LayoutSnapshot};

/// A callback fired when the engine publishes a new layout snapshot.
///
/// The second argument is the snapshot that was just published.
pub type OnChangeCallback<K, P> = Arc<dyn Fn(&GridLayout<K, P>, &LayoutSnapshot<K>) + Send + Sync>;

/// Declares how many grid columns an item occupies.
///
/// Evaluated once per item per layout pass. Must be a pure function of the
/// item (and optionally its index) — no mutable external state — so that
/// recomputation stays deterministic. Results are clamped to
/// `[1, column_count]` by the engine.
pub type SpanPolicy<K, P> = Arc<dyn Fn(&GridItem<K, P>, usize) -> u32 + Send + Sync>;

/// Configuration for [`crate::GridLayout`].
///
/// Cheap to clone: callbacks are stored in `Arc`s so adapters can tweak a few
/// fields and call `GridLayout::set_options` without reallocating closures.
pub struct GridLayoutOptions<K, P = ()> {
    /// Fixed number of grid columns. Clamped to at least 1.
    pub column_count: u32,

    /// Total outer horizontal padding (left + right), in layout units.
    pub outer_padding: f64,

    /// Horizontal space between adjacent columns.
    pub gutter: f64,

    /// Per-item column span. Defaults to `1` for every item (single-column
    /// masonry cells).
    pub span_policy: SpanPolicy<K, P>,

    /// When set, the engine computes an initial snapshot at this width during
    /// `GridLayout::new` instead of waiting for the first viewport
    /// observation.
    pub initial_viewport_width: Option<f64>,

    /// Optional callback fired when a new snapshot is published.
    pub on_change: Option<OnChangeCallback<K, P>>,
}

impl<K, P> Clone for GridLayoutOptions<K, P> {
    fn clone(&self) -> Self {
        Self {
            column_count: self.column_count,
            outer_padding: self.outer_padding,
            gutter: self.gutter,
            span_policy: Arc::clone(&self.span_policy),
            initial_viewport_width: self.initial_viewport_width,
            on_change: self.on_change.clone(),
        }
    }
}

impl<K, P> Default for GridLayoutOptions<K, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, P> GridLayoutOptions<K, P> {
    /// Creates options for a two-column grid with no padding or gutter and
    /// every item spanning a single column.
    pub fn new() -> Self {
        Self {
            column_count: 2,
            outer_padding: 0.0,
            gutter: 0.0,
            span_policy: Arc::new(|_, _| 1),
            initial_viewport_width: None,
            on_change: None,
        }
    }

    pub fn with_column_count(mut self, column_count: u32) -> Self {
        self.column_count = column_count.max(1);
        self
    }

    pub fn with_outer_padding(mut self, outer_padding: f64) -> Self {
        self.outer_padding = outer_padding;
        self
    }

    pub fn with_gutter(mut self, gutter: f64) -> Self {
        self.gutter = gutter;
        self
    }

    pub fn with_span_policy(
        mut self,
        span_policy: impl Fn(&GridItem<K, P>, usize) -> u32 + Send + Sync + 'static,
    ) -> Self {
        self.span_policy = Arc::new(span_policy);
        self
    }

    pub fn with_initial_viewport_width(mut self, width: Option<f64>) -> Self {
        self.initial_viewport_width = width;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&GridLayout<K, P>, &LayoutSnapshot<K>) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    /// Outer padding plus the gutters between columns — everything the
    /// viewport loses before it is split into columns.
    pub fn total_horizontal_padding(&self) -> f64 {
        self.outer_padding + self.gutter * self.column_count.saturating_sub(1) as f64
    }
}

impl<K, P> core::fmt::Debug for GridLayoutOptions<K, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GridLayoutOptions")
            .field("column_count", &self.column_count)
            .field("outer_padding", &self.outer_padding)
            .field("gutter", &self.gutter)
            .field("initial_viewport_width", &self.initial_viewport_width)
            .finish_non_exhaustive()
    }
}
