use alloc::vec::Vec;

use masonry::{LayoutSnapshot, normalize};

use crate::GridKey;

/// One cell placed at a concrete position inside the grid's content box.
///
/// `x`/`y` are relative to the content box origin; outer padding is the
/// presenter's concern.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackedCell<K> {
    pub key: K,
    pub index: usize,
    /// Leftmost column this cell occupies.
    pub column: u32,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A fully packed masonry layout for one snapshot.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackedLayout<K> {
    /// Epoch of the snapshot this packing was computed from.
    pub epoch: u64,
    pub cells: Vec<PackedCell<K>>,
    /// Running bottom edge per column, including the trailing row gap.
    pub column_heights: Vec<f64>,
}

impl<K> PackedLayout<K> {
    /// Height of the tallest column.
    pub fn total_height(&self) -> f64 {
        self.column_heights.iter().fold(0.0, |a, &b| a.max(b))
    }
}

/// Packs a snapshot's cells into columns, shortest-column-first.
///
/// Cells are placed in collection order. A single-span cell goes to the
/// currently shortest column (leftmost on ties). A wider cell takes the
/// contiguous window of `span` columns whose tallest member is lowest, and
/// levels every column in that window below it. `gutter` is the horizontal
/// space between columns (matching the engine's option), `row_gap` the
/// vertical space inserted below each placed cell.
///
/// Deterministic: the same snapshot always packs identically.
pub fn pack<K: GridKey>(snapshot: &LayoutSnapshot<K>, gutter: f64, row_gap: f64) -> PackedLayout<K> {
    let count = snapshot.column_count.max(1) as usize;
    let mut heights = alloc::vec![0.0f64; count];
    let mut cells = Vec::with_capacity(snapshot.cells.len());

    for cell in &snapshot.cells {
        let span = cell.span.clamp(1, count as u32) as usize;

        let mut best_start = 0usize;
        let mut best_top = f64::INFINITY;
        for start in 0..=count - span {
            let top = heights[start..start + span]
                .iter()
                .fold(0.0f64, |a, &b| a.max(b));
            if top < best_top {
                best_top = top;
                best_start = start;
            }
        }

        let width = normalize::span_width(snapshot.column_width, gutter, span as u32);
        cells.push(PackedCell {
            key: cell.key.clone(),
            index: cell.index,
            column: best_start as u32,
            x: best_start as f64 * (snapshot.column_width + gutter),
            y: best_top,
            width,
            height: cell.height,
        });

        let bottom = best_top + cell.height + row_gap;
        for h in &mut heights[best_start..best_start + span] {
            *h = bottom;
        }
    }

    PackedLayout {
        epoch: snapshot.epoch,
        cells,
        column_heights: heights,
    }
}
