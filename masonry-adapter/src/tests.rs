use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;

use masonry::{GridCell, GridItem, GridLayoutOptions, LayoutSnapshot, SourceDims};

fn snapshot_with_heights(heights: &[f64], column_count: u32) -> LayoutSnapshot<u64> {
    LayoutSnapshot {
        epoch: 1,
        viewport_width: 332.0,
        column_width: 166.0,
        column_count,
        cells: heights
            .iter()
            .enumerate()
            .map(|(i, &height)| GridCell {
                key: i as u64,
                index: i,
                span: 1,
                height,
            })
            .collect(),
        skipped: Vec::new(),
    }
}

fn seeded_items(n: usize) -> Vec<GridItem<u64>> {
    (0..n)
        .map(|i| GridItem::new(i as u64, SourceDims::new(200, 300)))
        .collect()
}

#[test]
fn selection_toggle_is_an_involution() {
    let mut s = Selection::new();
    assert!(s.toggle("a"));
    assert!(s.contains(&"a"));
    assert!(!s.toggle("a"));
    assert!(!s.contains(&"a"));
    assert!(s.is_empty());
}

#[test]
fn selection_accumulates_distinct_keys() {
    let mut s = Selection::new();
    s.toggle(1u64);
    s.toggle(2);
    s.toggle(3);
    s.toggle(2);
    assert_eq!(s.len(), 2);
    assert!(s.contains(&1) && s.contains(&3) && !s.contains(&2));

    s.clear();
    assert!(s.is_empty());
}

#[test]
fn pack_places_shortest_column_first() {
    let snap = snapshot_with_heights(&[100.0, 50.0, 30.0, 40.0], 2);
    let packed = pack(&snap, 0.0, 0.0);

    // 100 -> col 0 (tie, leftmost); 50 -> col 1; 30 -> col 1 (50 < 100);
    // 40 -> col 1 (80 < 100).
    let columns: Vec<u32> = packed.cells.iter().map(|c| c.column).collect();
    assert_eq!(columns, alloc::vec![0, 1, 1, 1]);

    assert_eq!(packed.cells[2].y, 50.0);
    assert_eq!(packed.cells[3].y, 80.0);
    assert_eq!(packed.column_heights, alloc::vec![100.0, 120.0]);
    assert_eq!(packed.total_height(), 120.0);
    assert_eq!(packed.epoch, snap.epoch);
}

#[test]
fn pack_accounts_for_gutter_and_row_gap() {
    let snap = snapshot_with_heights(&[100.0, 50.0, 30.0], 2);
    let packed = pack(&snap, 8.0, 4.0);

    assert_eq!(packed.cells[0].x, 0.0);
    assert_eq!(packed.cells[1].x, 166.0 + 8.0);
    // Third cell stacks under the 50-high one, below its row gap.
    assert_eq!(packed.cells[2].column, 1);
    assert_eq!(packed.cells[2].y, 54.0);
    assert_eq!(packed.cells[0].width, 166.0);
}

#[test]
fn pack_spans_level_the_window() {
    let mut snap = snapshot_with_heights(&[40.0, 10.0, 20.0], 3);
    snap.cells[2].span = 2;
    let packed = pack(&snap, 8.0, 0.0);

    // Columns 1..3 are the lowest contiguous 2-window (max 10 vs max 40).
    let wide = &packed.cells[2];
    assert_eq!(wide.column, 1);
    assert_eq!(wide.y, 10.0);
    assert_eq!(wide.width, 2.0 * 166.0 + 8.0);
    // Both spanned columns end at the same bottom edge.
    assert_eq!(packed.column_heights[1], packed.column_heights[2]);
    assert_eq!(packed.column_heights[1], 30.0);
}

#[test]
fn pack_is_deterministic() {
    let snap = snapshot_with_heights(&[10.0, 20.0, 30.0, 40.0, 50.0], 2);
    assert_eq!(pack(&snap, 4.0, 2.0), pack(&snap, 4.0, 2.0));
}

#[test]
fn latest_snapshot_rejects_stale_epochs() {
    let mut latest = LatestSnapshot::new();
    let newer = Arc::new(snapshot_with_heights(&[10.0], 2));
    let mut older = snapshot_with_heights(&[99.0], 2);
    older.epoch = 0;

    assert!(latest.observe(Arc::clone(&newer)));
    assert!(!latest.observe(Arc::new(older)));
    assert_eq!(latest.get().unwrap().cells[0].height, 10.0);

    // Same epoch republished is also not "newer".
    assert!(!latest.observe(newer));
}

#[test]
fn controller_fans_viewport_width_out_to_all_categories() {
    let mut feed = FeedController::new(3, GridLayoutOptions::<u64>::new());
    for category in 0..3 {
        feed.apply(FeedEvent::ReplaceItems {
            category,
            items: seeded_items(4),
        })
        .unwrap();
    }

    feed.apply(FeedEvent::ViewportWidth(332.0)).unwrap();
    for category in 0..3 {
        let snap = feed.layout(category).unwrap().snapshot();
        assert_eq!(snap.column_width, 166.0);
        assert!(snap.cells.iter().all(|c| c.height == 249.0));
    }

    // Rotation: every category recomputes against the new width.
    feed.apply(FeedEvent::ViewportWidth(364.0)).unwrap();
    for category in 0..3 {
        let snap = feed.layout(category).unwrap().snapshot();
        assert!(snap.cells.iter().all(|c| c.height == 273.0));
    }
}

#[test]
fn controller_clamps_tab_selection() {
    let mut feed = FeedController::new(3, GridLayoutOptions::<u64>::new());
    feed.apply(FeedEvent::SelectTab(1)).unwrap();
    assert_eq!(feed.active_tab(), 1);
    feed.apply(FeedEvent::SelectTab(99)).unwrap();
    assert_eq!(feed.active_tab(), 2);
}

#[test]
fn controller_selection_round_trip() {
    let mut feed = FeedController::new(1, GridLayoutOptions::<u64>::new());
    feed.apply(FeedEvent::ToggleSelection(7)).unwrap();
    feed.apply(FeedEvent::ToggleSelection(9)).unwrap();
    feed.apply(FeedEvent::ToggleSelection(7)).unwrap();
    assert_eq!(feed.selection().len(), 1);
    assert!(feed.selection().contains(&9));

    feed.apply(FeedEvent::ClearSelection).unwrap();
    assert!(feed.selection().is_empty());
}

#[test]
fn controller_active_snapshot_follows_the_tab() {
    let mut feed = FeedController::new(2, GridLayoutOptions::<u64>::new());
    feed.apply(FeedEvent::ReplaceItems {
        category: 0,
        items: seeded_items(1),
    })
    .unwrap();
    feed.apply(FeedEvent::ReplaceItems {
        category: 1,
        items: seeded_items(5),
    })
    .unwrap();
    feed.apply(FeedEvent::ViewportWidth(332.0)).unwrap();

    assert_eq!(feed.active_snapshot().len(), 1);
    feed.apply(FeedEvent::SelectTab(1)).unwrap();
    assert_eq!(feed.active_snapshot().len(), 5);
}

#[test]
fn controller_snapshot_feeds_the_packer() {
    let mut feed = FeedController::new(1, GridLayoutOptions::<u64>::new());
    feed.apply(FeedEvent::ReplaceItems {
        category: 0,
        items: seeded_items(4),
    })
    .unwrap();
    feed.apply(FeedEvent::ViewportWidth(332.0)).unwrap();

    let packed = pack(&feed.active_snapshot(), 0.0, 0.0);
    assert_eq!(packed.cells.len(), 4);
    // Equal heights alternate columns; both columns end up balanced.
    assert_eq!(packed.column_heights[0], packed.column_heights[1]);
    assert_eq!(packed.total_height(), 2.0 * 249.0);
}
