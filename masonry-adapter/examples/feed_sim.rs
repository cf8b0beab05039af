// Example: a three-category tabbed feed — seed synthetic items, rotate the
// device, toggle selections, and pack the active snapshot into columns.
use masonry::{GridItem, GridLayoutOptions, LayoutError, SourceDims};
use masonry_adapter::{FeedController, FeedEvent, pack};

// A fixed table of source presets for variety, the kind of thing a paginated
// backend query would normally supply.
const PRESETS: [(u32, u32); 10] = [
    (200, 300),
    (300, 200),
    (200, 250),
    (250, 200),
    (200, 200),
    (180, 320),
    (320, 180),
    (240, 300),
    (300, 240),
    (220, 280),
];

fn category_items(category: usize, count: usize) -> Vec<GridItem<String>> {
    (0..count)
        .map(|i| {
            let (w, h) = PRESETS[i % PRESETS.len()];
            GridItem::new(format!("cat{category}-{i}"), SourceDims::new(w, h))
        })
        .collect()
}

fn main() -> Result<(), LayoutError> {
    let mut feed = FeedController::new(3, GridLayoutOptions::new().with_outer_padding(32.0));

    for category in 0..3 {
        feed.apply(FeedEvent::ReplaceItems {
            category,
            items: category_items(category, 100),
        })?;
    }

    // First viewport observation lays out all three categories.
    feed.apply(FeedEvent::ViewportWidth(364.0))?;
    feed.apply(FeedEvent::SelectTab(1))?;

    let packed = pack(&feed.active_snapshot(), 0.0, 8.0);
    println!(
        "tab={} cells={} total_height={:.0}",
        feed.active_tab(),
        packed.cells.len(),
        packed.total_height()
    );

    // Rotate: every category recomputes against the new width.
    feed.apply(FeedEvent::ViewportWidth(812.0))?;
    let packed = pack(&feed.active_snapshot(), 0.0, 8.0);
    println!("after rotation total_height={:.0}", packed.total_height());

    // Multi-select a couple of items, then undo one.
    feed.apply(FeedEvent::ToggleSelection("cat1-3".into()))?;
    feed.apply(FeedEvent::ToggleSelection("cat1-5".into()))?;
    feed.apply(FeedEvent::ToggleSelection("cat1-3".into()))?;
    println!("selected={}", feed.selection().len());

    Ok(())
}
