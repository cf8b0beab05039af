// Example: edge-triggered recomputation across a device rotation.
use masonry::{GridItem, GridLayout, GridLayoutOptions, LayoutError, SourceDims};

fn main() -> Result<(), LayoutError> {
    let mut grid = GridLayout::new(GridLayoutOptions::new().with_on_change(Some(
        |_: &GridLayout<u64>, snap: &masonry::LayoutSnapshot<u64>| {
            println!(
                "published epoch={} column_width={} cells={}",
                snap.epoch,
                snap.column_width,
                snap.cells.len()
            );
        },
    )));

    grid.set_items([GridItem::new(0u64, SourceDims::new(200, 300))]);

    grid.set_viewport_width(332.0)?; // portrait
    let portrait = grid.snapshot();

    grid.set_viewport_width(332.0)?; // duplicate observation: no pass, no publish
    grid.set_viewport_width(364.0)?; // rotate

    println!(
        "portrait height={} landscape height={}",
        portrait.cells[0].height,
        grid.snapshot().cells[0].height
    );
    Ok(())
}
