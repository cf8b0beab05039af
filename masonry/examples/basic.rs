// Example: minimal usage — seed items, observe a width, read the snapshot.
use masonry::{GridItem, GridLayout, GridLayoutOptions, LayoutError, SourceDims};

fn main() -> Result<(), LayoutError> {
    let mut grid = GridLayout::new(GridLayoutOptions::new().with_outer_padding(32.0));

    grid.set_items([
        GridItem::new(0u64, SourceDims::new(200, 300)),
        GridItem::new(1, SourceDims::new(300, 200)),
        GridItem::new(2, SourceDims::new(320, 180)),
        GridItem::new(3, SourceDims::new(180, 320)),
    ]);

    // Device width 364, minus 32 outer padding, split into two columns.
    grid.set_viewport_width(364.0)?;
    println!("column_width={:?}", grid.column_width());
    grid.for_each_cell(|cell| {
        println!("key={} span={} height={:.1}", cell.key, cell.span, cell.height);
    });
    Ok(())
}
