/// Errors produced by the layout core.
///
/// Layout math never yields `NaN`/`Infinity`: inputs that would are rejected
/// up front with one of these variants.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// A source dimension is zero. Dimensions are unsigned, so zero is the
    /// only representable invalid value.
    #[error("invalid source dimensions {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// The column width a cell would be scaled to is non-finite or not
    /// strictly positive.
    #[error("invalid column width {0}")]
    InvalidColumnWidth(f64),

    /// The viewport width, minus outer padding and gutters, leaves no
    /// positive column width.
    #[error(
        "viewport width {viewport_width} with total padding {total_padding} leaves no room for {column_count} columns"
    )]
    ViewportTooNarrow {
        viewport_width: f64,
        total_padding: f64,
        column_count: u32,
    },
}
