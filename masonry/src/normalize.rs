//! Pure dimension-normalization math.
//!
//! These functions are deterministic and side-effect free; the engine in
//! [`crate::GridLayout`] is a thin trigger layer over them. No rounding
//! happens here — snapping to whole pixels is a rendering concern, and doing
//! it per pass would compound error across recomputes triggered by width
//! jitter.

use crate::{LayoutError, SourceDims};

/// Scales `dims` to a target `column_width`, preserving the source aspect
/// ratio exactly: `height = (dims.height / dims.width) * column_width`.
///
/// Rejects zero source dimensions and non-finite or non-positive column
/// widths instead of producing `NaN`/`Infinity`.
pub fn scaled_height(dims: SourceDims, column_width: f64) -> Result<f64, LayoutError> {
    if !dims.is_valid() {
        return Err(LayoutError::InvalidDimension {
            width: dims.width,
            height: dims.height,
        });
    }
    if !column_width.is_finite() || column_width <= 0.0 {
        return Err(LayoutError::InvalidColumnWidth(column_width));
    }
    Ok(dims.ratio() * column_width)
}

/// Derives the shared column width for a viewport:
/// `(viewport_width - total_padding) / column_count`.
///
/// `total_padding` is outer padding plus inter-column gutters. Fails when the
/// result would not be strictly positive.
pub fn column_width(
    viewport_width: f64,
    total_padding: f64,
    column_count: u32,
) -> Result<f64, LayoutError> {
    debug_assert!(column_count > 0, "column_count must be >= 1");
    if !viewport_width.is_finite() || !total_padding.is_finite() {
        return Err(LayoutError::InvalidColumnWidth(viewport_width));
    }
    let usable = viewport_width - total_padding;
    if usable <= 0.0 || column_count == 0 {
        return Err(LayoutError::ViewportTooNarrow {
            viewport_width,
            total_padding,
            column_count,
        });
    }
    Ok(usable / column_count as f64)
}

/// The effective width of a cell spanning `span` columns: the spanned columns
/// plus the gutters between them.
pub fn span_width(column_width: f64, gutter: f64, span: u32) -> f64 {
    span as f64 * column_width + span.saturating_sub(1) as f64 * gutter
}
