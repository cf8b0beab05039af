//! A headless masonry grid layout engine.
//!
//! For presenter-level utilities (column packing, selection, multi-category
//! feeds), see the `masonry-adapter` crate.
//!
//! This crate focuses on the core math needed to drive a multi-column
//! variable-height grid: normalizing heterogeneous source media dimensions
//! into aspect-preserving display heights at a shared column width, and
//! recomputing the whole collection whenever the viewport width changes.
//!
//! It is UI-agnostic. A mobile/TUI/GUI layer is expected to provide:
//! - viewport width observations (rotation, window resize)
//! - the seeded item collection (ids, source dimensions, display payload)
//! - the virtualized presenter that renders published snapshots
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod layout;
pub mod normalize;
mod options;
mod types;


pub use error::LayoutError;
pub use layout::GridLayout;
pub use options::{GridLayoutOptions, OnChangeCallback, SpanPolicy};
pub use types::{GridCell, GridItem, LayoutSnapshot, SourceDims};
