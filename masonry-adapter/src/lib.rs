//! Presenter-side utilities for the `masonry` crate.
//!
//! The `masonry` crate is UI-agnostic and focuses on the core math and state.
//! This crate provides small, framework-neutral helpers commonly needed by
//! the layer that actually renders a grid:
//!
//! - Balanced column packing (shortest-column-first placement)
//! - Last-write-wins snapshot holding for out-of-order publishes
//! - Selection-set toggling (multi-select over item keys)
//! - A multi-category feed controller driven by explicit events
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui/mobile
//! bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod key;
mod latest;
mod packer;
mod selection;

#[cfg(test)]
mod tests;

pub use controller::{FeedController, FeedEvent};
pub use key::GridKey;
pub use latest::LatestSnapshot;
pub use packer::{PackedCell, PackedLayout, pack};
pub use selection::Selection;
