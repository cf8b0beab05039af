use alloc::sync::Arc;
use alloc::vec::Vec;

use masonry::{GridItem, GridLayout, GridLayoutOptions, LayoutError, LayoutSnapshot};

use crate::{GridKey, Selection};

/// The events a tabbed masonry feed reacts to.
#[derive(Clone, Debug)]
pub enum FeedEvent<K, P = ()> {
    /// The available width changed (device rotation, window resize).
    ViewportWidth(f64),
    /// The user activated a tab. Out-of-range indexes clamp to the last tab.
    SelectTab(usize),
    /// The user toggled an item in or out of the selection set.
    ToggleSelection(K),
    ClearSelection,
    /// The upstream data source (re)loaded one category's items.
    ReplaceItems {
        category: usize,
        items: Vec<GridItem<K, P>>,
    },
}

/// A framework-neutral controller for a tabbed multi-category masonry feed.
///
/// Owns one independent [`GridLayout`] per category plus the view-local state
/// a feed screen carries (active tab index, selection set). All of it is
/// re-derived deterministically from observed events: [`Self::apply`] is an
/// explicit `(State, Event) -> State` transition, not ambient mutable fields
/// scattered across a UI tree.
#[derive(Clone, Debug)]
pub struct FeedController<K, P = ()> {
    layouts: Vec<GridLayout<K, P>>,
    active: usize,
    selection: Selection<K>,
}

impl<K: GridKey, P> FeedController<K, P> {
    /// Creates a controller with `categories` independent layouts, each
    /// configured from a clone of `options`.
    pub fn new(categories: usize, options: GridLayoutOptions<K, P>) -> Self {
        let categories = categories.max(1);
        Self {
            layouts: (0..categories)
                .map(|_| GridLayout::new(options.clone()))
                .collect(),
            active: 0,
            selection: Selection::new(),
        }
    }

    pub fn categories(&self) -> usize {
        self.layouts.len()
    }

    pub fn active_tab(&self) -> usize {
        self.active
    }

    pub fn layout(&self, category: usize) -> Option<&GridLayout<K, P>> {
        self.layouts.get(category)
    }

    pub fn layout_mut(&mut self, category: usize) -> Option<&mut GridLayout<K, P>> {
        self.layouts.get_mut(category)
    }

    pub fn active_layout(&self) -> &GridLayout<K, P> {
        &self.layouts[self.active]
    }

    pub fn active_snapshot(&self) -> Arc<LayoutSnapshot<K>> {
        self.active_layout().snapshot()
    }

    pub fn selection(&self) -> &Selection<K> {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut Selection<K> {
        &mut self.selection
    }

    /// Applies one event to the feed state.
    ///
    /// A viewport-width event fans out to every category; the categories are
    /// mutually independent pure transforms over their own snapshots, so the
    /// order is irrelevant. Each keeps its previous snapshot if the width is
    /// not layoutable for it; the first such error is reported after all
    /// categories have been attempted.
    pub fn apply(&mut self, event: FeedEvent<K, P>) -> Result<(), LayoutError> {
        match event {
            FeedEvent::ViewportWidth(width) => {
                let mut result = Ok(());
                for layout in &mut self.layouts {
                    if let Err(err) = layout.set_viewport_width(width) {
                        if result.is_ok() {
                            result = Err(err);
                        }
                    }
                }
                result
            }
            FeedEvent::SelectTab(index) => {
                self.active = index.min(self.layouts.len() - 1);
                Ok(())
            }
            FeedEvent::ToggleSelection(key) => {
                self.selection.toggle(key);
                Ok(())
            }
            FeedEvent::ClearSelection => {
                self.selection.clear();
                Ok(())
            }
            FeedEvent::ReplaceItems { category, items } => {
                debug_assert!(
                    category < self.layouts.len(),
                    "ReplaceItems for unknown category {category}"
                );
                if let Some(layout) = self.layouts.get_mut(category) {
                    layout.set_items(items);
                }
                Ok(())
            }
        }
    }
}
