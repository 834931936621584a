//! Layout invalidation and deferred recalculation.
//!
//! Changes only mark widgets dirty; nothing is measured until the menu's
//! next update. A dirty widget invalidates the cached measurement of every
//! frame above it, so clean subtrees keep their cached sizes.

use std::collections::HashSet;

use trellis_core::WidgetId;

/// Tracks what the next layout pass must recompute.
#[derive(Debug, Default)]
pub struct LayoutInvalidator {
    /// Widgets whose intrinsic size may have changed.
    dirty: HashSet<WidgetId>,

    /// Every cached measurement is stale (theme or viewport change).
    full_layout_needed: bool,

    /// Positions are stale but sizes are not (scrolling).
    arrange_needed: bool,
}

impl LayoutInvalidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a widget's measurement as stale.
    pub fn invalidate(&mut self, widget_id: WidgetId) {
        self.dirty.insert(widget_id);
    }

    /// Mark every measurement as stale.
    pub fn invalidate_all(&mut self) {
        self.full_layout_needed = true;
    }

    /// Request a re-arrange without re-measuring.
    pub fn request_arrange(&mut self) {
        self.arrange_needed = true;
    }

    #[inline]
    pub fn is_dirty(&self, widget_id: WidgetId) -> bool {
        self.full_layout_needed || self.dirty.contains(&widget_id)
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.full_layout_needed
    }

    /// Whether anything must be re-measured.
    #[inline]
    pub fn needs_measure(&self) -> bool {
        self.full_layout_needed || !self.dirty.is_empty()
    }

    /// Whether a layout pass of any kind is pending.
    #[inline]
    pub fn needs_pass(&self) -> bool {
        self.needs_measure() || self.arrange_needed
    }

    pub fn dirty_widgets(&self) -> impl Iterator<Item = &WidgetId> {
        self.dirty.iter()
    }

    /// Forget a removed widget.
    pub fn clear(&mut self, widget_id: WidgetId) {
        self.dirty.remove(&widget_id);
    }

    pub fn clear_all(&mut self) {
        self.dirty.clear();
        self.full_layout_needed = false;
        self.arrange_needed = false;
    }
}
