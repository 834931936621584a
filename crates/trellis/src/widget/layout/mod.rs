//! Layout engine for the frame tree.
//!
//! This module provides:
//!
//! - [`LayoutInvalidator`]: records what changed since the last pass
//! - [`ScrollState`]: the viewport of an overflowing frame
//! - [`run`]: one complete measure + arrange pass
//!
//! # Passes
//!
//! The engine runs inside [`Menu::update`](crate::Menu::update), after all
//! events of the frame have been dispatched, so drawing never observes
//! half-computed geometry:
//!
//! 1. Cached measurements of dirty widgets and all their ancestors are
//!    dropped
//! 2. **Measure** walks the tree bottom-up; clean subtrees answer from
//!    their cache
//! 3. **Arrange** walks the tree top-down from the root's origin
//!
//! Scrolling changes positions only, so it requests an arrange without
//! dropping any measurement.
//!
//! Layout never fails: missing services or images measure as empty.

mod box_layout;
mod invalidation;
mod scroll;

pub use invalidation::LayoutInvalidator;
pub use scroll::ScrollState;

pub(crate) use box_layout::{reveal, view_rect};

use trellis_core::PerfSpan;
use trellis_render::Point;

use crate::widget::{MeasureContext, WidgetTree};

/// Counters from one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutStats {
    /// Widgets whose size was computed rather than read from cache.
    pub measured: usize,
    /// Widgets that were positioned.
    pub arranged: usize,
}

/// Run a layout pass if one is pending.
///
/// Returns the pass statistics, or `None` when nothing was dirty.
pub fn run(
    tree: &mut WidgetTree,
    invalidator: &mut LayoutInvalidator,
    cx: &MeasureContext<'_>,
    origin: Point,
    scrollbar_thickness: f32,
) -> Option<LayoutStats> {
    if !invalidator.needs_pass() && !has_stale_widgets(tree) {
        return None;
    }
    let _span = PerfSpan::new("layout");

    if invalidator.is_full() {
        for (_, widget) in tree.iter_mut() {
            widget.base.measured = None;
        }
    } else {
        let mut stale: Vec<_> = invalidator.dirty_widgets().copied().collect();
        stale.extend(
            tree.iter()
                .filter(|(_, w)| w.base.needs_layout)
                .map(|(id, _)| id),
        );
        for id in stale {
            if !tree.contains(id) {
                continue;
            }
            for target in std::iter::once(id).chain(tree.ancestors(id)) {
                if let Some(widget) = tree.get_mut(target) {
                    widget.base.measured = None;
                }
            }
        }
    }

    let mut stats = LayoutStats::default();
    let root = tree.root();
    box_layout::measure(tree, root, cx, scrollbar_thickness, &mut stats);
    box_layout::arrange(tree, root, origin, &mut stats);
    invalidator.clear_all();

    tracing::trace!(
        target: "trellis::layout",
        measured = stats.measured,
        arranged = stats.arranged,
        "layout pass complete"
    );
    Some(stats)
}

/// Widgets changed outside the menu's knowledge, e.g. from a callback.
fn has_stale_widgets(tree: &WidgetTree) -> bool {
    tree.iter().any(|(_, w)| w.base.needs_layout)
}
