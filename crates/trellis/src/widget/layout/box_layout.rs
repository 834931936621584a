//! Box packing: measure and arrange passes for frames.
//!
//! # Measure
//!
//! Bottom-up. A leaf reports its content size plus padding. A frame packs
//! its visible children: along its axis it sums every child's extent plus
//! the child's axis margin, across it takes the largest child extent plus
//! cross margin. A fixed size on an axis replaces the packed extent and
//! turns on scrolling when the content does not fit. Results are cached
//! in the widget until invalidated.
//!
//! # Arrange
//!
//! Top-down. Each frame walks a cursor along its axis, placing every child
//! at the cursor and advancing by the child's extent plus axis margin. The
//! cross position comes from the child's alignment inside the frame's
//! visible cross extent, shifted by its cross margin. A scroll offset
//! moves all children by the same amount.

use trellis_core::WidgetId;
use trellis_render::{Point, Rect, Size};

use super::LayoutStats;
use crate::widget::{MeasureContext, WidgetTree};

/// Measure `id` and its descendants, reusing cached sizes.
pub(crate) fn measure(
    tree: &mut WidgetTree,
    id: WidgetId,
    cx: &MeasureContext<'_>,
    scrollbar_thickness: f32,
    stats: &mut LayoutStats,
) -> Size {
    let Some(widget) = tree.get(id) else {
        return Size::ZERO;
    };
    if let Some(size) = widget.base.measured {
        return size;
    }
    stats.measured += 1;

    let padding = widget.base.padding;
    let frame = widget
        .as_frame()
        .map(|f| (f.axis, f.children.clone(), f.width, f.height));

    let size = match frame {
        None => widget
            .content_size(cx)
            .clamp_non_negative()
            .expand(padding.horizontal(), padding.vertical()),
        Some((axis, children, width, height)) => {
            let mut main = 0.0f32;
            let mut cross = 0.0f32;
            for child in children {
                let Some(margin) = tree.get(child).filter(|c| c.base.visible).map(|c| c.base.margin)
                else {
                    continue;
                };
                let child_size = measure(tree, child, cx, scrollbar_thickness, stats);
                main += axis.main(child_size) + axis.margin_main(margin);
                cross = cross.max(axis.cross_of(child_size) + axis.margin_cross(margin));
            }
            let packed = axis.make_size(main.max(0.0), cross.max(0.0));

            let inner_fixed = (
                width.map(|w| (w - padding.horizontal()).max(0.0)),
                height.map(|h| (h - padding.vertical()).max(0.0)),
            );
            let Some(frame) = tree.get_mut(id).and_then(|w| w.as_frame_mut()) else {
                return Size::ZERO;
            };
            frame.packed = packed;
            frame
                .scroll
                .resolve(packed, inner_fixed, scrollbar_thickness)
                .expand(padding.horizontal(), padding.vertical())
        }
    };

    tracing::trace!(target: "trellis::layout", widget = ?id, ?size, "measured");
    if let Some(widget) = tree.get_mut(id) {
        widget.base.measured = Some(size);
    }
    size
}

/// Place `id` with its top-left corner at `origin`, then its children.
pub(crate) fn arrange(tree: &mut WidgetTree, id: WidgetId, origin: Point, stats: &mut LayoutStats) {
    let Some(widget) = tree.get_mut(id) else {
        return;
    };
    stats.arranged += 1;

    let size = widget.base.measured.unwrap_or(Size::ZERO);
    widget.base.rect = Rect::from_origin_size(origin, size);
    widget.base.needs_layout = false;

    let padding = widget.base.padding;
    let Some(frame) = widget.as_frame() else {
        return;
    };
    let axis = frame.axis;
    let view = frame.scroll.view();
    let offset = frame.scroll.offset();
    let children = frame.children.clone();

    // Centering only applies while the content fits on the main axis
    let mut cursor = if frame.center_content {
        ((axis.main(view) - axis.main(frame.packed)) / 2.0).max(0.0)
    } else {
        0.0
    };

    let inner = Point::new(origin.x + padding.left - offset.x, origin.y + padding.top - offset.y);
    let cross_available = axis.cross_of(view);

    for child in children {
        let Some(child_widget) = tree.get(child) else {
            continue;
        };
        let child_size = child_widget.base.measured.unwrap_or(Size::ZERO);
        let margin = child_widget.base.margin;
        let alignment = child_widget.base.alignment;

        if !child_widget.base.visible {
            let at = axis.make_point(cursor, 0.0);
            for hidden_id in tree.subtree(child) {
                if let Some(hidden) = tree.get_mut(hidden_id) {
                    hidden.base.rect = Rect::new(inner.x + at.x, inner.y + at.y, 0.0, 0.0);
                    hidden.base.needs_layout = false;
                }
            }
            continue;
        }

        let cross = alignment.offset(cross_available, axis.cross_of(child_size))
            + axis.margin_cross(margin);
        let at = axis.make_point(cursor, cross);
        arrange(tree, child, Point::new(inner.x + at.x, inner.y + at.y), stats);

        cursor += axis.main(child_size) + axis.margin_main(margin);
    }
}

/// The absolute rect of a frame's visible window, excluding scrollbars.
pub(crate) fn view_rect(tree: &WidgetTree, frame: WidgetId) -> Option<Rect> {
    let widget = tree.get(frame)?;
    let view = widget.as_frame()?.scroll.view();
    let content = widget.base.content_rect();
    Some(Rect::new(content.left(), content.top(), view.width, view.height))
}

/// Scroll every scrollable ancestor of `id` so that it becomes visible.
///
/// Works on the current geometry; returns whether any offset changed, in
/// which case the tree needs a re-arrange.
pub(crate) fn reveal(tree: &mut WidgetTree, id: WidgetId) -> bool {
    let Some(mut target) = tree.get(id).map(|w| w.base.rect) else {
        return false;
    };
    let mut changed = false;

    for ancestor in tree.ancestors(id) {
        let Some(view) = view_rect(tree, ancestor) else {
            continue;
        };
        let Some(frame) = tree.get_mut(ancestor).and_then(|w| w.as_frame_mut()) else {
            continue;
        };
        if !frame.scroll.is_scrollable() {
            continue;
        }

        let dx = axis_delta(target.left(), target.right(), view.left(), view.right());
        let dy = axis_delta(target.top(), target.bottom(), view.top(), view.bottom());
        let before = frame.scroll.offset();
        if frame.scroll.scroll_by(dx, dy) {
            let after = frame.scroll.offset();
            target = target.offset(before.x - after.x, before.y - after.y);
            changed = true;
        }
    }

    if changed {
        tracing::trace!(target: "trellis::layout", widget = ?id, "scrolled into view");
    }
    changed
}

/// Scroll delta that brings `[start, end)` inside `[view_start, view_end)`.
///
/// Items larger than the window are aligned to its start.
fn axis_delta(start: f32, end: f32, view_start: f32, view_end: f32) -> f32 {
    if start < view_start || end - start > view_end - view_start {
        start - view_start
    } else if end > view_end {
        end - view_end
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_delta() {
        assert_eq!(axis_delta(10.0, 20.0, 0.0, 100.0), 0.0);
        assert_eq!(axis_delta(90.0, 120.0, 0.0, 100.0), 20.0);
        assert_eq!(axis_delta(-15.0, 5.0, 0.0, 100.0), -15.0);
        // Taller than the window: align to the start
        assert_eq!(axis_delta(50.0, 300.0, 0.0, 100.0), 50.0);
    }
}
