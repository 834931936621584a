//! Scroll state of an overflowing frame.

use trellis_render::{Point, Size};

/// Tolerance for float comparisons of extents.
const EPSILON: f32 = 0.01;

/// Viewport of a frame whose content may exceed its fixed size.
///
/// The offset is always clamped to `[0, overflow]` on each axis, where
/// overflow is how far the content exceeds the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    offset: Point,
    content: Size,
    view: Size,
    horizontal: bool,
    vertical: bool,
}

impl ScrollState {
    /// Resolve the visible window for `content` inside a frame.
    ///
    /// `fixed` holds the frame's inner extent on each axis that has a fixed
    /// size. An axis without one always fits its content. A scrollbar of
    /// `thickness` is taken off the opposite edge of every overflowing axis,
    /// which may in turn make the other axis overflow.
    ///
    /// Returns the inner size the frame occupies.
    pub fn resolve(
        &mut self,
        content: Size,
        fixed: (Option<f32>, Option<f32>),
        thickness: f32,
    ) -> Size {
        let (fixed_w, fixed_h) = fixed;
        let mut horizontal = false;
        let mut vertical = false;

        let view_for = |horizontal: bool, vertical: bool| {
            Size::new(
                fixed_w.map_or(content.width, |w| w - if vertical { thickness } else { 0.0 }),
                fixed_h.map_or(content.height, |h| h - if horizontal { thickness } else { 0.0 }),
            )
        };

        // Each scrollbar can only add the other one, so this settles quickly
        for _ in 0..3 {
            let view = view_for(horizontal, vertical);
            let h = fixed_w.is_some() && content.width > view.width + EPSILON;
            let v = fixed_h.is_some() && content.height > view.height + EPSILON;
            if h == horizontal && v == vertical {
                break;
            }
            horizontal = h;
            vertical = v;
        }

        self.content = content;
        self.view = view_for(horizontal, vertical).clamp_non_negative();
        self.horizontal = horizontal;
        self.vertical = vertical;
        self.clamp();

        let bar = |on: bool| if on { thickness } else { 0.0 };
        Size::new(
            fixed_w.unwrap_or(content.width + bar(vertical)),
            fixed_h.unwrap_or(content.height + bar(horizontal)),
        )
        .clamp_non_negative()
    }

    /// Current offset, `(0, 0)` when not scrolled.
    #[inline]
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Packed size of the content.
    #[inline]
    pub fn content(&self) -> Size {
        self.content
    }

    /// Size of the visible window, excluding scrollbars.
    #[inline]
    pub fn view(&self) -> Size {
        self.view
    }

    /// How far the content exceeds the window on each axis.
    pub fn overflow(&self) -> Size {
        Size::new(
            if self.horizontal { self.content.width - self.view.width } else { 0.0 },
            if self.vertical { self.content.height - self.view.height } else { 0.0 },
        )
        .clamp_non_negative()
    }

    #[inline]
    pub fn scrolls_horizontally(&self) -> bool {
        self.horizontal
    }

    #[inline]
    pub fn scrolls_vertically(&self) -> bool {
        self.vertical
    }

    #[inline]
    pub fn is_scrollable(&self) -> bool {
        self.horizontal || self.vertical
    }

    /// Scroll to an absolute offset, clamped. Returns whether it moved.
    pub fn scroll_to(&mut self, x: f32, y: f32) -> bool {
        let before = self.offset;
        self.offset = Point::new(x, y);
        self.clamp();
        before != self.offset
    }

    /// Scroll by a delta, clamped. Returns whether it moved.
    pub fn scroll_by(&mut self, dx: f32, dy: f32) -> bool {
        self.scroll_to(self.offset.x + dx, self.offset.y + dy)
    }

    fn clamp(&mut self) {
        let overflow = self.overflow();
        self.offset = Point::new(
            self.offset.x.clamp(0.0, overflow.width),
            self.offset.y.clamp(0.0, overflow.height),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_fits() {
        let mut scroll = ScrollState::default();
        let inner = scroll.resolve(Size::new(100.0, 50.0), (Some(200.0), Some(100.0)), 20.0);
        assert_eq!(inner, Size::new(200.0, 100.0));
        assert!(!scroll.is_scrollable());
        assert_eq!(scroll.overflow(), Size::ZERO);
    }

    #[test]
    fn test_vertical_overflow_takes_scrollbar_width() {
        let mut scroll = ScrollState::default();
        scroll.resolve(Size::new(100.0, 300.0), (Some(200.0), Some(100.0)), 20.0);
        assert!(scroll.scrolls_vertically());
        assert!(!scroll.scrolls_horizontally());
        assert_eq!(scroll.view(), Size::new(180.0, 100.0));
        assert_eq!(scroll.overflow().height, 200.0);
    }

    #[test]
    fn test_scrollbar_can_cause_second_overflow() {
        let mut scroll = ScrollState::default();
        // Width fits only until the vertical bar eats 20 units
        scroll.resolve(Size::new(190.0, 300.0), (Some(200.0), Some(100.0)), 20.0);
        assert!(scroll.scrolls_vertically());
        assert!(scroll.scrolls_horizontally());
        assert_eq!(scroll.view(), Size::new(180.0, 80.0));
    }

    #[test]
    fn test_unfixed_axis_grows_by_scrollbar() {
        let mut scroll = ScrollState::default();
        let inner = scroll.resolve(Size::new(400.0, 30.0), (Some(250.0), None), 20.0);
        assert!(scroll.scrolls_horizontally());
        assert_eq!(inner, Size::new(250.0, 50.0));
        assert_eq!(scroll.view(), Size::new(250.0, 30.0));
    }

    #[test]
    fn test_offset_clamped() {
        let mut scroll = ScrollState::default();
        scroll.resolve(Size::new(100.0, 300.0), (Some(200.0), Some(100.0)), 0.0);
        assert!(scroll.scroll_to(0.0, 1000.0));
        assert_eq!(scroll.offset(), Point::new(0.0, 200.0));
        assert!(scroll.scroll_by(0.0, -500.0));
        assert_eq!(scroll.offset(), Point::ZERO);
        assert!(!scroll.scroll_by(-1.0, 0.0));
    }

    #[test]
    fn test_shrinking_content_reclamps() {
        let mut scroll = ScrollState::default();
        scroll.resolve(Size::new(100.0, 300.0), (Some(200.0), Some(100.0)), 0.0);
        scroll.scroll_to(0.0, 150.0);
        scroll.resolve(Size::new(100.0, 150.0), (Some(200.0), Some(100.0)), 0.0);
        assert_eq!(scroll.offset().y, 50.0);
    }
}
