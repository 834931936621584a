//! Scrollbars synthesized for overflowing frames.
//!
//! A [`ScrollBar`] is not a widget: it is derived from a frame's
//! [`ScrollState`] whenever it is drawn or hit-tested, never enters the
//! tree and never takes focus. A vertical bar sits on the east edge of the
//! visible window, a horizontal one on the south edge.
//!
//! # Components
//!
//! - **Track**: the strip the thumb moves along
//! - **Thumb**: sized to the visible share of the content and placed at
//!   the current offset

use trellis_render::{DrawCommand, Point, Rect};
use trellis_style::Theme;

use crate::widget::Axis;
use crate::widget::layout::ScrollState;

/// Smallest thumb length, so the thumb stays grabbable.
const MIN_THUMB: f32 = 10.0;

/// Part of a scrollbar under a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBarPart {
    /// Track before the thumb (scroll back one page).
    TrackDecrease,
    Thumb,
    /// Track after the thumb (scroll forward one page).
    TrackIncrease,
}

/// One scrollbar of a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollBar {
    /// Scrolling direction: vertical bars move the content up and down.
    pub axis: Axis,
    pub track: Rect,
    view_len: f32,
    content_len: f32,
    offset: f32,
    pad: f32,
}

impl ScrollBar {
    /// The bars a frame shows for `scroll`, given its visible window.
    pub fn for_frame(scroll: &ScrollState, view: Rect, thickness: f32, pad: f32) -> Vec<ScrollBar> {
        let mut bars = Vec::with_capacity(2);
        let content = scroll.content();
        let offset = scroll.offset();
        if scroll.scrolls_vertically() {
            bars.push(ScrollBar {
                axis: Axis::Vertical,
                track: Rect::new(view.right(), view.top(), thickness, view.height()),
                view_len: view.height(),
                content_len: content.height,
                offset: offset.y,
                pad,
            });
        }
        if scroll.scrolls_horizontally() {
            bars.push(ScrollBar {
                axis: Axis::Horizontal,
                track: Rect::new(view.left(), view.bottom(), view.width(), thickness),
                view_len: view.width(),
                content_len: content.width,
                offset: offset.x,
                pad,
            });
        }
        bars
    }

    fn track_len(&self) -> f32 {
        match self.axis {
            Axis::Vertical => self.track.height(),
            Axis::Horizontal => self.track.width(),
        }
    }

    fn overflow(&self) -> f32 {
        (self.content_len - self.view_len).max(0.0)
    }

    fn thumb_len(&self) -> f32 {
        let track = self.track_len();
        if self.content_len <= 0.0 {
            return track;
        }
        (track * self.view_len / self.content_len).max(MIN_THUMB).min(track)
    }

    /// Rect of the thumb, inset by the slider padding.
    pub fn thumb_rect(&self) -> Rect {
        let thumb = self.thumb_len();
        let travel = self.track_len() - thumb;
        let overflow = self.overflow();
        let position = if overflow > 0.0 {
            self.offset / overflow * travel
        } else {
            0.0
        };
        let rect = match self.axis {
            Axis::Vertical => Rect::new(self.track.left(), self.track.top() + position, self.track.width(), thumb),
            Axis::Horizontal => Rect::new(self.track.left() + position, self.track.top(), thumb, self.track.height()),
        };
        rect.inflate(-self.pad, -self.pad)
    }

    /// Which part of the bar is at `pos`.
    pub fn hit_test(&self, pos: Point) -> Option<ScrollBarPart> {
        if !self.track.contains(pos) {
            return None;
        }
        let thumb = self.thumb_rect().inflate(self.pad, self.pad);
        if thumb.contains(pos) {
            return Some(ScrollBarPart::Thumb);
        }
        let before = match self.axis {
            Axis::Vertical => pos.y < thumb.top(),
            Axis::Horizontal => pos.x < thumb.left(),
        };
        Some(if before {
            ScrollBarPart::TrackDecrease
        } else {
            ScrollBarPart::TrackIncrease
        })
    }

    /// Scroll offset that puts the thumb's start at `pos` along the axis.
    pub fn offset_for(&self, pos: f32) -> f32 {
        let thumb = self.thumb_len();
        let travel = self.track_len() - thumb;
        if travel <= 0.0 {
            return 0.0;
        }
        let start = match self.axis {
            Axis::Vertical => self.track.top(),
            Axis::Horizontal => self.track.left(),
        };
        (pos - start).clamp(0.0, travel) / travel * self.overflow()
    }

    /// Length of one page, for clicks on the track.
    #[inline]
    pub fn page(&self) -> f32 {
        self.view_len
    }

    pub fn draw(&self, theme: &Theme, out: &mut Vec<DrawCommand>) {
        out.push(DrawCommand::FillRect {
            rect: self.track,
            color: theme.scrollbar_color,
        });
        out.push(DrawCommand::FillRect {
            rect: self.thumb_rect(),
            color: theme.scrollbar_slider_color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_render::Size;

    fn vertical_bar(offset: f32) -> ScrollBar {
        let mut scroll = ScrollState::default();
        scroll.resolve(Size::new(100.0, 400.0), (Some(120.0), Some(100.0)), 20.0);
        scroll.scroll_to(0.0, offset);
        let bars = ScrollBar::for_frame(&scroll, Rect::new(0.0, 0.0, 100.0, 100.0), 20.0, 0.0);
        assert_eq!(bars.len(), 1);
        bars[0]
    }

    #[test]
    fn test_thumb_proportional_to_view() {
        let bar = vertical_bar(0.0);
        assert_eq!(bar.track, Rect::new(100.0, 0.0, 20.0, 100.0));
        assert_eq!(bar.thumb_rect(), Rect::new(100.0, 0.0, 20.0, 25.0));
    }

    #[test]
    fn test_thumb_at_end() {
        let bar = vertical_bar(300.0);
        assert_eq!(bar.thumb_rect().bottom(), 100.0);
    }

    #[test]
    fn test_hit_test_and_drag_offset() {
        let bar = vertical_bar(0.0);
        assert_eq!(bar.hit_test(Point::new(110.0, 10.0)), Some(ScrollBarPart::Thumb));
        assert_eq!(bar.hit_test(Point::new(110.0, 90.0)), Some(ScrollBarPart::TrackIncrease));
        assert_eq!(bar.hit_test(Point::new(50.0, 90.0)), None);
        assert_eq!(bar.offset_for(75.0), 300.0);
        assert_eq!(bar.offset_for(37.5), 150.0);
    }
}
