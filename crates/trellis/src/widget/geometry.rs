//! Axis helpers for box packing.
//!
//! Frames pack children along one [`Axis`]. The helpers here let the
//! layout code work in terms of a *main* and a *cross* extent instead of
//! duplicating every computation for rows and columns.

use trellis_render::{Point, Size};
use trellis_style::Margin;

/// The packing direction of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// Children are placed left to right (a row).
    Horizontal,
    /// Children are placed top to bottom (a column).
    #[default]
    Vertical,
}

impl Axis {
    /// The perpendicular axis.
    #[inline]
    pub fn cross(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Extent of `size` along this axis.
    #[inline]
    pub fn main(self, size: Size) -> f32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    /// Extent of `size` across this axis.
    #[inline]
    pub fn cross_of(self, size: Size) -> f32 {
        self.cross().main(size)
    }

    /// Build a size from main and cross extents.
    #[inline]
    pub fn make_size(self, main: f32, cross: f32) -> Size {
        match self {
            Axis::Horizontal => Size::new(main, cross),
            Axis::Vertical => Size::new(cross, main),
        }
    }

    /// Build a point from main and cross coordinates.
    #[inline]
    pub fn make_point(self, main: f32, cross: f32) -> Point {
        match self {
            Axis::Horizontal => Point::new(main, cross),
            Axis::Vertical => Point::new(cross, main),
        }
    }

    /// Coordinate of `point` along this axis.
    #[inline]
    pub fn coord(self, point: Point) -> f32 {
        match self {
            Axis::Horizontal => point.x,
            Axis::Vertical => point.y,
        }
    }

    /// The margin component consumed along this axis.
    #[inline]
    pub fn margin_main(self, margin: Margin) -> f32 {
        match self {
            Axis::Horizontal => margin.x,
            Axis::Vertical => margin.y,
        }
    }

    /// The margin component that shifts a child across this axis.
    #[inline]
    pub fn margin_cross(self, margin: Margin) -> f32 {
        self.cross().margin_main(margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_and_cross() {
        let size = Size::new(30.0, 10.0);
        assert_eq!(Axis::Horizontal.main(size), 30.0);
        assert_eq!(Axis::Horizontal.cross_of(size), 10.0);
        assert_eq!(Axis::Vertical.main(size), 10.0);
        assert_eq!(Axis::Vertical.cross_of(size), 30.0);
    }

    #[test]
    fn test_make_size_roundtrips() {
        for axis in [Axis::Horizontal, Axis::Vertical] {
            let size = axis.make_size(5.0, 7.0);
            assert_eq!(axis.main(size), 5.0);
            assert_eq!(axis.cross_of(size), 7.0);
        }
    }

    #[test]
    fn test_margin_components() {
        let margin = Margin::new(2.0, 9.0);
        assert_eq!(Axis::Vertical.margin_main(margin), 9.0);
        assert_eq!(Axis::Vertical.margin_cross(margin), 2.0);
        assert_eq!(Axis::Horizontal.margin_main(margin), 2.0);
    }
}
