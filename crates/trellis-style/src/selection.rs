//! Selection effects drawn around the selected widget.
//!
//! An effect is purely visual. Its margins grow the drawn decoration
//! beyond the widget's rect but never take part in layout.

use serde::{Deserialize, Serialize};
use trellis_core::{ConfigurationError, Result};
use trellis_render::{Color, DrawCommand, Point, Rect};

/// The shape of a selection effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectionKind {
    /// Nothing is drawn.
    None,
    /// Rectangular border around the widget.
    Highlight { border_width: f32 },
    /// Line under the widget.
    Underline { thickness: f32 },
    /// Triangle pointing at the widget from the left.
    LeftArrow { size: f32 },
}

/// Decoration drawn around the selected widget.
///
/// Effects are plain values: clone one to give a widget its own copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionEffect {
    #[serde(flatten)]
    kind: SelectionKind,
    color: Color,
    margin_top: f32,
    margin_left: f32,
    margin_bottom: f32,
    margin_right: f32,
}

impl Default for SelectionEffect {
    fn default() -> Self {
        Self {
            kind: SelectionKind::Highlight { border_width: 1.0 },
            color: Color::WHITE,
            margin_top: 4.0,
            margin_left: 8.0,
            margin_bottom: 4.0,
            margin_right: 8.0,
        }
    }
}

impl SelectionEffect {
    /// Build an effect, rejecting negative margins or stroke sizes.
    pub fn new(kind: SelectionKind, margin_x: f32, margin_y: f32) -> Result<Self> {
        let mut effect = Self {
            kind,
            ..Self::none()
        };
        effect.set_margins(margin_y, margin_x, margin_y, margin_x)?;
        effect.validate()?;
        Ok(effect)
    }

    /// A border around the widget.
    pub fn highlight(border_width: f32, margin_x: f32, margin_y: f32) -> Result<Self> {
        Self::new(SelectionKind::Highlight { border_width }, margin_x, margin_y)
    }

    /// A line under the widget.
    pub fn underline(thickness: f32, margin_x: f32, margin_y: f32) -> Result<Self> {
        Self::new(SelectionKind::Underline { thickness }, margin_x, margin_y)
    }

    /// An arrow to the left of the widget.
    pub fn left_arrow(size: f32, margin_x: f32) -> Result<Self> {
        Self::new(SelectionKind::LeftArrow { size }, margin_x, 0.0)
    }

    /// An effect that draws nothing.
    pub fn none() -> Self {
        Self {
            kind: SelectionKind::None,
            color: Color::WHITE,
            margin_top: 0.0,
            margin_left: 0.0,
            margin_bottom: 0.0,
            margin_right: 0.0,
        }
    }

    #[inline]
    pub fn kind(&self) -> SelectionKind {
        self.kind
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Set the effect color.
    pub fn set_color(&mut self, color: Color) -> &mut Self {
        self.color = color;
        self
    }

    /// Set every margin. Fails without changing anything if one is negative.
    pub fn set_margins(&mut self, top: f32, left: f32, bottom: f32, right: f32) -> Result<&mut Self> {
        ConfigurationError::check_non_negative("selection margin", top)?;
        ConfigurationError::check_non_negative("selection margin", left)?;
        ConfigurationError::check_non_negative("selection margin", bottom)?;
        ConfigurationError::check_non_negative("selection margin", right)?;
        self.margin_top = top;
        self.margin_left = left;
        self.margin_bottom = bottom;
        self.margin_right = right;
        Ok(self)
    }

    /// Make every margin zero.
    pub fn zero_margin(&mut self) -> &mut Self {
        self.margin_top = 0.0;
        self.margin_left = 0.0;
        self.margin_bottom = 0.0;
        self.margin_right = 0.0;
        self
    }

    /// Margins as `(top, left, bottom, right)`.
    #[inline]
    pub fn margin(&self) -> (f32, f32, f32, f32) {
        (
            self.margin_top,
            self.margin_left,
            self.margin_bottom,
            self.margin_right,
        )
    }

    /// Total margin on each axis as `(x, y)`.
    #[inline]
    pub fn xy_margin(&self) -> (f32, f32) {
        (
            self.margin_left + self.margin_right,
            self.margin_top + self.margin_bottom,
        )
    }

    /// Grow `rect` by the margins plus `extra` split evenly on both sides.
    pub fn inflate(&self, rect: Rect, extra: (f32, f32)) -> Rect {
        Rect::new(
            rect.left() - self.margin_left - extra.0 / 2.0,
            rect.top() - self.margin_top - extra.1 / 2.0,
            rect.width() + self.margin_left + self.margin_right + extra.0,
            rect.height() + self.margin_top + self.margin_bottom + extra.1,
        )
    }

    /// Check margins and stroke sizes, for effects read from theme files.
    pub fn validate(&self) -> Result<()> {
        let (top, left, bottom, right) = self.margin();
        for value in [top, left, bottom, right] {
            ConfigurationError::check_non_negative("selection margin", value)?;
        }
        match self.kind {
            SelectionKind::None => {}
            SelectionKind::Highlight { border_width: v }
            | SelectionKind::Underline { thickness: v }
            | SelectionKind::LeftArrow { size: v } => {
                ConfigurationError::check_positive("selection stroke", v)?;
            }
        }
        Ok(())
    }

    /// Draw commands decorating a widget occupying `rect`.
    pub fn draw(&self, rect: Rect) -> Vec<DrawCommand> {
        let outer = self.inflate(rect, (0.0, 0.0));
        match self.kind {
            SelectionKind::None => Vec::new(),
            SelectionKind::Highlight { border_width } => vec![DrawCommand::StrokeRect {
                rect: outer,
                color: self.color,
                width: border_width,
            }],
            SelectionKind::Underline { thickness } => {
                let y = outer.bottom() - thickness / 2.0;
                vec![DrawCommand::Line {
                    from: Point::new(outer.left(), y),
                    to: Point::new(outer.right(), y),
                    color: self.color,
                    width: thickness,
                }]
            }
            SelectionKind::LeftArrow { size } => {
                let tip_x = outer.left();
                let mid_y = rect.center().y;
                vec![DrawCommand::Polygon {
                    points: vec![
                        Point::new(tip_x, mid_y),
                        Point::new(tip_x - size, mid_y - size / 2.0),
                        Point::new(tip_x - size, mid_y + size / 2.0),
                    ],
                    color: self.color,
                }]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_margin_rejected() {
        assert!(SelectionEffect::highlight(1.0, -1.0, 0.0).is_err());
        let mut effect = SelectionEffect::default();
        let before = effect.clone();
        assert!(effect.set_margins(1.0, 1.0, -2.0, 1.0).is_err());
        assert_eq!(effect, before);
    }

    #[test]
    fn test_margins_and_inflate() {
        let mut effect = SelectionEffect::highlight(2.0, 5.0, 3.0).unwrap();
        assert_eq!(effect.margin(), (3.0, 5.0, 3.0, 5.0));
        assert_eq!(effect.xy_margin(), (10.0, 6.0));

        let rect = Rect::new(10.0, 10.0, 100.0, 20.0);
        assert_eq!(effect.inflate(rect, (2.0, 0.0)), Rect::new(4.0, 7.0, 112.0, 26.0));

        effect.zero_margin();
        assert_eq!(effect.inflate(rect, (0.0, 0.0)), rect);
    }

    #[test]
    fn test_copies_are_independent() {
        let base = SelectionEffect::default();
        let mut copy = base.clone();
        copy.set_color(Color::RED);
        assert_ne!(base.color(), copy.color());
    }

    #[test]
    fn test_draw_commands() {
        let rect = Rect::new(0.0, 0.0, 50.0, 10.0);
        assert!(SelectionEffect::none().draw(rect).is_empty());

        let underline = SelectionEffect::underline(2.0, 0.0, 0.0).unwrap();
        assert!(matches!(underline.draw(rect)[0], DrawCommand::Line { .. }));

        let arrow = SelectionEffect::left_arrow(6.0, 4.0).unwrap();
        match &arrow.draw(rect)[0] {
            DrawCommand::Polygon { points, .. } => assert_eq!(points[0], Point::new(-4.0, 5.0)),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
