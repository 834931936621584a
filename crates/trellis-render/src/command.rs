//! Draw commands.
//!
//! Widgets describe their appearance as a list of [`DrawCommand`]s in
//! absolute menu coordinates. The commands are backend agnostic; a
//! [`Surface`](crate::Surface) executes them.

use crate::font::Font;
use crate::types::{Color, Point, Rect};

/// A single drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill a rectangle.
    FillRect { rect: Rect, color: Color },

    /// Outline a rectangle.
    StrokeRect {
        rect: Rect,
        color: Color,
        width: f32,
    },

    /// Straight line segment.
    Line {
        from: Point,
        to: Point,
        color: Color,
        width: f32,
    },

    /// Filled polygon (arrows, markers).
    Polygon { points: Vec<Point>, color: Color },

    /// A single line of text with its top-left corner at `origin`.
    Text {
        text: String,
        origin: Point,
        font: Font,
        color: Color,
    },

    /// An image scaled into `rect` and rotated by `angle` degrees.
    Image {
        path: String,
        rect: Rect,
        angle: f32,
    },

    /// Restrict subsequent drawing to `rect` (intersected with the current clip).
    PushClip(Rect),

    /// Restore the clip active before the matching `PushClip`.
    PopClip,
}

impl DrawCommand {
    /// The text payload, for text commands.
    pub fn text(&self) -> Option<&str> {
        match self {
            DrawCommand::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}
