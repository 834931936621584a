//! Alignment and spacing values shared by themes and widgets.

use serde::{Deserialize, Serialize};
use trellis_core::{ConfigurationError, Result};

/// Placement of a widget on its frame's cross axis.
///
/// In a vertical frame this is the horizontal position (left, center,
/// right); in a horizontal frame it is the vertical one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left in a vertical frame, top in a horizontal one.
    #[serde(alias = "left", alias = "top")]
    Start,
    /// Centered.
    #[default]
    Center,
    /// Right in a vertical frame, bottom in a horizontal one.
    #[serde(alias = "right", alias = "bottom")]
    End,
}

impl Alignment {
    /// Offset of an item of length `item` inside a slot of length `available`.
    ///
    /// Oversized items are placed at the start.
    #[inline]
    pub fn offset(self, available: f32, item: f32) -> f32 {
        let free = (available - item).max(0.0);
        match self {
            Alignment::Start => 0.0,
            Alignment::Center => free / 2.0,
            Alignment::End => free,
        }
    }
}

/// Outer offset of a widget.
///
/// Along a frame's packing axis the margin is space reserved after the
/// widget; across it, the margin shifts the widget. Negative values pull
/// neighbours closer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Margin {
    pub x: f32,
    pub y: f32,
}

impl Margin {
    /// No margin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a margin.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Check that both offsets are finite. Negative offsets are allowed.
    pub fn validate(&self) -> Result<()> {
        ConfigurationError::check_finite("margin x", self.x)?;
        ConfigurationError::check_finite("margin y", self.y)?;
        Ok(())
    }
}

impl From<(f32, f32)> for Margin {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Interior inset of a widget, in CSS order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Padding {
    /// No padding.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create padding from each side.
    #[inline]
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same padding on every side.
    #[inline]
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Vertical and horizontal padding.
    #[inline]
    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Total horizontal padding.
    #[inline]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical padding.
    #[inline]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Reject negative sides.
    pub fn validate(&self) -> Result<()> {
        for value in [self.top, self.right, self.bottom, self.left] {
            ConfigurationError::check_non_negative("padding", value)?;
        }
        Ok(())
    }
}

impl From<f32> for Padding {
    fn from(value: f32) -> Self {
        Self::uniform(value)
    }
}

impl From<(f32, f32)> for Padding {
    fn from((vertical, horizontal): (f32, f32)) -> Self {
        Self::symmetric(vertical, horizontal)
    }
}

impl From<(f32, f32, f32, f32)> for Padding {
    fn from((top, right, bottom, left): (f32, f32, f32, f32)) -> Self {
        Self::new(top, right, bottom, left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_offset() {
        assert_eq!(Alignment::Start.offset(100.0, 40.0), 0.0);
        assert_eq!(Alignment::Center.offset(100.0, 40.0), 30.0);
        assert_eq!(Alignment::End.offset(100.0, 40.0), 60.0);
        // Oversized items never get a negative offset
        assert_eq!(Alignment::End.offset(10.0, 40.0), 0.0);
    }

    #[test]
    fn test_padding_forms() {
        assert_eq!(Padding::from(4.0), Padding::new(4.0, 4.0, 4.0, 4.0));
        assert_eq!(Padding::from((2.0, 6.0)).horizontal(), 12.0);
        assert_eq!(Padding::from((1.0, 2.0, 3.0, 4.0)).vertical(), 4.0);
    }

    #[test]
    fn test_margin_validation() {
        assert!(Margin::new(-2.0, 2.0).validate().is_ok());
        assert!(matches!(
            Margin::new(f32::NAN, 0.0).validate(),
            Err(trellis_core::MenuError::Configuration(ConfigurationError::NonFiniteValue {
                what: "margin x",
                ..
            }))
        ));
        assert!(Margin::new(0.0, f32::INFINITY).validate().is_err());
    }

    #[test]
    fn test_padding_validation() {
        assert!(Padding::uniform(0.0).validate().is_ok());
        assert!(Padding::new(1.0, -1.0, 0.0, 0.0).validate().is_err());
    }
}
