//! Font description and text measurement.
//!
//! The menu engine never rasterizes text itself. Layout asks a
//! [`TextMetrics`] service for the extent of a string in a given font and
//! the drawing backend is handed the same [`Font`] when the text is drawn.

use serde::{Deserialize, Serialize};

use crate::types::Size;

/// A font face name and pixel size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Family or file name understood by the drawing backend.
    pub name: String,
    /// Size in logical pixels.
    pub size: f32,
}

impl Font {
    /// Create a font.
    pub fn new(name: impl Into<String>, size: f32) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// The same face at a different size.
    pub fn with_size(&self, size: f32) -> Self {
        Self {
            name: self.name.clone(),
            size,
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new("sans-serif", 30.0)
    }
}

/// Measures text for layout.
pub trait TextMetrics {
    /// Extent of a single line of `text` rendered in `font`.
    fn measure(&self, text: &str, font: &Font) -> Size;

    /// Height of one line in `font`.
    fn line_height(&self, font: &Font) -> f32 {
        self.measure("", font).height
    }
}

/// Monospace approximation: every character advances by a fixed fraction of
/// the font size.
///
/// Good enough for headless runs and tests; real backends supply metrics
/// from their rasterizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAdvanceMetrics {
    /// Horizontal advance per character as a fraction of the font size.
    pub advance: f32,
    /// Line height as a fraction of the font size.
    pub line_height: f32,
}

impl FixedAdvanceMetrics {
    /// Create metrics with explicit ratios.
    pub const fn new(advance: f32, line_height: f32) -> Self {
        Self {
            advance,
            line_height,
        }
    }
}

impl Default for FixedAdvanceMetrics {
    fn default() -> Self {
        Self::new(0.5, 1.0)
    }
}

impl TextMetrics for FixedAdvanceMetrics {
    fn measure(&self, text: &str, font: &Font) -> Size {
        let chars = text.chars().count() as f32;
        Size::new(chars * font.size * self.advance, font.size * self.line_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_advance_measure() {
        let metrics = FixedAdvanceMetrics::default();
        let font = Font::new("mono", 20.0);
        assert_eq!(metrics.measure("abcd", &font), Size::new(40.0, 20.0));
        assert_eq!(metrics.measure("", &font), Size::new(0.0, 20.0));
        assert_eq!(metrics.line_height(&font), 20.0);
    }

    #[test]
    fn test_measure_counts_chars_not_bytes() {
        let metrics = FixedAdvanceMetrics::new(1.0, 1.5);
        let font = Font::new("mono", 10.0);
        assert_eq!(metrics.measure("\u{e9}t\u{e9}", &font), Size::new(30.0, 15.0));
    }
}
