//! Per-widget font settings.

use serde::{Deserialize, Serialize};
use trellis_core::{ConfigurationError, Result};
use trellis_render::{Color, Font};

/// Font and colors a widget renders its text with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetFont {
    /// Face and size.
    pub font: Font,
    /// Text color when not selected.
    pub color: Color,
    /// Text color while the widget holds the selection.
    pub selected_color: Color,
    /// Text color while the widget is disabled.
    pub readonly_color: Color,
    /// Optional fill behind the widget's rect.
    pub background: Option<Color>,
}

impl Default for WidgetFont {
    fn default() -> Self {
        Self {
            font: Font::default(),
            color: Color::from_rgb8(70, 70, 70),
            selected_color: Color::WHITE,
            readonly_color: Color::from_rgb8(120, 120, 120),
            background: None,
        }
    }
}

impl WidgetFont {
    /// The color to draw text with for the given state.
    pub fn color_for(&self, selected: bool, enabled: bool) -> Color {
        if !enabled {
            self.readonly_color
        } else if selected {
            self.selected_color
        } else {
            self.color
        }
    }

    /// Apply a set of overrides, validating the result.
    ///
    /// Returns `true` if the font face or size changed, which affects layout.
    pub fn apply(&mut self, overrides: &FontOverrides) -> Result<bool> {
        if let Some(size) = overrides.size {
            ConfigurationError::check_positive("font size", size)?;
        }
        if overrides.name.as_deref().is_some_and(str::is_empty) {
            return Err(ConfigurationError::invalid_option("font name", "must not be empty").into());
        }

        let before = self.font.clone();
        if let Some(name) = &overrides.name {
            self.font.name = name.clone();
        }
        if let Some(size) = overrides.size {
            self.font.size = size;
        }
        if let Some(color) = overrides.color {
            self.color = color;
        }
        if let Some(color) = overrides.selected_color {
            self.selected_color = color;
        }
        if let Some(color) = overrides.readonly_color {
            self.readonly_color = color;
        }
        if let Some(background) = overrides.background {
            self.background = background;
        }
        Ok(before != self.font)
    }
}

/// A partial font update. Unset fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontOverrides {
    pub name: Option<String>,
    pub size: Option<f32>,
    pub color: Option<Color>,
    pub selected_color: Option<Color>,
    pub readonly_color: Option<Color>,
    /// `Some(None)` clears the background.
    pub background: Option<Option<Color>>,
}

impl FontOverrides {
    /// Create an empty override set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn selected_color(mut self, color: Color) -> Self {
        self.selected_color = Some(color);
        self
    }

    pub fn readonly_color(mut self, color: Color) -> Self {
        self.readonly_color = Some(color);
        self
    }

    pub fn background(mut self, color: Option<Color>) -> Self {
        self.background = Some(color);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_reports_layout_change() {
        let mut font = WidgetFont::default();
        let changed = font.apply(&FontOverrides::new().color(Color::RED)).unwrap();
        assert!(!changed);
        assert_eq!(font.color, Color::RED);

        let changed = font.apply(&FontOverrides::new().size(12.0)).unwrap();
        assert!(changed);
        assert_eq!(font.font.size, 12.0);
    }

    #[test]
    fn test_apply_rejects_invalid_size() {
        let mut font = WidgetFont::default();
        let before = font.clone();
        assert!(font.apply(&FontOverrides::new().size(0.0).color(Color::RED)).is_err());
        assert_eq!(font, before);
    }

    #[test]
    fn test_color_for_state() {
        let font = WidgetFont::default();
        assert_eq!(font.color_for(true, true), font.selected_color);
        assert_eq!(font.color_for(true, false), font.readonly_color);
        assert_eq!(font.color_for(false, true), font.color);
    }
}
