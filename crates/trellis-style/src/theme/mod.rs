//! Menu themes.
//!
//! A [`Theme`] is plain configuration: every field is public, and a menu
//! takes its own copy at construction time. Customize a theme by cloning a
//! built-in and editing it, or by loading a TOML file that overlays one.
//!
//! ```
//! use trellis_style::Theme;
//!
//! let mut theme = Theme::dark();
//! theme.widget_font.font.size = 24.0;
//! assert!(theme.validate().is_ok());
//! ```
//!
//! # Theme files
//!
//! Missing keys fall back to the built-in named by `extends` (or the
//! default theme):
//!
//! ```toml
//! extends = "blue"
//! background_color = "#102030"
//!
//! [widget_font]
//! color = "#ffffff"
//! ```

mod builtin;

use std::path::Path;

use serde::{Deserialize, Serialize};
use trellis_render::{Color, Font};

use crate::error::{Error, Result};
use crate::font::WidgetFont;
use crate::selection::SelectionEffect;
use crate::spacing::{Alignment, Margin, Padding};

pub use builtin::BUILTIN_NAMES;

/// How the title bar is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleBarStyle {
    /// No title bar; the full viewport holds widgets.
    None,
    /// A filled bar with the title text.
    #[default]
    Simple,
    /// Title text with a rule underneath.
    Underline,
}

/// Visual configuration for a menu and its widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Menu background.
    pub background_color: Color,

    /// Title bar style.
    pub title_bar_style: TitleBarStyle,
    /// Title font.
    pub title_font: Font,
    /// Title text color.
    pub title_font_color: Color,
    /// Title bar fill.
    pub title_background_color: Color,
    /// Inset of the title text inside the bar.
    pub title_padding: Padding,

    /// Default font and colors for widgets.
    pub widget_font: WidgetFont,
    /// Default cross-axis alignment for new widgets.
    pub widget_alignment: Alignment,
    /// Default margin after each widget.
    pub widget_margin: Margin,
    /// Default padding inside each widget.
    pub widget_padding: Padding,
    /// Selection effect copied into each new widget.
    pub widget_selection_effect: SelectionEffect,
    /// Color of the text entry cursor.
    pub cursor_color: Color,

    /// Background of an open dropdown list.
    pub overlay_background_color: Color,
    /// Background of the highlighted dropdown option.
    pub overlay_highlight_color: Color,

    /// Scrollbar width (vertical) or height (horizontal).
    pub scrollbar_thickness: f32,
    /// Scrollbar track color.
    pub scrollbar_color: Color,
    /// Scrollbar slider color.
    pub scrollbar_slider_color: Color,
    /// Gap between track and slider.
    pub scrollbar_slider_pad: f32,
}

impl Default for Theme {
    fn default() -> Self {
        builtin::default_theme()
    }
}

impl Theme {
    /// Look up a built-in theme by name.
    pub fn builtin(name: &str) -> Option<Self> {
        builtin::by_name(name)
    }

    /// Check every numeric field for consistency.
    pub fn validate(&self) -> Result<()> {
        if !(self.title_font.size > 0.0) {
            return Err(Error::invalid_value("title_font.size", "must be positive"));
        }
        if !(self.widget_font.font.size > 0.0) {
            return Err(Error::invalid_value("widget_font.font.size", "must be positive"));
        }
        if !(self.scrollbar_thickness >= 0.0) {
            return Err(Error::invalid_value("scrollbar_thickness", "must not be negative"));
        }
        if !(self.scrollbar_slider_pad >= 0.0) {
            return Err(Error::invalid_value("scrollbar_slider_pad", "must not be negative"));
        }
        self.widget_padding
            .validate()
            .map_err(|e| Error::invalid_value("widget_padding", e.to_string()))?;
        self.title_padding
            .validate()
            .map_err(|e| Error::invalid_value("title_padding", e.to_string()))?;
        self.widget_selection_effect
            .validate()
            .map_err(|e| Error::invalid_value("widget_selection_effect", e.to_string()))?;
        Ok(())
    }

    /// Height of the title bar, zero when the bar is hidden.
    pub fn title_bar_height(&self) -> f32 {
        match self.title_bar_style {
            TitleBarStyle::None => 0.0,
            TitleBarStyle::Simple | TitleBarStyle::Underline => {
                self.title_font.size + self.title_padding.vertical()
            }
        }
    }

    /// Parse a theme from TOML, overlaying the built-in named by `extends`.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let mut overlay: toml::Table = source.parse().map_err(|e| Error::from_toml(&e, source))?;

        let base = match overlay.remove("extends") {
            Some(toml::Value::String(name)) => {
                Self::builtin(&name).ok_or(Error::UnknownTheme(name))?
            }
            Some(other) => {
                return Err(Error::invalid_value(
                    "extends",
                    format!("expected a theme name, found {}", other.type_str()),
                ));
            }
            None => Self::default(),
        };

        let mut merged = toml::Value::try_from(&base)?;
        if let toml::Value::Table(table) = &mut merged {
            merge_tables(table, overlay);
        }

        let theme: Self = merged
            .try_into()
            .map_err(|e: toml::de::Error| Error::from_toml(&e, source))?;
        theme.validate()?;

        tracing::debug!(target: "trellis::style", "loaded theme from TOML");
        Ok(theme)
    }

    /// Read and parse a theme file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&source)
    }

    /// Serialize the complete theme to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}

/// Recursively overlay `overlay` onto `base`; nested tables merge key by key.
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        let toml::Value::Table(incoming) = value else {
            base.insert(key, value);
            continue;
        };
        if let Some(toml::Value::Table(existing)) = base.get_mut(&key) {
            merge_tables(existing, incoming);
            continue;
        }
        base.insert(key, toml::Value::Table(incoming));
    }
}

static_assertions::assert_impl_all!(Theme: Clone, Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtins_validate() {
        for name in BUILTIN_NAMES {
            let theme = Theme::builtin(name).unwrap();
            assert!(theme.validate().is_ok(), "{name} should validate");
        }
        assert!(Theme::builtin("neon").is_none());
    }

    #[test]
    fn test_copy_then_edit_leaves_builtin_untouched() {
        let mut theme = Theme::dark();
        theme.background_color = Color::RED;
        assert_ne!(Theme::dark().background_color, Color::RED);
    }

    #[test]
    fn test_toml_overlay() {
        let theme = Theme::from_toml_str(
            r##"
            extends = "blue"
            background_color = "#102030"

            [widget_font]
            color = "#ffffff"
            "##,
        )
        .unwrap();

        let blue = Theme::blue();
        assert_eq!(theme.background_color, Color::from_rgb8(0x10, 0x20, 0x30));
        assert_eq!(theme.widget_font.color, Color::WHITE);
        // Untouched nested keys keep the base value
        assert_eq!(theme.widget_font.font, blue.widget_font.font);
        assert_eq!(theme.title_background_color, blue.title_background_color);
    }

    #[test]
    fn test_toml_errors() {
        assert!(matches!(
            Theme::from_toml_str("extends = \"neon\""),
            Err(Error::UnknownTheme(_))
        ));
        assert!(matches!(
            Theme::from_toml_str("background_color = \"nope\""),
            Err(Error::Parse { .. })
        ));
        assert!(matches!(
            Theme::from_toml_str("scrollbar_thickness = -1.0"),
            Err(Error::InvalidValue { .. })
        ));
        assert!(matches!(Theme::from_toml_str("= 1"), Err(Error::Parse { line: 1, .. })));
    }

    #[test]
    fn test_toml_roundtrip_via_file() {
        let theme = Theme::solarized();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(theme.to_toml_string().unwrap().as_bytes())
            .unwrap();

        let loaded = Theme::from_toml_file(file.path()).unwrap();
        assert_eq!(loaded, theme);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            Theme::from_toml_file("/nonexistent/theme.toml"),
            Err(Error::Io { .. })
        ));
    }
}
