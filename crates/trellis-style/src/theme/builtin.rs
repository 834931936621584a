//! Built-in themes.

use trellis_render::{Color, Font};

use super::{Theme, TitleBarStyle};
use crate::font::WidgetFont;
use crate::selection::SelectionEffect;
use crate::spacing::{Alignment, Margin, Padding};

/// Names accepted by [`Theme::builtin`].
pub const BUILTIN_NAMES: [&str; 6] = ["default", "dark", "blue", "green", "orange", "solarized"];

pub(super) fn by_name(name: &str) -> Option<Theme> {
    match name {
        "default" => Some(Theme::default()),
        "dark" => Some(Theme::dark()),
        "blue" => Some(Theme::blue()),
        "green" => Some(Theme::green()),
        "orange" => Some(Theme::orange()),
        "solarized" => Some(Theme::solarized()),
        _ => None,
    }
}

/// Colors that distinguish one built-in from another.
struct Palette {
    background: Color,
    title_background: Color,
    title_font: Color,
    widget_font: Color,
    selected: Color,
    scrollbar_slider: Color,
}

fn from_palette(p: Palette) -> Theme {
    let mut selection = SelectionEffect::default();
    selection.set_color(p.selected);

    Theme {
        background_color: p.background,
        title_bar_style: TitleBarStyle::Simple,
        title_font: Font::new("sans-serif", 40.0),
        title_font_color: p.title_font,
        title_background_color: p.title_background,
        title_padding: Padding::symmetric(6.0, 12.0),
        widget_font: WidgetFont {
            font: Font::new("sans-serif", 30.0),
            color: p.widget_font,
            selected_color: p.selected,
            readonly_color: p.widget_font.lerp(p.background, 0.5),
            background: None,
        },
        widget_alignment: Alignment::Center,
        widget_margin: Margin::new(0.0, 4.0),
        widget_padding: Padding::symmetric(4.0, 8.0),
        widget_selection_effect: selection,
        cursor_color: p.widget_font,
        overlay_background_color: p.background.lerp(Color::BLACK, 0.1),
        overlay_highlight_color: p.title_background,
        scrollbar_thickness: 20.0,
        scrollbar_color: p.background.lerp(Color::BLACK, 0.15),
        scrollbar_slider_color: p.scrollbar_slider,
        scrollbar_slider_pad: 0.0,
    }
}

pub(super) fn default_theme() -> Theme {
    from_palette(Palette {
        background: Color::from_rgb8(220, 220, 220),
        title_background: Color::from_rgb8(64, 72, 79),
        title_font: Color::from_rgb8(220, 220, 220),
        widget_font: Color::from_rgb8(70, 70, 70),
        selected: Color::from_rgb8(255, 255, 255),
        scrollbar_slider: Color::from_rgb8(200, 200, 200),
    })
}

impl Theme {
    /// Light gray with a slate title bar.
    pub fn light() -> Self {
        default_theme()
    }

    /// Dark background with light text.
    pub fn dark() -> Self {
        from_palette(Palette {
            background: Color::from_rgb8(40, 41, 35),
            title_background: Color::from_rgb8(47, 48, 51),
            title_font: Color::from_rgb8(215, 215, 215),
            widget_font: Color::from_rgb8(200, 200, 200),
            selected: Color::from_rgb8(255, 255, 255),
            scrollbar_slider: Color::from_rgb8(90, 90, 90),
        })
    }

    /// Pale background with blue accents.
    pub fn blue() -> Self {
        from_palette(Palette {
            background: Color::from_rgb8(228, 230, 246),
            title_background: Color::from_rgb8(62, 149, 195),
            title_font: Color::from_rgb8(228, 230, 246),
            widget_font: Color::from_rgb8(61, 170, 220),
            selected: Color::from_rgb8(100, 62, 132),
            scrollbar_slider: Color::from_rgb8(62, 149, 195),
        })
    }

    /// Muted green.
    pub fn green() -> Self {
        from_palette(Palette {
            background: Color::from_rgb8(186, 214, 177),
            title_background: Color::from_rgb8(125, 121, 114),
            title_font: Color::from_rgb8(228, 230, 246),
            widget_font: Color::from_rgb8(255, 255, 255),
            selected: Color::from_rgb8(125, 121, 114),
            scrollbar_slider: Color::from_rgb8(125, 121, 114),
        })
    }

    /// Saturated orange with white text.
    pub fn orange() -> Self {
        let mut theme = from_palette(Palette {
            background: Color::from_rgb8(228, 100, 36),
            title_background: Color::from_rgb8(170, 65, 50),
            title_font: Color::from_rgb8(255, 255, 255),
            widget_font: Color::from_rgb8(255, 255, 255),
            selected: Color::from_rgb8(0, 0, 0),
            scrollbar_slider: Color::from_rgb8(170, 65, 50),
        });
        theme.title_bar_style = TitleBarStyle::Underline;
        theme
    }

    /// Solarized light.
    pub fn solarized() -> Self {
        from_palette(Palette {
            background: Color::from_rgb8(239, 231, 211),
            title_background: Color::from_rgb8(42, 161, 152),
            title_font: Color::from_rgb8(239, 231, 211),
            widget_font: Color::from_rgb8(102, 122, 130),
            selected: Color::from_rgb8(207, 62, 132),
            scrollbar_slider: Color::from_rgb8(42, 161, 152),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name_matches_constructors() {
        assert_eq!(by_name("dark"), Some(Theme::dark()));
        assert_eq!(by_name("default"), Some(Theme::light()));
        assert_eq!(by_name("Dark"), None);
    }

    #[test]
    fn test_builtins_are_distinct() {
        let backgrounds: Vec<_> = BUILTIN_NAMES
            .iter()
            .filter_map(|name| by_name(name))
            .map(|t| t.background_color)
            .collect();
        for (i, a) in backgrounds.iter().enumerate() {
            for b in &backgrounds[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_selection_color_follows_palette() {
        let theme = Theme::blue();
        assert_eq!(theme.widget_selection_effect.color(), theme.widget_font.selected_color);
    }
}
