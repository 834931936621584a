//! Color entry.
//!
//! A [`ColorInput`] is a text entry restricted to one color notation:
//!
//! - [`ColorFormat::Rgb`]: `r<sep>g<sep>b` with components in `0..=255`
//! - [`ColorFormat::Hex`]: `#rrggbb`; the `#` is inserted automatically
//!
//! Characters that would make the buffer invalid are dropped silently.
//! The value is the parsed color, or [`Rgb::UNSET`] while the entry is
//! incomplete. A swatch of the current color is drawn after the text.

use trellis_core::{ConfigurationError, Result, Rgb, Value};
use trellis_render::{Color, DrawCommand, Point, Rect, Size};

use super::{centered_y, cursor_command, draw_title, text_command, title_gap};
use crate::widget::validator::{HexColorValidator, RgbValidator};
use crate::widget::{
    MeasureContext, Reaction, RenderContext, TextBuffer, ValidationState, Validator, WidgetBase,
    WidgetBehavior, WidgetInput,
};

/// Notation accepted by a [`ColorInput`].
#[derive(Debug, Clone)]
pub enum ColorFormat {
    Rgb(RgbValidator),
    Hex(HexColorValidator),
}

impl ColorFormat {
    /// `r<sep>g<sep>b` notation. Fails for digits, whitespace and `#`.
    pub fn rgb(separator: char) -> Result<Self> {
        RgbValidator::new(separator)
            .map(ColorFormat::Rgb)
            .map_err(|message| ConfigurationError::invalid_option("separator", message).into())
    }

    pub fn hex() -> Self {
        ColorFormat::Hex(HexColorValidator::new())
    }

    fn validate(&self, input: &str) -> ValidationState {
        match self {
            ColorFormat::Rgb(v) => v.validate(input),
            ColorFormat::Hex(v) => v.validate(input),
        }
    }

    fn parse(&self, input: &str) -> Option<Rgb> {
        match self {
            ColorFormat::Rgb(v) => v.parse(input),
            ColorFormat::Hex(v) => v.parse(input),
        }
    }

    fn format(&self, color: Rgb) -> Option<String> {
        match self {
            ColorFormat::Rgb(v) => Some(v.format(color)),
            ColorFormat::Hex(_) => color.to_hex(),
        }
    }

    /// Longest possible entry, for sizing.
    fn widest(&self) -> String {
        match self {
            ColorFormat::Rgb(v) => v.format(Rgb::new(255, 255, 255)),
            ColorFormat::Hex(_) => "#DDDDDD".to_string(),
        }
    }
}

/// A text entry for colors.
#[derive(Debug, Clone)]
pub struct ColorInput {
    format: ColorFormat,
    buffer: TextBuffer,
}

impl ColorInput {
    pub fn new(format: ColorFormat) -> Self {
        Self {
            format,
            buffer: TextBuffer::default(),
        }
    }

    /// Start with a complete color.
    ///
    /// Fails with an invalid-default error unless every component is in
    /// `0..=255`.
    pub fn with_default(mut self, color: Rgb) -> Result<Self> {
        let text = self
            .format
            .format(color)
            .filter(|_| color.is_valid())
            .ok_or_else(|| ConfigurationError::invalid_default("color_input", format!("{color} is not a color")))?;
        self.buffer.set_text(text);
        Ok(self)
    }

    #[inline]
    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.buffer.cursor()
    }

    #[inline]
    pub fn format(&self) -> &ColorFormat {
        &self.format
    }

    /// The entered color, or [`Rgb::UNSET`] while incomplete.
    pub fn color(&self) -> Rgb {
        self.format.parse(self.buffer.text()).unwrap_or(Rgb::UNSET)
    }

    fn insert(&mut self, text: &str) -> Reaction {
        // Hex entries always start with '#'
        let text = match self.format {
            ColorFormat::Hex(_) if self.buffer.cursor() == 0 && !text.starts_with('#') => {
                if self.buffer.text().starts_with('#') {
                    return Reaction::Rejected;
                }
                format!("#{text}")
            }
            _ => text.to_string(),
        };
        let candidate = self.buffer.with_insertion(&text);
        if !self.format.validate(&candidate).is_allowed() {
            return Reaction::Rejected;
        }
        self.buffer.insert(&text);
        Reaction::Changed
    }

    fn remove(&mut self, candidate: Option<String>, apply: fn(&mut TextBuffer) -> bool) -> Reaction {
        match candidate {
            None => Reaction::Consumed,
            Some(candidate) if self.format.validate(&candidate).is_allowed() => {
                apply(&mut self.buffer);
                Reaction::Changed
            }
            Some(_) => Reaction::Rejected,
        }
    }

    fn swatch_size(line_height: f32) -> Size {
        Size::new(line_height, line_height)
    }
}

impl WidgetBehavior for ColorInput {
    fn kind_name(&self) -> &'static str {
        "color_input"
    }

    fn content_size(&self, base: &WidgetBase, cx: &MeasureContext<'_>) -> Size {
        let font = &base.font.font;
        let text = cx.metrics.measure(&self.format.widest(), font);
        let line = cx.metrics.line_height(font);
        let swatch = Self::swatch_size(line);
        let value = Size::new(
            text.width + title_gap(font) + swatch.width,
            text.height.max(swatch.height),
        );
        super::titled_size(base, cx.metrics, value)
    }

    fn render(&self, base: &WidgetBase, cx: &RenderContext<'_>, out: &mut Vec<DrawCommand>) {
        let x = draw_title(base, cx.metrics, out);
        let content = base.content_rect();
        let font = &base.font.font;
        let line = cx.metrics.line_height(font);
        let top = centered_y(content, line);

        if !self.buffer.is_empty() {
            out.push(text_command(base, self.buffer.text(), Point::new(x, top)));
        }
        if base.selected {
            out.push(cursor_command(
                base,
                cx.metrics,
                self.buffer.before_cursor(),
                x,
                cx.theme.cursor_color,
            ));
        }

        let text_width = cx.metrics.measure(&self.format.widest(), font).width;
        let swatch = Self::swatch_size(line);
        let rect = Rect::new(
            x + text_width + title_gap(font),
            centered_y(content, swatch.height),
            swatch.width,
            swatch.height,
        );
        if let Some([r, g, b]) = self.color().to_u8() {
            out.push(DrawCommand::FillRect {
                rect,
                color: Color::from_rgb8(r, g, b),
            });
        }
        out.push(DrawCommand::StrokeRect {
            rect,
            color: base.text_color(),
            width: 1.0,
        });
    }

    fn value(&self) -> Value {
        Value::Color(self.color())
    }

    fn handle_input(&mut self, _base: &WidgetBase, input: &WidgetInput) -> Reaction {
        match input {
            WidgetInput::Text(text) if text.is_empty() => Reaction::Consumed,
            WidgetInput::Text(text) => self.insert(text),
            WidgetInput::Backspace => {
                let candidate = self.buffer.with_backspace();
                self.remove(candidate, TextBuffer::backspace)
            }
            WidgetInput::Delete => {
                let candidate = self.buffer.with_delete();
                self.remove(candidate, TextBuffer::delete)
            }
            WidgetInput::Left => {
                self.buffer.move_left();
                Reaction::Consumed
            }
            WidgetInput::Right => {
                self.buffer.move_right();
                Reaction::Consumed
            }
            WidgetInput::Home => {
                self.buffer.move_home();
                Reaction::Consumed
            }
            WidgetInput::End => {
                self.buffer.move_end();
                Reaction::Consumed
            }
            _ => Reaction::Ignored,
        }
    }

    fn activate(&mut self, _base: &WidgetBase) -> Reaction {
        Reaction::Returned
    }

    fn click(&mut self, _base: &WidgetBase, _pos: Point) -> Reaction {
        Reaction::Consumed
    }

    fn set_value(&mut self, value: &Value) -> std::result::Result<(), String> {
        let Some(color) = value.as_color() else {
            return Err(format!("color_input cannot hold a {}", value.type_name()));
        };
        if color.is_unset() {
            self.buffer.set_text("");
            return Ok(());
        }
        match self.format.format(color).filter(|_| color.is_valid()) {
            Some(text) => {
                self.buffer.set_text(text);
                Ok(())
            }
            None => Err(format!("{color} is not a color")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::WidgetId;
    use trellis_style::{SelectionEffect, WidgetFont};

    fn type_text(input: &mut ColorInput, text: &str) -> Vec<Reaction> {
        let base = WidgetBase::new(
            WidgetId::from_raw(1),
            "Color".into(),
            WidgetFont::default(),
            SelectionEffect::none(),
        );
        text.chars()
            .map(|c| input.handle_input(&base, &WidgetInput::Text(c.to_string())))
            .collect()
    }

    #[test]
    fn test_rgb_entry() {
        let mut input = ColorInput::new(ColorFormat::rgb(',').unwrap());
        type_text(&mut input, "12,34,");
        assert_eq!(input.color(), Rgb::UNSET);
        type_text(&mut input, "56");
        assert_eq!(input.value(), Value::Color(Rgb::new(12, 34, 56)));
    }

    #[test]
    fn test_rgb_rejects_out_of_range_component() {
        let mut input = ColorInput::new(ColorFormat::rgb(',').unwrap());
        let reactions = type_text(&mut input, "256");
        assert_eq!(reactions[2], Reaction::Rejected);
        assert_eq!(input.text(), "25");
    }

    #[test]
    fn test_rgb_rejects_fourth_component() {
        let mut input = ColorInput::new(ColorFormat::rgb(';').unwrap());
        type_text(&mut input, "1;2;3");
        assert_eq!(type_text(&mut input, ";"), vec![Reaction::Rejected]);
        assert_eq!(input.color(), Rgb::new(1, 2, 3));
    }

    #[test]
    fn test_bad_separator() {
        assert!(ColorFormat::rgb('5').is_err());
        assert!(ColorFormat::rgb(' ').is_err());
    }

    #[test]
    fn test_hex_auto_prefix() {
        let mut input = ColorInput::new(ColorFormat::hex());
        type_text(&mut input, "ff8800");
        assert_eq!(input.text(), "#ff8800");
        assert_eq!(input.color(), Rgb::new(255, 136, 0));
        assert_eq!(type_text(&mut input, "1"), vec![Reaction::Rejected]);
    }

    #[test]
    fn test_invalid_default() {
        let input = ColorInput::new(ColorFormat::rgb(',').unwrap()).with_default(Rgb::new(300, 0, 0));
        assert!(input.is_err());
        let input = ColorInput::new(ColorFormat::hex())
            .with_default(Rgb::new(0, 0, 255))
            .unwrap();
        assert_eq!(input.color(), Rgb::new(0, 0, 255));
    }
}
