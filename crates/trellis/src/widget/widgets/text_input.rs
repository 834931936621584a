//! Single-line text entry.
//!
//! A [`TextInput`] edits a [`TextBuffer`]. Every edit is checked against
//! the entry's policy before it is applied:
//!
//! - the input type ([`InputType::Integer`] and [`InputType::Float`] only
//!   accept numbers and their partial forms)
//! - the maximum length in characters
//! - the whitelist of valid characters
//! - an optional custom [`Validator`]
//!
//! A rejected edit leaves buffer and cursor untouched and fires nothing.

use std::sync::Arc;

use trellis_core::Value;
use trellis_render::{DrawCommand, Point, Size};

use super::{centered_y, cursor_command, draw_title, text_command};
use crate::widget::validator::{FloatValidator, IntValidator};
use crate::widget::{
    MeasureContext, Reaction, RenderContext, TextBuffer, Validator, WidgetBase, WidgetBehavior,
    WidgetInput,
};

/// What a text entry accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputType {
    /// Any text.
    #[default]
    Text,
    /// Optionally signed whole numbers.
    Integer,
    /// Optionally signed decimal numbers.
    Float,
}

/// An editable line of text.
#[derive(Debug, Clone)]
pub struct TextInput {
    buffer: TextBuffer,
    input_type: InputType,
    /// Maximum length in characters; `0` means unlimited.
    maxchar: usize,
    valid_chars: Option<Vec<char>>,
    password: Option<char>,
    /// Character repeated under the text as an entry line.
    underline: Option<char>,
    validator: Option<Arc<dyn Validator>>,
}

impl Default for TextInput {
    fn default() -> Self {
        Self {
            buffer: TextBuffer::default(),
            input_type: InputType::Text,
            maxchar: 0,
            valid_chars: None,
            password: None,
            underline: None,
            validator: None,
        }
    }
}

impl TextInput {
    pub fn new(input_type: InputType) -> Self {
        Self {
            input_type,
            ..Self::default()
        }
    }

    pub fn with_maxchar(mut self, maxchar: usize) -> Self {
        self.maxchar = maxchar;
        self
    }

    /// Only accept these characters.
    pub fn with_valid_chars(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.valid_chars = Some(chars.into_iter().collect());
        self
    }

    /// Mask the rendered text with `mask`.
    pub fn with_password(mut self, mask: char) -> Self {
        self.password = Some(mask);
        self
    }

    pub fn with_underline(mut self, underline: char) -> Self {
        self.underline = Some(underline);
        self
    }

    pub fn with_validator(mut self, validator: Arc<dyn Validator>) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Set the initial text, checked against the policy.
    pub fn with_text(mut self, text: &str) -> std::result::Result<Self, String> {
        if !self.accepts(text) {
            return Err(format!("'{text}' is not valid for this entry"));
        }
        self.buffer.set_text(text);
        Ok(self)
    }

    #[inline]
    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    /// Cursor position in grapheme clusters.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.buffer.cursor()
    }

    #[inline]
    pub fn input_type(&self) -> InputType {
        self.input_type
    }

    #[inline]
    pub fn is_password(&self) -> bool {
        self.password.is_some()
    }

    /// Whether a whole candidate buffer passes the policy.
    fn accepts(&self, candidate: &str) -> bool {
        if self.maxchar > 0 && candidate.chars().count() > self.maxchar {
            return false;
        }
        if let Some(valid) = &self.valid_chars {
            if !candidate.chars().all(|c| valid.contains(&c)) {
                return false;
            }
        }
        let typed = match self.input_type {
            InputType::Text => true,
            InputType::Integer => IntValidator::new().validate(candidate).is_allowed(),
            InputType::Float => FloatValidator::new().validate(candidate).is_allowed(),
        };
        typed
            && self
                .validator
                .as_ref()
                .is_none_or(|v| v.validate(candidate).is_allowed())
    }

    fn displayed(&self) -> String {
        match self.password {
            Some(mask) => self.buffer.masked(mask),
            None => self.buffer.text().to_string(),
        }
    }

    fn displayed_before_cursor(&self) -> String {
        let before = self.buffer.before_cursor();
        match self.password {
            Some(mask) => TextBuffer::new(before).masked(mask),
            None => before.to_string(),
        }
    }

    fn edit(&mut self, candidate: Option<String>, apply: impl FnOnce(&mut TextBuffer) -> bool) -> Reaction {
        match candidate {
            None => Reaction::Consumed,
            Some(candidate) if self.accepts(&candidate) => {
                apply(&mut self.buffer);
                Reaction::Changed
            }
            Some(_) => Reaction::Rejected,
        }
    }
}

impl WidgetBehavior for TextInput {
    fn kind_name(&self) -> &'static str {
        "text_input"
    }

    fn content_size(&self, base: &WidgetBase, cx: &MeasureContext<'_>) -> Size {
        let font = &base.font.font;
        let mut value = cx.metrics.measure(&self.displayed(), font);
        if self.maxchar > 0 {
            let reserved = cx.metrics.measure(&"0".repeat(self.maxchar), font);
            value.width = value.width.max(reserved.width);
        }
        value.height = value.height.max(cx.metrics.line_height(font));
        // Room for the cursor after the last character
        super::titled_size(base, cx.metrics, value.expand(font.size * 0.25, 0.0))
    }

    fn render(&self, base: &WidgetBase, cx: &RenderContext<'_>, out: &mut Vec<DrawCommand>) {
        let x = draw_title(base, cx.metrics, out);
        let content = base.content_rect();
        let font = &base.font.font;
        let line = cx.metrics.line_height(font);
        let top = centered_y(content, line);

        if let Some(underline) = self.underline {
            let count = self.maxchar.max(self.buffer.len()).max(1);
            out.push(text_command(
                base,
                underline.to_string().repeat(count),
                Point::new(x, top),
            ));
        }
        let shown = self.displayed();
        if !shown.is_empty() {
            out.push(text_command(base, shown, Point::new(x, top)));
        }
        if base.selected {
            out.push(cursor_command(
                base,
                cx.metrics,
                &self.displayed_before_cursor(),
                x,
                cx.theme.cursor_color,
            ));
        }
    }

    fn value(&self) -> Value {
        let text = self.buffer.text();
        match self.input_type {
            InputType::Text => Value::Text(text.to_string()),
            // Partial numbers such as "" or "-" read as zero
            InputType::Integer => Value::Int(text.parse().unwrap_or(0)),
            InputType::Float => Value::Float(text.parse().unwrap_or(0.0)),
        }
    }

    fn handle_input(&mut self, _base: &WidgetBase, input: &WidgetInput) -> Reaction {
        match input {
            WidgetInput::Text(text) => {
                if text.is_empty() {
                    return Reaction::Consumed;
                }
                let candidate = self.buffer.with_insertion(text);
                self.edit(Some(candidate), |buffer| {
                    buffer.insert(text);
                    true
                })
            }
            WidgetInput::Backspace => {
                let candidate = self.buffer.with_backspace();
                self.edit(candidate, TextBuffer::backspace)
            }
            WidgetInput::Delete => {
                let candidate = self.buffer.with_delete();
                self.edit(candidate, TextBuffer::delete)
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
        let text = match (self.input_type, value) {
            (_, Value::Text(text)) => text.clone(),
            (InputType::Integer, Value::Int(i)) => i.to_string(),
            (InputType::Float, Value::Float(f)) => f.to_string(),
            (InputType::Float, Value::Int(i)) => i.to_string(),
            (_, other) => return Err(format!("text_input cannot hold a {}", other.type_name())),
        };
        if !self.accepts(&text) {
            return Err(format!("'{text}' is not valid for this entry"));
        }
        self.buffer.set_text(text);
        Ok(())
    }
}

static_assertions::assert_impl_all!(TextInput: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::WidgetId;
    use trellis_style::{SelectionEffect, WidgetFont};

    use crate::widget::validator::RegexValidator;

    fn base() -> WidgetBase {
        WidgetBase::new(
            WidgetId::from_raw(1),
            "Name".into(),
            WidgetFont::default(),
            SelectionEffect::none(),
        )
    }

    fn type_text(input: &mut TextInput, text: &str) -> Vec<Reaction> {
        let base = base();
        text.chars()
            .map(|c| input.handle_input(&base, &WidgetInput::Text(c.to_string())))
            .collect()
    }

    #[test]
    fn test_integer_rejects_letters() {
        let mut input = TextInput::new(InputType::Integer);
        type_text(&mut input, "-12");
        let before = (input.text().to_string(), input.cursor());

        let reactions = type_text(&mut input, "a");
        assert_eq!(reactions, vec![Reaction::Rejected]);
        assert_eq!((input.text().to_string(), input.cursor()), before);
        assert_eq!(input.value(), Value::Int(-12));
    }

    #[test]
    fn test_float_accepts_partial_forms() {
        let mut input = TextInput::new(InputType::Float);
        let reactions = type_text(&mut input, "-.5");
        assert!(reactions.iter().all(|r| *r == Reaction::Changed));
        assert_eq!(input.value(), Value::Float(-0.5));
        assert_eq!(type_text(&mut input, "."), vec![Reaction::Rejected]);
    }

    #[test]
    fn test_maxchar_and_valid_chars() {
        let mut input = TextInput::new(InputType::Text)
            .with_maxchar(3)
            .with_valid_chars("abc".chars());
        let reactions = type_text(&mut input, "abzca");
        assert_eq!(
            reactions,
            vec![
                Reaction::Changed,
                Reaction::Changed,
                Reaction::Rejected,
                Reaction::Changed,
                Reaction::Rejected,
            ]
        );
        assert_eq!(input.text(), "abc");
    }

    #[test]
    fn test_cursor_editing() {
        let base = base();
        let mut input = TextInput::new(InputType::Text).with_text("helo").unwrap();
        input.handle_input(&base, &WidgetInput::Left);
        input.handle_input(&base, &WidgetInput::Text("l".into()));
        assert_eq!(input.text(), "hello");
        assert_eq!(input.cursor(), 4);

        input.handle_input(&base, &WidgetInput::Home);
        assert_eq!(input.handle_input(&base, &WidgetInput::Backspace), Reaction::Consumed);
        assert_eq!(input.handle_input(&base, &WidgetInput::Delete), Reaction::Changed);
        assert_eq!(input.text(), "ello");
    }

    #[test]
    fn test_custom_validator() {
        let validator = RegexValidator::with_intermediate(r"^[A-Z]{3}$", r"^[A-Z]{0,3}$").unwrap();
        let mut input = TextInput::new(InputType::Text).with_validator(Arc::new(validator));
        type_text(&mut input, "AB");
        assert_eq!(type_text(&mut input, "c"), vec![Reaction::Rejected]);
        assert_eq!(type_text(&mut input, "C"), vec![Reaction::Changed]);
        assert_eq!(input.text(), "ABC");
    }

    #[test]
    fn test_password_masks_display_only() {
        let input = TextInput::new(InputType::Text)
            .with_password('*')
            .with_text("secret")
            .unwrap();
        assert_eq!(input.displayed(), "******");
        assert_eq!(input.value(), Value::Text("secret".into()));
    }
}
