//! Option selector.
//!
//! A [`Selector`] cycles through an ordered list of `(label, value)`
//! options with left and right. By default it wraps past either end; with
//! wrapping off it stops at the first and last option. Confirm fires the
//! activation callback with the current option.
//!
//! # Styles
//!
//! - [`SelectorStyle::Classic`]: `< label >`
//! - [`SelectorStyle::Fancy`]: the label above one dot per option, the
//!   current one filled

use trellis_core::{Choice, ConfigurationError, Result, Value};
use trellis_render::{DrawCommand, Font, Point, Rect, Size, TextMetrics};

use super::{centered_y, draw_title, text_command};
use crate::widget::{
    MeasureContext, Reaction, RenderContext, WidgetBase, WidgetBehavior, WidgetInput,
};

/// How the current option is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectorStyle {
    #[default]
    Classic,
    Fancy,
}

/// Picks one option from a list with left and right.
#[derive(Debug, Clone, PartialEq)]
pub struct Selector {
    items: Vec<(String, Value)>,
    index: usize,
    style: SelectorStyle,
    wrap: bool,
}

impl Selector {
    /// Create a selector showing `items[default]`.
    ///
    /// Fails if there are no items or the default is out of range.
    pub fn new(items: Vec<(String, Value)>, default: usize) -> Result<Self> {
        if items.is_empty() {
            return Err(ConfigurationError::EmptyOptions { widget: "selector" }.into());
        }
        if default >= items.len() {
            return Err(ConfigurationError::IndexOutOfRange {
                index: default,
                len: items.len(),
            }
            .into());
        }
        Ok(Self {
            items,
            index: default,
            style: SelectorStyle::Classic,
            wrap: true,
        })
    }

    pub fn with_style(mut self, style: SelectorStyle) -> Self {
        self.style = style;
        self
    }

    /// Whether left and right wrap past the ends.
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn items(&self) -> &[(String, Value)] {
        &self.items
    }

    #[inline]
    pub fn style(&self) -> SelectorStyle {
        self.style
    }

    /// The current option.
    pub fn current(&self) -> Choice {
        let (label, value) = &self.items[self.index];
        Choice::new(label.clone(), value.clone(), self.index)
    }

    fn step(&mut self, forward: bool) -> Reaction {
        let last = self.items.len() - 1;
        let next = match (forward, self.index) {
            (true, i) if i < last => i + 1,
            (false, i) if i > 0 => i - 1,
            (true, _) if self.wrap => 0,
            (false, _) if self.wrap => last,
            _ => return Reaction::Consumed,
        };
        if next == self.index {
            // A single option never changes
            return Reaction::Consumed;
        }
        self.index = next;
        Reaction::Changed
    }

    fn display(&self, label: &str) -> String {
        match self.style {
            SelectorStyle::Classic => format!("< {label} >"),
            SelectorStyle::Fancy => label.to_string(),
        }
    }

    fn dot_size(font: &Font) -> f32 {
        (font.size * 0.25).max(2.0)
    }

    /// Size of the value part, wide enough for every option.
    fn value_size(&self, metrics: &dyn TextMetrics, font: &Font) -> Size {
        let mut size = self
            .items
            .iter()
            .map(|(label, _)| metrics.measure(&self.display(label), font))
            .fold(Size::ZERO, |acc, s| Size::new(acc.width.max(s.width), acc.height.max(s.height)));
        if self.style == SelectorStyle::Fancy {
            let dot = Self::dot_size(font);
            let dots_width = self.items.len() as f32 * dot * 2.0 - dot;
            size = Size::new(size.width.max(dots_width), size.height + dot * 2.0);
        }
        size
    }
}

impl WidgetBehavior for Selector {
    fn kind_name(&self) -> &'static str {
        "selector"
    }

    fn content_size(&self, base: &WidgetBase, cx: &MeasureContext<'_>) -> Size {
        let value = self.value_size(cx.metrics, &base.font.font);
        super::titled_size(base, cx.metrics, value)
    }

    fn render(&self, base: &WidgetBase, cx: &RenderContext<'_>, out: &mut Vec<DrawCommand>) {
        let x = draw_title(base, cx.metrics, out);
        let content = base.content_rect();
        let font = &base.font.font;
        let area = self.value_size(cx.metrics, font);
        let area = Rect::new(x, centered_y(content, area.height), area.width, area.height);

        let text = self.display(&self.items[self.index].0);
        let size = cx.metrics.measure(&text, font);
        let text_x = area.left() + (area.width() - size.width) / 2.0;
        out.push(text_command(base, text, Point::new(text_x, area.top())));

        if self.style == SelectorStyle::Fancy {
            let dot = Self::dot_size(font);
            let dots_width = self.items.len() as f32 * dot * 2.0 - dot;
            let mut dot_x = area.left() + (area.width() - dots_width) / 2.0;
            let dot_y = area.top() + size.height + dot / 2.0;
            for i in 0..self.items.len() {
                let rect = Rect::new(dot_x, dot_y, dot, dot);
                out.push(if i == self.index {
                    DrawCommand::FillRect {
                        rect,
                        color: base.text_color(),
                    }
                } else {
                    DrawCommand::StrokeRect {
                        rect,
                        color: base.text_color(),
                        width: 1.0,
                    }
                });
                dot_x += dot * 2.0;
            }
        }
    }

    fn value(&self) -> Value {
        Value::Choice(self.current())
    }

    fn handle_input(&mut self, _base: &WidgetBase, input: &WidgetInput) -> Reaction {
        match input {
            WidgetInput::Left => self.step(false),
            WidgetInput::Right => self.step(true),
            _ => Reaction::Ignored,
        }
    }

    fn activate(&mut self, _base: &WidgetBase) -> Reaction {
        Reaction::Returned
    }

    /// Clicking the left half retreats, the right half advances.
    fn click(&mut self, base: &WidgetBase, pos: Point) -> Reaction {
        self.step(pos.x >= base.rect.center().x)
    }

    fn set_value(&mut self, value: &Value) -> std::result::Result<(), String> {
        let index = match value {
            Value::Int(i) => usize::try_from(*i).ok(),
            Value::Choice(choice) => Some(choice.index),
            Value::Text(label) => self.items.iter().position(|(l, _)| l == label),
            other => return Err(format!("selector cannot select a {}", other.type_name())),
        };
        match index {
            Some(i) if i < self.items.len() => {
                self.index = i;
                Ok(())
            }
            _ => Err(format!("no option matches {value:?}")),
        }
    }
}
