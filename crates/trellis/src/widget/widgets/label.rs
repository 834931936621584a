//! Label widget for text display.
//!
//! A [`Label`] shows its title as one or more lines of text. Explicit
//! newlines always break; beyond that, [`LabelWrap`] decides how long
//! lines are folded:
//!
//! - [`LabelWrap::None`]: one line per paragraph
//! - [`LabelWrap::Chars`]: at most N characters per line
//! - [`LabelWrap::MenuWidth`]: lines fit the width of the menu
//!
//! Folding breaks between words. A single word longer than a line is
//! split between characters.

use trellis_render::{DrawCommand, Font, Point, Size, TextMetrics};
use unicode_segmentation::UnicodeSegmentation;

use super::text_command;
use crate::widget::{MeasureContext, RenderContext, WidgetBase, WidgetBehavior};

/// How a label folds long text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelWrap {
    /// Never fold.
    #[default]
    None,
    /// Fold after at most this many characters.
    Chars(usize),
    /// Fold to the menu width minus the label's padding.
    MenuWidth,
}

/// A widget that displays text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Label {
    wrap: LabelWrap,
}

impl Label {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_wrap(mut self, wrap: LabelWrap) -> Self {
        self.wrap = wrap;
        self
    }

    #[inline]
    pub fn wrap(&self) -> LabelWrap {
        self.wrap
    }

    /// The lines the label's text is displayed as.
    pub fn lines(&self, base: &WidgetBase, metrics: &dyn TextMetrics, viewport_width: f32) -> Vec<String> {
        let font = &base.font.font;
        let mut lines = Vec::new();
        for paragraph in base.title.split('\n') {
            match self.wrap {
                LabelWrap::None => lines.push(paragraph.to_string()),
                LabelWrap::Chars(limit) => {
                    let limit = limit.max(1);
                    fold(paragraph, |line| line.graphemes(true).count() <= limit, &mut lines);
                }
                LabelWrap::MenuWidth => {
                    let available = viewport_width - base.padding.horizontal();
                    fold(
                        paragraph,
                        |line| fits_width(metrics, font, line, available),
                        &mut lines,
                    );
                }
            }
        }
        lines
    }
}

fn fits_width(metrics: &dyn TextMetrics, font: &Font, line: &str, available: f32) -> bool {
    metrics.measure(line, font).width <= available
}

/// Greedy word folding of one paragraph into `lines`.
fn fold(paragraph: &str, fits: impl Fn(&str) -> bool, lines: &mut Vec<String>) {
    let mut current = String::new();
    for word in paragraph.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if fits(&candidate) {
            current = candidate;
            continue;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if fits(word) {
            current = word.to_string();
            continue;
        }
        // Split an overlong word; every piece holds at least one grapheme
        for grapheme in word.graphemes(true) {
            let mut candidate = current.clone();
            candidate.push_str(grapheme);
            if current.is_empty() || fits(&candidate) {
                current = candidate;
            } else {
                lines.push(std::mem::replace(&mut current, grapheme.to_string()));
            }
        }
    }
    lines.push(current);
}

impl WidgetBehavior for Label {
    fn kind_name(&self) -> &'static str {
        "label"
    }

    fn content_size(&self, base: &WidgetBase, cx: &MeasureContext<'_>) -> Size {
        let font = &base.font.font;
        self.lines(base, cx.metrics, cx.viewport_width)
            .iter()
            .map(|line| cx.metrics.measure(line, font))
            .fold(Size::ZERO, |acc, line| {
                Size::new(acc.width.max(line.width), acc.height + line.height)
            })
    }

    fn render(&self, base: &WidgetBase, cx: &RenderContext<'_>, out: &mut Vec<DrawCommand>) {
        let content = base.content_rect();
        let font = &base.font.font;
        let mut y = content.top();
        for line in self.lines(base, cx.metrics, cx.viewport_width) {
            let size = cx.metrics.measure(&line, font);
            let x = content.left() + base.alignment.offset(content.width(), size.width);
            if !line.is_empty() {
                out.push(text_command(base, line, Point::new(x, y)));
            }
            y += size.height;
        }
    }

    fn is_selectable(&self) -> bool {
        false
    }
}
