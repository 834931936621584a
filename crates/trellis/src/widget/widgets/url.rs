//! Hyperlink widget.
//!
//! A [`Url`] renders its title underlined and, when activated, asks the
//! menu to open its link through the configured opener before the
//! activation callback fires with the link as value.

use trellis_core::Value;
use trellis_render::{DrawCommand, Point, Size};

use super::{centered_y, text_command};
use crate::widget::{MeasureContext, Reaction, RenderContext, WidgetBase, WidgetBehavior};

/// A clickable link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Url {
    href: String,
}

impl Url {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }

    /// The link target.
    #[inline]
    pub fn href(&self) -> &str {
        &self.href
    }
}

impl WidgetBehavior for Url {
    fn kind_name(&self) -> &'static str {
        "url"
    }

    fn content_size(&self, base: &WidgetBase, cx: &MeasureContext<'_>) -> Size {
        let font = &base.font.font;
        let text = cx.metrics.measure(&base.title, font);
        // Room for the underline
        text.expand(0.0, underline_width(font.size) * 2.0)
    }

    fn render(&self, base: &WidgetBase, cx: &RenderContext<'_>, out: &mut Vec<DrawCommand>) {
        let content = base.content_rect();
        let font = &base.font.font;
        let size = cx.metrics.measure(&base.title, font);
        let width = underline_width(font.size);
        let top = centered_y(content, size.height + width * 2.0);
        out.push(text_command(base, base.title.clone(), Point::new(content.left(), top)));

        let y = top + size.height + width;
        out.push(DrawCommand::Line {
            from: Point::new(content.left(), y),
            to: Point::new(content.left() + size.width, y),
            color: base.text_color(),
            width,
        });
    }

    fn value(&self) -> Value {
        Value::Text(self.href.clone())
    }

    fn activate(&mut self, _base: &WidgetBase) -> Reaction {
        Reaction::OpenUrl(self.href.clone())
    }
}

fn underline_width(font_size: f32) -> f32 {
    (font_size / 15.0).max(1.0)
}
