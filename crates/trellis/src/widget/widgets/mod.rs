//! Standard widgets for Trellis.
//!
//! This module provides the closed set of widget kinds:
//!
//! - [`Button`]: activation with an optional menu action
//! - [`Label`], [`Image`], [`Url`], [`VerticalMargin`]: passive content
//! - [`ToggleSwitch`], [`Selector`], [`DropSelect`]: option widgets
//! - [`TextInput`], [`ColorInput`]: text entry
//! - [`Frame`]: the only container

mod button;
mod color_input;
mod drop_select;
mod frame;
mod image;
mod label;
pub(crate) mod scroll_bar;
mod selector;
mod text_input;
mod toggle_switch;
mod url;
mod vertical_margin;

pub use button::Button;
pub use color_input::{ColorFormat, ColorInput};
pub use drop_select::{DropOverlay, DropSelect};
pub use frame::Frame;
pub use image::Image;
pub use label::{Label, LabelWrap};
pub use selector::{Selector, SelectorStyle};
pub use text_input::{InputType, TextInput};
pub use toggle_switch::ToggleSwitch;
pub use url::Url;
pub use vertical_margin::VerticalMargin;

use trellis_render::{DrawCommand, Font, Point, Rect, Size, TextMetrics};

use super::WidgetBase;

/// Space between a widget's title and its value part.
pub(crate) fn title_gap(font: &Font) -> f32 {
    font.size * 0.5
}

/// Content size of a title followed by a value part of size `value`.
pub(crate) fn titled_size(base: &WidgetBase, metrics: &dyn TextMetrics, value: Size) -> Size {
    if base.title.is_empty() {
        return value;
    }
    let font = &base.font.font;
    let title = metrics.measure(&base.title, font);
    Size::new(
        title.width + title_gap(font) + value.width,
        title.height.max(value.height),
    )
}

/// Top coordinate that centers something of `height` vertically in `rect`.
pub(crate) fn centered_y(rect: Rect, height: f32) -> f32 {
    rect.top() + (rect.height() - height) / 2.0
}

/// A text command in the widget's font and current text color.
pub(crate) fn text_command(base: &WidgetBase, text: impl Into<String>, origin: Point) -> DrawCommand {
    DrawCommand::Text {
        text: text.into(),
        origin,
        font: base.font.font.clone(),
        color: base.text_color(),
    }
}

/// Draw the title at the start of the content rect.
///
/// Returns the x coordinate where the value part begins.
pub(crate) fn draw_title(
    base: &WidgetBase,
    metrics: &dyn TextMetrics,
    out: &mut Vec<DrawCommand>,
) -> f32 {
    let content = base.content_rect();
    if base.title.is_empty() {
        return content.left();
    }
    let font = &base.font.font;
    let size = metrics.measure(&base.title, font);
    out.push(text_command(
        base,
        base.title.clone(),
        Point::new(content.left(), centered_y(content, size.height)),
    ));
    content.left() + size.width + title_gap(font)
}

/// Text cursor of an entry widget, drawn after `prefix` starting at `x`.
pub(crate) fn cursor_command(
    base: &WidgetBase,
    metrics: &dyn TextMetrics,
    prefix: &str,
    x: f32,
    color: trellis_render::Color,
) -> DrawCommand {
    let content = base.content_rect();
    let font = &base.font.font;
    let height = metrics.line_height(font);
    let cx = x + metrics.measure(prefix, font).width;
    let top = centered_y(content, height);
    DrawCommand::Line {
        from: Point::new(cx, top),
        to: Point::new(cx, top + height),
        color,
        width: (font.size / 15.0).max(1.0),
    }
}
