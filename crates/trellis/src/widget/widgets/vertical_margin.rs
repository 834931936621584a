//! Fixed vertical spacing between widgets.

use trellis_render::{DrawCommand, Size};

use crate::widget::{MeasureContext, RenderContext, WidgetBase, WidgetBehavior};

/// An invisible widget that takes up vertical space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalMargin {
    height: f32,
}

impl VerticalMargin {
    pub fn new(height: f32) -> Self {
        Self { height }
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }
}

impl WidgetBehavior for VerticalMargin {
    fn kind_name(&self) -> &'static str {
        "vertical_margin"
    }

    fn content_size(&self, _base: &WidgetBase, _cx: &MeasureContext<'_>) -> Size {
        Size::new(0.0, self.height)
    }

    fn render(&self, _base: &WidgetBase, _cx: &RenderContext<'_>, _out: &mut Vec<DrawCommand>) {}

    fn is_selectable(&self) -> bool {
        false
    }
}
