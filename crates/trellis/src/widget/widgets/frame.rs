//! Frame widget implementation.
//!
//! A [`Frame`] is the only container kind. It packs its children along one
//! [`Axis`] in insertion order and, when it has a fixed size the content
//! does not fit, scrolls them inside a clipped window.
//!
//! Geometry is computed by the layout engine; the frame itself only keeps
//! the packing configuration and the results of the last pass.

use trellis_core::WidgetId;
use trellis_render::{Color, DrawCommand, Size};

use crate::widget::layout::ScrollState;
use crate::widget::{Axis, MeasureContext, RenderContext, WidgetBase, WidgetBehavior};

/// A container that packs children along an axis.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub(crate) axis: Axis,
    pub(crate) children: Vec<WidgetId>,

    /// Fixed outer width; `None` derives it from the content.
    pub(crate) width: Option<f32>,
    /// Fixed outer height; `None` derives it from the content.
    pub(crate) height: Option<f32>,

    pub(crate) background: Option<Color>,

    /// Center the packed content along the axis while it fits.
    pub(crate) center_content: bool,

    /// Packed content size from the last measure pass.
    pub(crate) packed: Size,
    pub(crate) scroll: ScrollState,
}

impl Frame {
    /// Create an empty frame packing along `axis`.
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            ..Self::default()
        }
    }

    /// Give the frame a fixed size on either axis.
    pub fn with_size(mut self, width: Option<f32>, height: Option<f32>) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_background(mut self, color: Option<Color>) -> Self {
        self.background = color;
        self
    }

    pub fn with_center_content(mut self, center: bool) -> Self {
        self.center_content = center;
        self
    }

    /// Children in packing order.
    #[inline]
    pub fn children(&self) -> &[WidgetId] {
        &self.children
    }

    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    #[inline]
    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    /// Size of the packed children, which may exceed the visible window.
    #[inline]
    pub fn packed_size(&self) -> Size {
        self.packed
    }

    #[inline]
    pub fn fixed_size(&self) -> (Option<f32>, Option<f32>) {
        (self.width, self.height)
    }

    #[inline]
    pub fn background(&self) -> Option<Color> {
        self.background
    }
}

impl WidgetBehavior for Frame {
    fn kind_name(&self) -> &'static str {
        "frame"
    }

    // Frames are measured by packing their children.
    fn content_size(&self, _base: &WidgetBase, _cx: &MeasureContext<'_>) -> Size {
        self.packed
    }

    fn render(&self, base: &WidgetBase, _cx: &RenderContext<'_>, out: &mut Vec<DrawCommand>) {
        if let Some(color) = self.background {
            out.push(DrawCommand::FillRect {
                rect: base.rect,
                color,
            });
        }
    }

    fn is_selectable(&self) -> bool {
        false
    }
}
