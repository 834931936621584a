//! Image widget.
//!
//! The widget never decodes pixels. Its size comes from the menu's
//! [`ImageSizeProvider`](trellis_render::ImageSizeProvider), scaled and
//! then grown to the bounding box of the rotated image; drawing hands the
//! path to the surface.

use trellis_core::{ConfigurationError, Result};
use trellis_render::{DrawCommand, Size, transformed_size};

use crate::widget::{MeasureContext, RenderContext, WidgetBase, WidgetBehavior};

/// A static picture.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    path: String,
    scale: (f32, f32),
    angle: f32,
}

impl Image {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            scale: (1.0, 1.0),
            angle: 0.0,
        }
    }

    /// Scale factors on each axis. Both must be positive.
    pub fn with_scale(mut self, sx: f32, sy: f32) -> Result<Self> {
        ConfigurationError::check_positive("image scale", sx)?;
        ConfigurationError::check_positive("image scale", sy)?;
        self.scale = (sx, sy);
        Ok(self)
    }

    /// Rotation in degrees, counter-clockwise.
    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[inline]
    pub fn scale(&self) -> (f32, f32) {
        self.scale
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }
}

impl WidgetBehavior for Image {
    fn kind_name(&self) -> &'static str {
        "image"
    }

    fn content_size(&self, _base: &WidgetBase, cx: &MeasureContext<'_>) -> Size {
        // An image that disappeared from the catalog lays out as empty
        cx.images
            .image_size(&self.path)
            .map_or(Size::ZERO, |size| transformed_size(size, self.scale, self.angle))
    }

    fn render(&self, base: &WidgetBase, _cx: &RenderContext<'_>, out: &mut Vec<DrawCommand>) {
        out.push(DrawCommand::Image {
            path: self.path.clone(),
            rect: base.content_rect(),
            angle: self.angle,
        });
    }

    fn is_selectable(&self) -> bool {
        false
    }
}
