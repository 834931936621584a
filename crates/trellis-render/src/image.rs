//! Image size lookup.
//!
//! Decoding images is the drawing backend's job. Layout only needs to know
//! how large an image is, which it asks an [`ImageSizeProvider`] for.

use std::collections::HashMap;

use crate::types::Size;

/// Answers "how big is this image?" for layout.
pub trait ImageSizeProvider {
    /// Intrinsic size of the image at `path`, or `None` if unknown.
    fn image_size(&self, path: &str) -> Option<Size>;
}

/// An in-memory registry of image sizes keyed by path.
#[derive(Debug, Clone, Default)]
pub struct ImageCatalog {
    sizes: HashMap<String, Size>,
}

impl ImageCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an image size.
    pub fn insert(&mut self, path: impl Into<String>, size: Size) {
        self.sizes.insert(path.into(), size);
    }

    /// Builder-style registration.
    pub fn with(mut self, path: impl Into<String>, size: Size) -> Self {
        self.insert(path, size);
        self
    }

    /// Number of registered images.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

impl ImageSizeProvider for ImageCatalog {
    fn image_size(&self, path: &str) -> Option<Size> {
        self.sizes.get(path).copied()
    }
}

/// Bounding box of an image after scaling and rotating it by `angle` degrees.
pub fn transformed_size(size: Size, scale: (f32, f32), angle: f32) -> Size {
    let w = size.width * scale.0;
    let h = size.height * scale.1;
    if angle % 360.0 == 0.0 {
        return Size::new(w.abs(), h.abs());
    }
    let (sin, cos) = angle.to_radians().sin_cos();
    Size::new(
        (w * cos).abs() + (h * sin).abs(),
        (w * sin).abs() + (h * cos).abs(),
    )
}
