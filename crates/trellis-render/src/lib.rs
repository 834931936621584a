//! Drawing abstraction for Trellis.
//!
//! This crate defines the boundary between the menu engine and whatever
//! actually puts pixels on screen:
//!
//! - [`types`]: geometry ([`Point`], [`Size`], [`Rect`]) and [`Color`]
//! - [`DrawCommand`]: backend-agnostic drawing primitives
//! - [`Surface`]: the immediate-mode target commands are submitted to, with
//!   [`DrawList`] as a recording implementation
//! - [`TextMetrics`] and [`ImageSizeProvider`]: measurement services used by layout
//!
//! # Example
//!
//! ```
//! use trellis_render::{Color, DrawCommand, DrawList, Rect, Size, Surface};
//!
//! let mut list = DrawList::new(Size::new(640.0, 480.0))?;
//! list.begin_frame()?;
//! list.submit(&DrawCommand::FillRect {
//!     rect: Rect::new(0.0, 0.0, 640.0, 480.0),
//!     color: Color::BLACK,
//! })?;
//! assert_eq!(list.commands().len(), 1);
//! # Ok::<(), trellis_render::RenderError>(())
//! ```

pub mod command;
mod error;
pub mod font;
pub mod image;
pub mod surface;
pub mod types;

pub use command::DrawCommand;
pub use error::{RenderError, RenderResult};
pub use font::{FixedAdvanceMetrics, Font, TextMetrics};
pub use image::{ImageCatalog, ImageSizeProvider, transformed_size};
pub use surface::{DrawList, Surface};
pub use types::{Color, Point, Rect, Size};
